use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::ActionConfig;

/// User supplied card configuration, as written in the dashboard YAML or produced by the editor.
///
/// Keys the card does not know about are kept in `extra` so the stored configuration is an
/// exact copy of what was supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// VOC sensor entity, reported in ppb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Battery level entity of the same sensor, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_entity: Option<String>,
    /// Header shown above the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_warning: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<ActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_action: Option<ActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_action: Option<ActionConfig>,
    /// Puts the dashboard into edit mode when the card is configured.
    #[serde(default, skip_serializing_if = "is_false")]
    pub test_gui: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CardConfig {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: Some(entity.into()),
            ..Default::default()
        }
    }

    pub fn with_battery_entity(mut self, entity: impl Into<String>) -> Self {
        self.battery_entity = Some(entity.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// VOC entity id. A cleared (empty) field counts as unset.
    pub fn entity_id(&self) -> Option<&str> {
        self.entity.as_deref().filter(|id| !id.is_empty())
    }

    pub fn battery_entity_id(&self) -> Option<&str> {
        self.battery_entity.as_deref().filter(|id| !id.is_empty())
    }

    /// Schema handed to the configuration editor.
    pub fn schema() -> Schema {
        schemars::schema_for!(CardConfig)
    }
}
