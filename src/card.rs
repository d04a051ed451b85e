use schemars::Schema;

use crate::{
    action_request, has_action, read_battery, read_voc, ActionDispatcher, ActionError,
    AirQualityView, CardConfig, CardError, CardView, ErrorCard, Gesture, Hass, Language,
    LeafState, MessageKey, ValueDisplay, EDITOR_TYPE, LEAF_COUNT,
};

/// Handle on the dashboard the card lives in.
pub trait Lovelace {
    fn set_edit_mode(&mut self, enabled: bool);
}

/// What changed since the last update, as reported by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangedProps<'a> {
    pub config_changed: bool,
    /// Host state before the change. `None` when the host state did not change.
    pub old_hass: Option<&'a Hass>,
}

#[derive(Default)]
pub struct SojjoAirQualityCard {
    config: Option<CardConfig>,
    lovelace: Option<Box<dyn Lovelace>>,
}

impl SojjoAirQualityCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lovelace(lovelace: Box<dyn Lovelace>) -> Self {
        Self {
            config: None,
            lovelace: Some(lovelace),
        }
    }

    /// Configuration for a freshly added card.
    pub fn get_stub_config() -> CardConfig {
        CardConfig::default()
    }

    /// Element name of the configuration editor.
    pub fn get_config_element() -> &'static str {
        EDITOR_TYPE
    }

    pub fn config_schema() -> Schema {
        CardConfig::schema()
    }

    /// Rows the card occupies in the dashboard layout.
    pub fn get_card_size(&self) -> usize {
        3
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Replaces the configuration. Field contents are only checked at render time.
    pub fn set_config(&mut self, config: Option<CardConfig>) -> Result<(), CardError> {
        let Some(config) = config else {
            return Err(CardError::InvalidConfiguration(
                MessageKey::CommonInvalidConfiguration
                    .localize(Language::default())
                    .to_string(),
            ));
        };

        if config.test_gui {
            match self.lovelace.as_mut() {
                Some(lovelace) => lovelace.set_edit_mode(true),
                None => log::warn!("test_gui is set but no dashboard is attached"),
            }
        }

        self.config = Some(config);
        Ok(())
    }

    /// Decides whether an update needs a new render.
    pub fn should_update(&self, changed: &ChangedProps, hass: &Hass) -> bool {
        let Some(config) = &self.config else {
            return false;
        };
        if changed.config_changed {
            return true;
        }
        let Some(entity_id) = config.entity_id() else {
            return false;
        };
        let Some(old_hass) = changed.old_hass else {
            return false;
        };

        let tracked = std::iter::once(entity_id).chain(config.battery_entity_id());
        let update = tracked
            .into_iter()
            .any(|id| old_hass.states.get_state(id) != hass.states.get_state(id));
        log::debug!("[{}] should update: {}", entity_id, update);
        update
    }

    /// Builds the view for the current host state. `None` until the card is configured.
    pub fn render(&self, hass: &Hass) -> Option<CardView> {
        let config = self.config.as_ref()?;
        let language = Language::from_code_or_default(hass.language.as_deref());

        if config.show_warning {
            return Some(CardView::Warning(
                MessageKey::CommonShowWarning.localize(language).to_string(),
            ));
        }
        if config.show_error {
            return Some(CardView::Error(ErrorCard {
                error: MessageKey::CommonShowError.localize(language).to_string(),
                orig_config: config.clone(),
            }));
        }

        let (band, leaves, value, message) = match read_voc(hass, config) {
            Ok(reading) => (
                Some(reading.band),
                reading.band.leaves(),
                ValueDisplay::Reading {
                    value: reading.value,
                    unit: reading.unit,
                },
                reading.band.message_key().localize(language).to_string(),
            ),
            Err(err) => {
                log::debug!("Showing VOC reading as unavailable: {}", err);
                (
                    None,
                    [LeafState::Dim; LEAF_COUNT],
                    ValueDisplay::Unavailable,
                    err.localize(language),
                )
            }
        };

        Some(CardView::AirQuality(AirQualityView {
            label: format!(
                "SojjoAirQuality: {}",
                config.entity_id().unwrap_or("No Entity Defined")
            ),
            header: config.name.clone(),
            band,
            leaves,
            value,
            message,
            battery: read_battery(hass, config),
            has_hold: has_action(config.hold_action.as_ref()),
            has_double_click: has_action(config.double_tap_action.as_ref()),
        }))
    }

    /// Forwards a gesture on the card to the host's action handling.
    pub fn handle_action(
        &self,
        gesture: Gesture,
        dispatcher: &dyn ActionDispatcher,
    ) -> Result<(), ActionError> {
        let Some(config) = &self.config else {
            return Ok(());
        };
        let Some(request) = action_request(config, gesture)? else {
            return Ok(());
        };
        log::debug!("Dispatching {} action: {:?}", gesture, request);
        dispatcher.dispatch(request).inspect_err(|err| {
            log::warn!("Dispatching {} action failed: {}", gesture, err);
        })
    }
}
