use serde::{Deserialize, Serialize};

use crate::{Language, MessageKey};

pub const CARD_TYPE: &str = "sojjoairquality-card";
pub const EDITOR_TYPE: &str = "sojjoairquality-card-editor";
pub const CARD_NAME: &str = "Sojjo AirQuality Card";
pub const CARD_DESCRIPTION: &str =
    "Shows a VOC air-quality reading as a row of leaves with an advisory message";
pub const CARD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry in the dashboard's card picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCardInfo {
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub preview: bool,
}

impl CustomCardInfo {
    pub fn sojjo_airquality() -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            name: CARD_NAME.to_string(),
            description: CARD_DESCRIPTION.to_string(),
            preview: false,
        }
    }
}

/// The host's list of custom cards offered in the picker.
pub trait CardRegistry {
    fn register_card(&mut self, info: CustomCardInfo);
}

impl CardRegistry for Vec<CustomCardInfo> {
    fn register_card(&mut self, info: CustomCardInfo) {
        if self.iter().any(|known| known.card_type == info.card_type) {
            log::debug!("{} is already registered", info.card_type);
            return;
        }
        self.push(info);
    }
}

/// Announces the card to the host. Called once while the host loads its cards.
pub fn register(registry: &mut dyn CardRegistry) {
    log::info!(
        "{} {} {}",
        CARD_TYPE.to_uppercase(),
        MessageKey::CommonVersion.localize(Language::default()),
        CARD_VERSION
    );
    registry.register_card(CustomCardInfo::sojjo_airquality());
}
