use crate::{BatteryIcon, CardConfig, Hass, Language, MessageKey, ReadingError, VocBand};

/// Unit shown when the sensor does not report one.
pub const DEFAULT_VOC_UNIT: &str = "ppb";

#[derive(Debug, Clone, PartialEq)]
pub struct VocReading {
    pub value: f64,
    pub unit: String,
    pub band: VocBand,
}

/// Reads the configured VOC entity from the current host state.
pub fn read_voc(hass: &Hass, config: &CardConfig) -> Result<VocReading, ReadingError> {
    let entity_id = config
        .entity_id()
        .ok_or(ReadingError::EntityNotConfigured)?;
    let entity = hass.states.lookup(entity_id)?;
    let value = entity.numeric_state()?;
    let band = VocBand::classify(value).ok_or_else(|| ReadingError::NotNumeric {
        entity_id: entity_id.to_string(),
        state: entity.state.clone(),
    })?;
    Ok(VocReading {
        value,
        unit: entity
            .unit_of_measurement()
            .unwrap_or(DEFAULT_VOC_UNIT)
            .to_string(),
        band,
    })
}

/// Battery badge for the configured battery entity.
///
/// `None` when no battery entity is configured. A configured entity that is missing or has no
/// numeric state shows the unknown icon.
pub fn read_battery(hass: &Hass, config: &CardConfig) -> Option<BatteryIcon> {
    let entity_id = config.battery_entity_id()?;
    let icon = hass
        .states
        .lookup(entity_id)
        .and_then(|entity| entity.numeric_state())
        .map(BatteryIcon::classify)
        .unwrap_or_else(|err| {
            log::debug!("Battery badge unknown: {}", err);
            BatteryIcon::Unknown
        });
    Some(icon)
}

impl ReadingError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            ReadingError::EntityNotConfigured => MessageKey::StateNoEntity,
            ReadingError::InvalidEntityId(_) => MessageKey::StateInvalidEntityId,
            ReadingError::EntityNotFound(_) => MessageKey::StateEntityNotFound,
            ReadingError::NotNumeric { .. } => MessageKey::StateNotNumeric,
        }
    }

    pub fn entity_id(&self) -> Option<&str> {
        match self {
            ReadingError::EntityNotConfigured => None,
            ReadingError::InvalidEntityId(id) | ReadingError::EntityNotFound(id) => Some(id),
            ReadingError::NotNumeric { entity_id, .. } => Some(entity_id),
        }
    }

    /// Text shown in place of the advisory message.
    pub fn localize(&self, language: Language) -> String {
        let text = self.message_key().localize(language);
        match self.entity_id() {
            Some(id) => text.replacen("{entity}", id, 1),
            None => text.to_string(),
        }
    }
}
