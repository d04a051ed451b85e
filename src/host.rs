use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use crate::ReadingError;

static ENTITY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_]+\.[a-z0-9_]+$").expect("entity id pattern is valid")
});

/// Checks the `<domain>.<object_id>` shape of an entity id.
pub fn is_valid_entity_id(entity_id: &str) -> bool {
    ENTITY_ID.is_match(entity_id)
}

/// Snapshot of one entity as the host publishes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    pub last_changed: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl EntityState {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: HashMap::new(),
            last_changed: now,
            last_updated: now,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.attributes
            .get("unit_of_measurement")
            .and_then(|unit| unit.as_str())
    }

    /// Parses the state as a finite number. Surrounding whitespace is ignored.
    pub fn numeric_state(&self) -> Result<f64, ReadingError> {
        self.state
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ReadingError::NotNumeric {
                entity_id: self.entity_id.clone(),
                state: self.state.clone(),
            })
    }
}

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateStore(HashMap<String, EntityState>);

impl Deref for StateStore {
    type Target = HashMap<String, EntityState>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StateStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entity, keyed by its own id.
    pub fn store(&mut self, entity: EntityState) -> Option<EntityState> {
        self.0.insert(entity.entity_id.clone(), entity)
    }

    pub fn get_state(&self, entity_id: &str) -> Option<&EntityState> {
        self.0.get(entity_id)
    }

    /// Looks up an entity for display, distinguishing a malformed id from a missing entity.
    pub fn lookup(&self, entity_id: &str) -> Result<&EntityState, ReadingError> {
        if !is_valid_entity_id(entity_id) {
            return Err(ReadingError::InvalidEntityId(entity_id.to_string()));
        }
        self.get_state(entity_id)
            .ok_or_else(|| ReadingError::EntityNotFound(entity_id.to_string()))
    }
}

/// The parts of the host's state object the card reads.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hass {
    #[serde(default)]
    pub states: StateStore,
    #[serde(default)]
    pub language: Option<String>,
}

impl Hass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_state(mut self, entity: EntityState) -> Self {
        self.states.store(entity);
        self
    }
}
