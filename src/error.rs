use thiserror::Error;

use crate::Gesture;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CardError {
    #[error("{0}")]
    InvalidConfiguration(String),
}

/// Reasons a bound entity could not be turned into a numeric reading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReadingError {
    #[error("No entity configured")]
    EntityNotConfigured,
    #[error("Malformed entity id: {0}")]
    InvalidEntityId(String),
    #[error("Entity not found: {0}")]
    EntityNotFound(String),
    #[error("Entity {entity_id} has a non numeric state: {state}")]
    NotNumeric { entity_id: String, state: String },
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action channel is closed. Error sending action request via mpsc::channel.")]
    ChannelClosed,
    #[error("Service must be given as <domain>.<service>, got: {0}")]
    InvalidService(String),
    #[error("The {0} action needs an entity but none is configured")]
    MissingEntity(Gesture),
}
