use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ActionError, CardConfig};

/// Action bound to a gesture in the card configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ActionConfig {
    MoreInfo,
    Toggle,
    CallService {
        service: String,
        #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
        service_data: serde_json::Map<String, serde_json::Value>,
    },
    Navigate {
        navigation_path: String,
    },
    Url {
        url_path: String,
    },
    FireDomEvent,
    None,
}

/// True when an action is configured and it does something.
pub fn has_action(action: Option<&ActionConfig>) -> bool {
    !matches!(action, None | Some(ActionConfig::None))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Tap,
    Hold,
    DoubleTap,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::Tap => write!(f, "tap"),
            Gesture::Hold => write!(f, "hold"),
            Gesture::DoubleTap => write!(f, "double_tap"),
        }
    }
}

/// What the host is asked to do after a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    MoreInfo {
        entity_id: String,
    },
    Toggle {
        entity_id: String,
    },
    CallService {
        domain: String,
        service: String,
        service_data: serde_json::Map<String, serde_json::Value>,
    },
    Navigate {
        path: String,
    },
    Url {
        path: String,
    },
    FireDomEvent {
        gesture: Gesture,
        action: ActionConfig,
    },
}

/// Host side of the interaction: performs a resolved action.
pub trait ActionDispatcher {
    fn dispatch(&self, request: ActionRequest) -> Result<(), ActionError>;
}

#[cfg(feature = "tokio")]
impl ActionDispatcher for tokio::sync::mpsc::UnboundedSender<ActionRequest> {
    fn dispatch(&self, request: ActionRequest) -> Result<(), ActionError> {
        self.send(request)?;
        Ok(())
    }
}

#[cfg(feature = "tokio")]
impl From<tokio::sync::mpsc::error::SendError<ActionRequest>> for ActionError {
    fn from(_: tokio::sync::mpsc::error::SendError<ActionRequest>) -> Self {
        Self::ChannelClosed
    }
}

/// Picks the configured action for a gesture.
///
/// Hold and double tap use their own binding when present and otherwise behave like a tap.
/// A tap without a binding opens the more-info dialog.
pub fn resolve_action(config: &CardConfig, gesture: Gesture) -> ActionConfig {
    let bound = match gesture {
        Gesture::Hold => config.hold_action.as_ref(),
        Gesture::DoubleTap => config.double_tap_action.as_ref(),
        Gesture::Tap => None,
    };
    bound
        .or(config.tap_action.as_ref())
        .cloned()
        .unwrap_or(ActionConfig::MoreInfo)
}

/// Turns the action for `gesture` into a request. `Ok(None)` means there is nothing to do.
pub fn action_request(
    config: &CardConfig,
    gesture: Gesture,
) -> Result<Option<ActionRequest>, ActionError> {
    let entity = || {
        config
            .entity_id()
            .map(str::to_string)
            .ok_or(ActionError::MissingEntity(gesture))
    };
    let request = match resolve_action(config, gesture) {
        ActionConfig::None => return Ok(None),
        ActionConfig::MoreInfo => ActionRequest::MoreInfo {
            entity_id: entity()?,
        },
        ActionConfig::Toggle => ActionRequest::Toggle {
            entity_id: entity()?,
        },
        ActionConfig::CallService {
            service,
            service_data,
        } => {
            let Some((domain, name)) = service
                .split_once('.')
                .filter(|(domain, name)| !domain.is_empty() && !name.is_empty())
            else {
                return Err(ActionError::InvalidService(service.clone()));
            };
            ActionRequest::CallService {
                domain: domain.to_string(),
                service: name.to_string(),
                service_data,
            }
        }
        ActionConfig::Navigate { navigation_path } => ActionRequest::Navigate {
            path: navigation_path,
        },
        ActionConfig::Url { url_path } => ActionRequest::Url { path: url_path },
        action @ ActionConfig::FireDomEvent => ActionRequest::FireDomEvent { gesture, action },
    };
    Ok(Some(request))
}
