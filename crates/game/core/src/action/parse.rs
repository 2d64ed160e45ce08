//! Decoding untyped action payloads.
//!
//! The `type` tag is looked up in [`ActionKind`] before the payload is
//! decoded, so an unregistered tag is reported as such rather than as a
//! generic deserialization failure.

use std::str::FromStr;

use serde_json::Value;

use crate::action::{Action, ActionKind};
use crate::error::{ErrorCategory, ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("action payload has no string `type` field")]
    MissingTag,

    #[error("unknown action type `{tag}`")]
    UnknownAction { tag: String },

    #[error("malformed `{kind}` payload: {message}")]
    Malformed { kind: ActionKind, message: String },
}

impl GameError for ActionParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownAction { .. } => ErrorCategory::UnknownAction,
            Self::MissingTag | Self::Malformed { .. } => ErrorCategory::MalformedAction,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTag => "ACTION_MISSING_TAG",
            Self::UnknownAction { .. } => "ACTION_UNKNOWN",
            Self::Malformed { .. } => "ACTION_MALFORMED",
        }
    }
}

impl Action {
    /// Decodes an action from its JSON form, e.g.
    /// `{"type": "seed.bought", "item": "Sunflower Seed", "amount": 2}`.
    pub fn from_value(value: Value) -> Result<Self, ActionParseError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ActionParseError::MissingTag)?;

        let kind = ActionKind::from_str(tag).map_err(|_| ActionParseError::UnknownAction {
            tag: tag.to_owned(),
        })?;

        serde_json::from_value(value).map_err(|err| ActionParseError::Malformed {
            kind,
            message: err.to_string(),
        })
    }
}
