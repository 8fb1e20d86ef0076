use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceErrorKind {
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordanceError {
    pub kind: AffordanceErrorKind,
    pub message: String,
}

impl AffordanceError {
    pub fn new(kind: AffordanceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AffordanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AffordanceError {}

pub fn configuration_error(message: impl Into<String>) -> AffordanceError {
    AffordanceError::new(AffordanceErrorKind::Configuration, message)
}

/// Unwraps a numeric context field a rule depends on.
pub fn require<T: Copy>(value: Option<T>, field: &str) -> Result<T, AffordanceError> {
    value.ok_or_else(|| configuration_error(format!("{field} is required but was not provided")))
}
