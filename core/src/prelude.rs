use serde::{Deserialize, Serialize};

use crate::library::gesture::GestureAction;

/// Shared configuration for the normalizer and recognition service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed point count every stroke is resampled to; the descriptor
    /// has `resample_points - 1` direction values.
    pub resample_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resample_points: 32,
        }
    }
}

/// Common error type for engine operations.
#[derive(thiserror::Error, Debug)]
pub enum GestureError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("malformed record: {0}")]
    Format(String),
    #[error("action execution failed: {0}")]
    Action(String),
}

pub type GestureResult<T> = Result<T, GestureError>;

/// Collaborator that performs a matched gesture's external effect.
pub trait ActionExecutor {
    fn execute(&self, action: &GestureAction) -> GestureResult<()>;
}
