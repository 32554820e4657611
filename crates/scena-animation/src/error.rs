//! Error types for keyframe blending and animation descriptors.

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Errors reported by the interpolation engine, the descriptor validators
/// and the JSON loader.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Keyframe pair has incompatible kinds at some node
    #[error("keyframe kind mismatch: {left:?} vs {right:?}")]
    KindMismatch { left: ValueKind, right: ValueKind },

    /// Keyframe lists have different lengths at some node
    #[error("keyframe list length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// End keyframe has a field the start keyframe lacks
    #[error("field '{field}' is missing from the start keyframe")]
    MissingField { field: String },

    /// Value outside the closed kind set
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Stage interval is ill-formed or outside the animation timeline
    #[error("invalid stage interval [{sp}, {ep}]")]
    InvalidStage { sp: f32, ep: f32 },

    /// Stage set length is negative or non-finite
    #[error("invalid stage set '{name}': length {length}")]
    InvalidStageSet { name: String, length: f32 },

    /// Animation duration must be positive and finite
    #[error("animation total duration must be > 0, got {duration}")]
    InvalidDuration { duration: f32 },

    /// Serialization error
    #[error("serialization error: {reason}")]
    SerializationError { reason: String },
}

impl AnimationError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::KindMismatch { .. } | Self::LengthMismatch { .. } | Self::MissingField { .. } => {
                "blend"
            }
            Self::InvalidValue { .. }
            | Self::InvalidStage { .. }
            | Self::InvalidStageSet { .. }
            | Self::InvalidDuration { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
