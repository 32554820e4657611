//! Error types for geometry validation.

use serde::{Deserialize, Serialize};

/// Errors reported by the opt-in validation entry points.
///
/// The conversion functions themselves never validate; callers that want a
/// typed check before feeding data through the pipeline run
/// [`crate::space::Viewport::validate_basic`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GeometryError {
    /// Viewport zoom scale must be strictly positive
    #[error("viewport scale must be > 0, got {s}")]
    NonPositiveScale { s: f32 },

    /// Device pixel density must be strictly positive
    #[error("viewport sharpness must be > 0, got {sharpness}")]
    NonPositiveSharpness { sharpness: f32 },

    /// A coordinate or extent is NaN or infinite
    #[error("non-finite {field}: {value}")]
    NonFinite { field: String, value: f32 },
}
