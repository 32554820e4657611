//! Coordinate space conversions for world/viewport sampling.
//!
//! Conventions:
//! - World space: the application's authoritative 2D frame, origin anywhere,
//!   units are world units.
//! - World-proportional space: fractions (0..1) of a `World` rectangle.
//! - Viewport space: device pixels; `sharpness` is pixels per logical pixel,
//!   `s` is zoom (larger `s` = zoomed out, fewer pixels per world unit).
//!
//! The pipeline is one-directional: proportional -> world -> viewport.
//! No inverse conversions are provided.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::point::{ViewportPoint, WorldPoint, WorldPropPoint};

/// A world-space rectangle: top-left corner plus extents. Defines the frame
/// that [`WorldPropPoint`] coordinates are relative to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct World {
    pub tl: WorldPoint,
    pub w: f32,
    pub h: f32,
}

/// The visible world-space window plus the pan/zoom/sharpness transform that
/// maps it onto device pixels.
///
/// Invariant (caller-guaranteed): `s > 0`. The conversion functions perform
/// no validation; `s = 0` yields an infinite scaling factor. Callers that
/// want the check run [`Viewport::validate_basic`] first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub tl: WorldPoint,
    pub w: f32,
    pub h: f32,
    /// Zoom scale.
    pub s: f32,
    /// Device pixel density (pixels per logical pixel).
    pub sharpness: f32,
}

impl Viewport {
    /// Validate basic invariants (`s > 0`, `sharpness > 0`, finite fields).
    pub fn validate_basic(&self) -> Result<(), GeometryError> {
        for (field, value) in [
            ("tl.x", self.tl.x),
            ("tl.y", self.tl.y),
            ("w", self.w),
            ("h", self.h),
            ("s", self.s),
            ("sharpness", self.sharpness),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite {
                    field: field.into(),
                    value,
                });
            }
        }
        if self.s <= 0.0 {
            return Err(GeometryError::NonPositiveScale { s: self.s });
        }
        if self.sharpness <= 0.0 {
            return Err(GeometryError::NonPositiveSharpness {
                sharpness: self.sharpness,
            });
        }
        Ok(())
    }
}

/// Converts a world-proportional point (in terms of 0 - 1.0) to absolute
/// world coordinates. No bounds check: coordinates outside `[0,1]`
/// extrapolate outside the rectangle.
#[inline]
pub fn to_world_absolute(p: WorldPropPoint, w: &World) -> WorldPoint {
    WorldPoint {
        x: w.tl.x + p.x * w.w,
        y: w.tl.y + p.y * w.h,
    }
}

/// The single multiplicative factor converting one world unit into one device
/// pixel: sharpness (pixels per 'pixel') over zoom.
#[inline]
pub fn viewport_scaling(v: &Viewport) -> f32 {
    v.sharpness / v.s
}

/// Maps an absolute world point into device pixels.
///
/// `w` and `v` may anchor different logical frames (e.g. a sub-world embedded
/// in a larger viewport-world); the component-wise offset `w.tl - v.tl`
/// reconciles the origins before the uniform scale into pixels.
#[inline]
pub fn world_to_viewport(p: WorldPoint, w: &World, v: &Viewport) -> ViewportPoint {
    let offset = WorldPoint {
        x: w.tl.x - v.tl.x,
        y: w.tl.y - v.tl.y,
    };
    let k = viewport_scaling(v);
    ViewportPoint {
        x: (p.x + offset.x) * k,
        y: (p.y + offset.y) * k,
    }
}
