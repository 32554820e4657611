//! Deep interpolation over keyframe state.
//!
//! Policy, evaluated per node against the end keyframe `b`:
//! - text: `b`'s value verbatim for every `p`, including 0 (discrete switch)
//! - scalar/scalar: linear interpolation
//! - list/list: element-wise recursion; unequal lengths are a reported error
//! - record/record: recursion per field of `b`; fields present only in the
//!   start keyframe are dropped, a `b`-only field is a reported error
//! - anything else: kind mismatch error
//!
//! The end keyframe is authoritative: traversal is driven by `b`'s shape.

use hashbrown::HashMap;

use crate::error::AnimationError;
use crate::value::Value;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, p: f32) -> f32 {
    a + (b - a) * p
}

/// Blend two same-shaped [`Value`] trees at fraction `p`.
///
/// Allocates a fresh tree at every level; inputs are never mutated. Shape
/// mismatches between the two keyframes surface as typed errors instead of
/// silently wrong values.
pub fn lerp_value(a: &Value, b: &Value, p: f32) -> Result<Value, AnimationError> {
    match (a, b) {
        // Text never blends; the end keyframe's value wins regardless of p
        // (and regardless of the start keyframe's kind).
        (_, Value::Text(s)) => Ok(Value::Text(s.clone())),

        (Value::Scalar(va), Value::Scalar(vb)) => Ok(Value::Scalar(lerp_f32(*va, *vb, p))),

        (Value::List(la), Value::List(lb)) => {
            if la.len() != lb.len() {
                return Err(AnimationError::LengthMismatch {
                    left: la.len(),
                    right: lb.len(),
                });
            }
            let mut out = Vec::with_capacity(lb.len());
            for (ea, eb) in la.iter().zip(lb.iter()) {
                out.push(lerp_value(ea, eb, p)?);
            }
            Ok(Value::List(out))
        }

        (Value::Record(ma), Value::Record(mb)) => {
            let mut out = HashMap::with_capacity(mb.len());
            for (key, vb) in mb.iter() {
                let va = ma.get(key).ok_or_else(|| AnimationError::MissingField {
                    field: key.clone(),
                })?;
                out.insert(key.clone(), lerp_value(va, vb, p)?);
            }
            Ok(Value::Record(out))
        }

        (a, b) => Err(AnimationError::KindMismatch {
            left: a.kind(),
            right: b.kind(),
        }),
    }
}

/// Per-type interpolation seam for [`crate::Animation`] keyframe states.
///
/// [`Value`] gets the generic tree blend; app-specific state types implement
/// this once (typically field-by-field over these building blocks) and gain
/// compile-time shape safety that the generic tree cannot offer.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, p: f32) -> Result<Self, AnimationError>;
}

impl Lerp for Value {
    fn lerp(a: &Self, b: &Self, p: f32) -> Result<Self, AnimationError> {
        lerp_value(a, b, p)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, p: f32) -> Result<Self, AnimationError> {
        Ok(lerp_f32(*a, *b, p))
    }
}

/// Strings switch to the end keyframe, matching the tree policy.
impl Lerp for String {
    fn lerp(_a: &Self, b: &Self, _p: f32) -> Result<Self, AnimationError> {
        Ok(b.clone())
    }
}

impl<T: Lerp> Lerp for Vec<T> {
    fn lerp(a: &Self, b: &Self, p: f32) -> Result<Self, AnimationError> {
        if a.len() != b.len() {
            return Err(AnimationError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        let mut out = Vec::with_capacity(b.len());
        for (ea, eb) in a.iter().zip(b.iter()) {
            out.push(T::lerp(ea, eb, p)?);
        }
        Ok(out)
    }
}
