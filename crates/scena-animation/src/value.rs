//! Value: the closed tree of blendable keyframe state.
//! All numeric leaves use f32.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Lightweight kind enum for dispatch and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Scalar,
    Text,
    List,
    Record,
}

/// A keyframe state tree over a closed set of kinds.
///
/// Untagged serde representation: a JSON tree of numbers, strings, arrays and
/// objects maps directly onto this enum, which is exactly the shape consumers
/// author keyframes in. Null and bool have no blend policy and are rejected
/// (see [`Value::from_json`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Numeric leaf; linearly interpolated.
    Scalar(f32),

    /// Text leaf; step-only for interpolation (end keyframe wins).
    Text(String),

    /// Ordered sequence; interpolated element-wise.
    List(Vec<Value>),

    /// Named fields; interpolated per field of the end keyframe.
    Record(HashMap<String, Value>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Record(_) => ValueKind::Record,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Scalar(v)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn record(fields: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Convert a parsed JSON tree into the closed value set.
    ///
    /// Numbers become scalars, strings text, arrays lists, objects records.
    /// Null and bool carry no blend policy and are reported as
    /// [`AnimationError::InvalidValue`].
    pub fn from_json(v: &serde_json::Value) -> Result<Value, AnimationError> {
        match v {
            serde_json::Value::Number(n) => {
                let f = n.as_f64().ok_or_else(|| AnimationError::InvalidValue {
                    reason: format!("non-representable number: {n}"),
                })?;
                Ok(Value::Scalar(f as f32))
            }
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Value::from_json(item)?);
                }
                Ok(Value::List(out))
            }
            serde_json::Value::Object(map) => {
                let mut out = HashMap::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), Value::from_json(v)?);
                }
                Ok(Value::Record(out))
            }
            other => Err(AnimationError::InvalidValue {
                reason: format!("unsupported JSON value: {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_tree_maps_onto_closed_kinds() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"x": 1.5, "label": "a", "pts": [1, 2]}"#).unwrap();
        let v = Value::from_json(&json).unwrap();
        let Value::Record(map) = &v else {
            panic!("expected record")
        };
        assert_eq!(map["x"], Value::Scalar(1.5));
        assert_eq!(map["label"], Value::Text("a".into()));
        assert_eq!(
            map["pts"],
            Value::List(vec![Value::Scalar(1.0), Value::Scalar(2.0)])
        );
    }

    #[test]
    fn null_and_bool_are_rejected() {
        for raw in ["null", "true"] {
            let json: serde_json::Value = serde_json::from_str(raw).unwrap();
            assert!(matches!(
                Value::from_json(&json),
                Err(AnimationError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn untagged_serde_round_trip() {
        let v = Value::record([
            ("x", Value::f(0.5)),
            ("tag", Value::text("on")),
            ("seq", Value::list([Value::f(1.0), Value::f(2.0)])),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
