//! # Extension Values
//!
//! Every entity in the document model carries a fixed set of named fields
//! plus an open-ended extension map for keys outside its schema. Extension
//! values are dynamically shaped YAML data, represented here as a tagged
//! variant instead of a loosely-typed map so that conversion failures are
//! explicit and `NotFound` stays distinct from `TypeMismatch`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dynamically-typed value from an extension map.
///
/// Decodes untagged: YAML `true` becomes `Bool`, `42` becomes `Int`, nested
/// mappings recurse into `Mapping`, and so on. Variant order matters for
/// untagged deserialization — scalars are tried before composites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A string scalar.
    String(String),
    /// A list of values.
    Sequence(Vec<Value>),
    /// A nested mapping with string keys.
    Mapping(BTreeMap<String, Value>),
    /// An explicit YAML null.
    Null,
}

impl Value {
    /// Name of the variant, used in `TypeMismatch` diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Null => "null",
        }
    }

    /// Borrow as a string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read as an integer, if this is an integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Read as a boolean, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as a nested mapping, if this is a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_decode_untagged() {
        let b: Value = serde_yaml::from_str("true").expect("bool");
        assert_eq!(b, Value::Bool(true));

        let i: Value = serde_yaml::from_str("42").expect("int");
        assert_eq!(i, Value::Int(42));

        let s: Value = serde_yaml::from_str("hello").expect("string");
        assert_eq!(s, Value::String("hello".to_string()));
    }

    #[test]
    fn mapping_decodes_recursively() {
        let v: Value = serde_yaml::from_str("nested0:\n  sub0: sub0\n").expect("mapping");
        let outer = v.as_mapping().expect("outer mapping");
        let inner = outer
            .get("nested0")
            .and_then(Value::as_mapping)
            .expect("inner mapping");
        assert_eq!(inner.get("sub0"), Some(&Value::from("sub0")));
    }

    #[test]
    fn sequence_decodes() {
        let v: Value = serde_yaml::from_str("[a, b]").expect("sequence");
        assert_eq!(v, Value::Sequence(vec![Value::from("a"), Value::from("b")]));
    }

    #[test]
    fn conversions_are_exclusive() {
        let v = Value::Int(7);
        assert_eq!(v.as_i64(), Some(7));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.type_name(), "int");
    }
}
