//! # Path Resolver
//!
//! Resolves slash-delimited paths such as `xconnect/connect/db/host` or
//! `nested0/sub0` against the document model. Each entity implements the
//! [`Resolve`] capability: named fields are matched first, everything else
//! falls back to the entity's extension map, descending through nested
//! mappings.
//!
//! The typed accessors keep two failures apart: a path that resolves to
//! nothing is `NotFound`; a path that resolves to a value of the wrong type
//! is `TypeMismatch`.

use crate::error::XConnectError;
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Capability interface for path-based field lookup.
///
/// Implemented by every entity variant in the document model. `find` works on
/// pre-split segments; the provided accessors split the path and convert the
/// result.
pub trait Resolve {
    /// Resolve pre-split path segments against this entity.
    ///
    /// Returns `None` when the path addresses nothing. A result may itself be
    /// a `Value::Mapping` when the final segment names nested extension data.
    fn find(&self, keys: &[&str]) -> Option<Value>;

    /// Resolve a slash-delimited path to a raw value.
    fn find_value(&self, path: &str) -> Result<Value, XConnectError> {
        let keys: Vec<&str> = path.split('/').collect();
        self.find(&keys)
            .ok_or_else(|| XConnectError::NotFound(path.to_string()))
    }

    /// Resolve a path to a string value.
    fn find_string(&self, path: &str) -> Result<String, XConnectError> {
        let value = self.find_value(path)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| XConnectError::TypeMismatch {
                path: path.to_string(),
                expected: "string",
                actual: value.type_name(),
            })
    }

    /// Resolve a path to an integer value.
    fn find_i64(&self, path: &str) -> Result<i64, XConnectError> {
        let value = self.find_value(path)?;
        value.as_i64().ok_or_else(|| XConnectError::TypeMismatch {
            path: path.to_string(),
            expected: "int",
            actual: value.type_name(),
        })
    }

    /// Resolve a path to a boolean value.
    fn find_bool(&self, path: &str) -> Result<bool, XConnectError> {
        let value = self.find_value(path)?;
        value.as_bool().ok_or_else(|| XConnectError::TypeMismatch {
            path: path.to_string(),
            expected: "bool",
            actual: value.type_name(),
        })
    }
}

/// Walk path segments through raw extension data.
///
/// No named-field shortcuts apply here, only descent through nested mappings.
/// A single remaining segment returns whatever value it names, including a
/// mapping.
pub(crate) fn find_in_map(keys: &[&str], map: &BTreeMap<String, Value>) -> Option<Value> {
    if map.is_empty() {
        trace!("empty extension map");
        return None;
    }
    let (first, rest) = keys.split_first()?;
    let value = map.get(*first)?;
    if rest.is_empty() {
        return Some(value.clone());
    }
    match value {
        Value::Mapping(nested) => find_in_map(rest, nested),
        other => {
            trace!(key = first, found = other.type_name(), "value is not a mapping");
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn extension_fixture() -> BTreeMap<String, Value> {
        let mut inner = BTreeMap::new();
        inner.insert("sub0".to_string(), Value::from("sub0"));
        let mut map = BTreeMap::new();
        map.insert("extra0".to_string(), Value::from("extra0"));
        map.insert("count".to_string(), Value::Int(3));
        map.insert("nested0".to_string(), Value::Mapping(inner));
        map
    }

    #[test]
    fn single_segment_returns_value() {
        let map = extension_fixture();
        assert_eq!(find_in_map(&["extra0"], &map), Some(Value::from("extra0")));
    }

    #[test]
    fn nested_descent_recovers_deep_values() {
        let map = extension_fixture();
        assert_eq!(
            find_in_map(&["nested0", "sub0"], &map),
            Some(Value::from("sub0"))
        );
    }

    #[test]
    fn single_segment_may_yield_a_mapping() {
        let map = extension_fixture();
        let found = find_in_map(&["nested0"], &map).expect("mapping value");
        assert!(found.as_mapping().is_some());
    }

    #[test]
    fn empty_map_is_not_found() {
        let map = BTreeMap::new();
        assert_eq!(find_in_map(&["anything"], &map), None);
    }

    #[test]
    fn empty_path_is_not_found() {
        let map = extension_fixture();
        assert_eq!(find_in_map(&[], &map), None);
    }

    #[test]
    fn descent_through_scalar_is_not_found() {
        let map = extension_fixture();
        assert_eq!(find_in_map(&["extra0", "deeper"], &map), None);
    }

    #[test]
    fn typed_accessors_distinguish_mismatch_from_missing() {
        struct Bag(BTreeMap<String, Value>);
        impl Resolve for Bag {
            fn find(&self, keys: &[&str]) -> Option<Value> {
                find_in_map(keys, &self.0)
            }
        }

        let bag = Bag(extension_fixture());
        assert_eq!(bag.find_i64("count").expect("int"), 3);

        let mismatch = bag.find_string("count");
        assert!(matches!(
            mismatch,
            Err(XConnectError::TypeMismatch {
                expected: "string",
                actual: "int",
                ..
            })
        ));

        let missing = bag.find_string("no-such-key");
        assert!(matches!(missing, Err(XConnectError::NotFound(_))));
    }
}
