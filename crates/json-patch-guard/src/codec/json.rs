//! JSON codec for guarded patches.
//!
//! Encodes operations as RFC 6902 objects with keys in `op`, `path`, `value`
//! order, and runs the forbidden-path scan before any bytes are produced.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ForbiddenPathError, PatchError, Violation};
use crate::forbidden::ForbiddenPaths;
use crate::operation::Operation;
use crate::patch_set::PatchSet;

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an [`Operation`] to a JSON Patch object.
pub fn to_json(op: &Operation) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), Value::String(op.kind().as_str().to_string()));
    m.insert("path".into(), Value::String(op.path().to_string()));
    if op.kind().carries_value() {
        if let Some(v) = op.value() {
            m.insert("value".into(), v.clone());
        }
    }
    Value::Object(m)
}

/// Serialize a list of operations. An empty list encodes as `null`, the
/// canonical "do nothing" patch.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    if ops.is_empty() {
        return Value::Null;
    }
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Marshaler ─────────────────────────────────────────────────────────────

/// Validating serializer. Holds the forbidden-path configuration it checks
/// against.
#[derive(Debug, Clone, Default)]
pub struct Marshaler {
    forbidden: ForbiddenPaths,
}

impl Marshaler {
    pub fn new(forbidden: ForbiddenPaths) -> Self {
        Self { forbidden }
    }

    pub fn forbidden(&self) -> &ForbiddenPaths {
        &self.forbidden
    }

    /// Scan `ops` once and collect every `test` on a forbidden path.
    pub fn check(&self, ops: &[Operation]) -> Result<(), ForbiddenPathError> {
        let violations: Vec<Violation> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| op.is_test() && self.forbidden.contains(op.path()))
            .map(|(index, op)| Violation {
                index,
                path: op.path().to_string(),
            })
            .collect();
        match ForbiddenPathError::new(violations) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Validate and encode `patch` as compact JSON bytes.
    pub fn marshal(&self, patch: &PatchSet) -> Result<Vec<u8>, PatchError> {
        let ops = patch.operations();
        if let Err(err) = self.check(ops) {
            warn!(
                operations = ops.len(),
                violations = err.violations().len(),
                "rejected patch with forbidden test paths"
            );
            return Err(err.into());
        }
        let bytes = serde_json::to_vec(&to_json_patch(ops))?;
        debug!(operations = ops.len(), bytes = bytes.len(), "marshaled patch");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_json_keeps_key_order() {
        let v = to_json(&Operation::test("/a", json!({"z": 1, "b": 2})));
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["op", "path", "value"]);
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"op":"test","path":"/a","value":{"z":1,"b":2}}"#
        );
    }

    #[test]
    fn to_json_remove_omits_value() {
        assert_eq!(
            to_json(&Operation::remove("/a")),
            json!({"op": "remove", "path": "/a"})
        );
    }

    #[test]
    fn to_json_null_value_is_emitted() {
        let v = to_json(&Operation::replace("/a", Value::Null));
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"op":"replace","path":"/a","value":null}"#
        );
    }

    #[test]
    fn to_json_patch_empty_is_null() {
        assert_eq!(to_json_patch(&[]), Value::Null);
    }

    #[test]
    fn check_ignores_non_test_ops_on_forbidden_paths() {
        let m = Marshaler::default();
        let ops = vec![
            Operation::remove("/metadata/resourceVersion"),
            Operation::replace("/metadata/resourceVersion", "7"),
        ];
        assert!(m.check(&ops).is_ok());
    }

    #[test]
    fn custom_forbidden_set_is_honoured() {
        let m = Marshaler::new(ForbiddenPaths::new(["/metadata/generation"]));
        let ops = vec![
            Operation::test("/metadata/resourceVersion", "1"),
            Operation::test("/metadata/generation", 3),
        ];
        let err = m.check(&ops).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation {
                index: 1,
                path: "/metadata/generation".to_string()
            }]
        );
    }
}
