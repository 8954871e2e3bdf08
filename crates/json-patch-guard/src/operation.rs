//! Single JSON Patch operations.

use std::fmt;

use serde_json::Value;

// ── OpKind ────────────────────────────────────────────────────────────────

/// The `op` member of a JSON Patch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Test,
    Remove,
    Add,
    Replace,
}

impl OpKind {
    /// Returns the wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Test => "test",
            OpKind::Remove => "remove",
            OpKind::Add => "add",
            OpKind::Replace => "replace",
        }
    }

    /// Returns true if operations of this kind carry a `value` member.
    pub fn carries_value(&self) -> bool {
        !matches!(self, OpKind::Remove)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// One RFC 6902 step: an op kind, a JSON Pointer path and an optional value.
///
/// Operations are immutable once built. The path is kept as the pointer
/// text the caller supplied and is emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OpKind,
    path: String,
    value: Option<Value>,
}

impl Operation {
    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Test, path, value)
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            kind: OpKind::Remove,
            path: path.into(),
            value: None,
        }
    }

    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Add, path, value)
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Replace, path, value)
    }

    fn with_value(kind: OpKind, path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            kind,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The payload, `None` for `remove`. A JSON `null` payload is `Some(Value::Null)`.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_test(&self) -> bool {
        self.kind == OpKind::Test
    }
}

/// Builds a `test` operation not yet attached to any patch, for use as the
/// guard of [`PatchSet::with_remove`](crate::PatchSet::with_remove).
///
/// No validation happens here; forbidden paths are rejected when the patch
/// is marshaled.
pub fn new_test_condition(path: impl Into<String>, value: impl Into<Value>) -> Operation {
    Operation::test(path, value)
}
