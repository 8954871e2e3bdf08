//! Errors raised while marshaling a patch.

use std::fmt;

use thiserror::Error;

/// A `test` operation that targets a forbidden path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("test operation at index: {index} contains forbidden path: {path:?}")]
pub struct Violation {
    /// Zero-based position of the operation in the patch.
    pub index: usize,
    pub path: String,
}

/// Every forbidden-path violation found in one patch, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenPathError {
    violations: Vec<Violation>,
}

impl ForbiddenPathError {
    /// Returns `None` when `violations` is empty.
    pub fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ForbiddenPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.violations.as_slice() {
            return write!(f, "{single}");
        }
        f.write_str("[")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

impl std::error::Error for ForbiddenPathError {}

/// Error returned by [`PatchSet::marshal`](crate::PatchSet::marshal).
#[derive(Debug, Error)]
pub enum PatchError {
    #[error(transparent)]
    ForbiddenPath(#[from] ForbiddenPathError),
    /// Not produced for `serde_json::Value` payloads.
    #[error("failed to encode patch: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PatchError {
    pub fn as_forbidden_path(&self) -> Option<&ForbiddenPathError> {
        match self {
            PatchError::ForbiddenPath(e) => Some(e),
            PatchError::Encode(_) => None,
        }
    }
}
