//! The ordered operation accumulator and merge.

use serde_json::Value;
use tracing::trace;

use crate::codec::json::Marshaler;
use crate::error::PatchError;
use crate::forbidden::ForbiddenPaths;
use crate::operation::Operation;

/// Ordered, append-only list of JSON Patch operations.
///
/// Append methods take `&mut self` and return it for chaining. Operations
/// are emitted in insertion order, which is the order a server applies
/// them in. An empty set is the "no-op" patch and marshals to `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSet {
    operations: Vec<Operation>,
}

impl PatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `test` operation. Forbidden paths are checked at marshal time.
    pub fn with_test(&mut self, path: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.with_operation(Operation::test(path, value))
    }

    /// Append a `remove` operation, preceded by `condition` when given.
    ///
    /// The condition may test a different path than the one removed.
    pub fn with_remove(
        &mut self,
        path: impl Into<String>,
        condition: Option<Operation>,
    ) -> &mut Self {
        if let Some(condition) = condition {
            self.operations.push(condition);
        }
        self.with_operation(Operation::remove(path))
    }

    pub fn with_add(&mut self, path: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.with_operation(Operation::add(path, value))
    }

    pub fn with_replace(&mut self, path: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.with_operation(Operation::replace(path, value))
    }

    /// Append a pre-built operation as is.
    pub fn with_operation(&mut self, op: Operation) -> &mut Self {
        self.operations.push(op);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Validate against the default [`ForbiddenPaths`] and encode as JSON.
    pub fn marshal(&self) -> Result<Vec<u8>, PatchError> {
        Marshaler::default().marshal(self)
    }

    /// Validate against `forbidden` and encode as JSON.
    pub fn marshal_with(&self, forbidden: &ForbiddenPaths) -> Result<Vec<u8>, PatchError> {
        Marshaler::new(forbidden.clone()).marshal(self)
    }
}

impl FromIterator<Operation> for PatchSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PatchSet {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Concatenate `sets` in order into a new [`PatchSet`].
///
/// Inputs are left untouched. Empty inputs add nothing; no inputs at all
/// yields an empty set. Nothing is deduplicated, reordered or validated.
pub fn merge<'a, I>(sets: I) -> PatchSet
where
    I: IntoIterator<Item = &'a PatchSet>,
{
    let mut inputs = 0usize;
    let merged: PatchSet = sets
        .into_iter()
        .inspect(|_| inputs += 1)
        .flat_map(|set| set.operations.iter().cloned())
        .collect();
    trace!(inputs, operations = merged.len(), "merged patch sets");
    merged
}
