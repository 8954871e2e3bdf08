//! The set of paths no `test` operation may target.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Optimistic-concurrency token of a resource. Testing it from a client
/// patch would bypass the server's own version check.
pub const RESOURCE_VERSION_PATH: &str = "/metadata/resourceVersion";

/// Immutable set of JSON Pointer strings that `test` operations must not
/// target.
///
/// Matching is exact on the pointer text. The default set holds
/// [`RESOURCE_VERSION_PATH`]. Deserializes from a plain list of strings so
/// it can sit inside a host's configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForbiddenPaths {
    paths: BTreeSet<String>,
}

impl ForbiddenPaths {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that forbids nothing.
    pub fn empty() -> Self {
        Self {
            paths: BTreeSet::new(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ForbiddenPaths {
    fn default() -> Self {
        Self::new([RESOURCE_VERSION_PATH])
    }
}
