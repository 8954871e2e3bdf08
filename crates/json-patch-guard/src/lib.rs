//! json-patch-guard — an RFC 6902 JSON Patch builder for resource APIs.
//!
//! A [`PatchSet`] accumulates operations in application order and is
//! serialized once with [`PatchSet::marshal`]. Serialization refuses any
//! `test` operation whose path is in the configured [`ForbiddenPaths`]
//! (by default the resource's `/metadata/resourceVersion`), reporting every
//! offending operation at once.
//!
//! # Example
//!
//! ```
//! use json_patch_guard::{new_test_condition, PatchSet};
//!
//! let mut patch = PatchSet::new();
//! patch.with_remove("/status/foo", Some(new_test_condition("/status/condition", "bar")));
//!
//! let bytes = patch.marshal().unwrap();
//! assert_eq!(
//!     String::from_utf8(bytes).unwrap(),
//!     r#"[{"op":"test","path":"/status/condition","value":"bar"},{"op":"remove","path":"/status/foo"}]"#
//! );
//! ```

pub mod codec;
pub mod error;
pub mod forbidden;
pub mod operation;
pub mod patch_set;

pub use codec::json::{to_json, to_json_patch, Marshaler};
pub use error::{ForbiddenPathError, PatchError, Violation};
pub use forbidden::{ForbiddenPaths, RESOURCE_VERSION_PATH};
pub use operation::{new_test_condition, OpKind, Operation};
pub use patch_set::{merge, PatchSet};
