//! Contracts with the host build tool
//!
//! The resolution core does not own the project model. The host supplies a
//! scope hierarchy (each scope has at most one parent) and a per-scope
//! property bag; both are read-only to this crate. [`Scope::properties`]
//! replaces the host-framework extension lookup of the original design with
//! plain injection: a scope either has a container attached or it does not.

use std::path::Path;
use std::rc::Rc;

use crate::container::PropertiesContainer;

/// A scope-local key/value store, independent of the resolver system, used
/// to hold indirection hints such as [`EXTERNAL_PROPERTIES`].
///
/// Values are string-typed. A host whose underlying store holds a non-string
/// value under `key` must return `None` from [`get`](Self::get): such a key
/// is not usable as a file path and yields an empty resolver set rather than
/// an error.
///
/// [`EXTERNAL_PROPERTIES`]: crate::container::EXTERNAL_PROPERTIES
pub trait PropertyBag {
    /// Whether the bag has an entry for `key`.
    fn has(&self, key: &str) -> bool;

    /// The string value for `key`, if present and string-typed.
    fn get(&self, key: &str) -> Option<String>;
}

/// A node in the build's project hierarchy.
pub trait Scope {
    /// The parent scope, or `None` at the root.
    fn parent(&self) -> Option<&dyn Scope>;

    /// This scope's project directory.
    fn dir(&self) -> &Path;

    /// A handle to this scope's property bag.
    fn bag(&self) -> Rc<dyn PropertyBag>;

    /// The resolution container attached to this scope, if any. Scopes
    /// without one are skipped during the chain walk.
    fn properties(&self) -> Option<&PropertiesContainer>;
}

/// Walk the ancestor chain to the root scope.
pub fn root_of(scope: &dyn Scope) -> &dyn Scope {
    let mut current = scope;
    while let Some(parent) = current.parent() {
        current = parent;
    }
    current
}
