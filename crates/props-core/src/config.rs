//! Per-scope resolver registration
//!
//! The scope owner populates a [`ResolverConfig`] during the configuration
//! phase, before the first resolution. Appends are copy-on-write: each one
//! builds a fresh list, so a snapshot handed out earlier never changes
//! underneath its holder.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::resolver::{FileResolver, PropertyResolver, ResolverList};
use crate::scope::PropertyBag;

/// An ordered, per-scope list of resolvers. Empty by default; order is
/// significant, the first resolver to produce a value wins.
#[derive(Default)]
pub struct ResolverConfig {
    resolvers: RefCell<ResolverList>,
}

impl ResolverConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver.
    pub fn add_resolver(&self, resolver: Rc<dyn PropertyResolver>) {
        let mut next = Vec::clone(&self.resolvers.borrow());
        next.push(resolver);
        *self.resolvers.borrow_mut() = Rc::new(next);
    }

    /// Append a [`FileResolver`] bound to `path`.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.add_resolver(Rc::new(FileResolver::new(path)));
    }

    /// Append a [`FileResolver`] bound to the path stored under `key` in
    /// `bag`. When the key is absent, or its value is not usable as a path,
    /// nothing is appended.
    pub fn add_bag_key(&self, bag: &dyn PropertyBag, key: &str) {
        if !bag.has(key) {
            return;
        }
        if let Some(path) = bag.get(key) {
            self.add_file(path);
        }
    }

    /// The current ordered list, possibly empty. The returned snapshot is
    /// immutable; later appends produce a new list.
    pub fn resolvers(&self) -> ResolverList {
        Rc::clone(&self.resolvers.borrow())
    }

    /// Whether no resolver has been registered.
    pub fn is_empty(&self) -> bool {
        self.resolvers.borrow().is_empty()
    }
}
