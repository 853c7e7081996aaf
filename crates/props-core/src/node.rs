//! In-memory host model
//!
//! A minimal concrete implementation of the [`Scope`] and [`PropertyBag`]
//! contracts for hosts that embed the resolution core without a full build
//! tool, and for tests. Scope nodes borrow their parent, so a hierarchy is
//! built top-down and lives on the stack.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::ResolverConfig;
use crate::container::PropertiesContainer;
use crate::scope::{PropertyBag, Scope};

/// A simple string-valued property bag backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryBag {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }
}

impl PropertyBag for MemoryBag {
    fn has(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

/// A node in an in-memory scope hierarchy.
///
/// Every node carries its own [`MemoryBag`] and, unless detached with
/// [`without_container`](Self::without_container), an attached
/// [`PropertiesContainer`].
pub struct ScopeNode<'a> {
    dir: PathBuf,
    bag: Rc<MemoryBag>,
    parent: Option<&'a ScopeNode<'a>>,
    container: Option<PropertiesContainer>,
}

impl<'a> ScopeNode<'a> {
    /// Create a root scope over `dir`.
    pub fn root(dir: impl Into<PathBuf>) -> ScopeNode<'static> {
        ScopeNode {
            dir: dir.into(),
            bag: Rc::new(MemoryBag::new()),
            parent: None,
            container: Some(PropertiesContainer::new()),
        }
    }

    /// Create a child of this scope over `dir`.
    pub fn child(&'a self, dir: impl Into<PathBuf>) -> ScopeNode<'a> {
        ScopeNode {
            dir: dir.into(),
            bag: Rc::new(MemoryBag::new()),
            parent: Some(self),
            container: Some(PropertiesContainer::new()),
        }
    }

    /// Drop the attached container; the chain walk will skip this scope.
    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }

    /// Set an entry in this scope's property bag.
    pub fn set_bag_entry(&self, key: impl Into<String>, value: impl Into<String>) {
        self.bag.set(key, value);
    }

    /// Borrow this scope's bag concretely.
    pub fn memory_bag(&self) -> &MemoryBag {
        &self.bag
    }

    /// This scope's resolver configuration, when a container is attached.
    pub fn resolver_config(&self) -> Option<&ResolverConfig> {
        self.container.as_ref().map(PropertiesContainer::config)
    }
}

impl Scope for ScopeNode<'_> {
    fn parent(&self) -> Option<&dyn Scope> {
        self.parent.map(|p| p as &dyn Scope)
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn bag(&self) -> Rc<dyn PropertyBag> {
        self.bag.clone()
    }

    fn properties(&self) -> Option<&PropertiesContainer> {
        self.container.as_ref()
    }
}
