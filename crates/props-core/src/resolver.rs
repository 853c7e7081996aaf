//! Property resolvers
//!
//! A resolver answers "does this property name have a value?" from one
//! concrete source. Each resolver loads its key/value set lazily on first
//! use and caches it for its lifetime; the cache is never refreshed, even if
//! the underlying file changes on disk afterwards.
//!
//! Property-source availability is environment-dependent (dev, CI and
//! packaging machines differ), so a missing or unreadable file is never an
//! error: the resolver logs and degrades to an empty set. Failures are
//! reserved for programmer errors, which are handled at the container level.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use props_format::Properties;

use crate::scope::PropertyBag;

/// An ordered, shared snapshot of resolvers.
pub type ResolverList = Rc<Vec<Rc<dyn PropertyResolver>>>;

/// A strategy for answering a property lookup from one concrete source.
pub trait PropertyResolver {
    /// Resolve `name` against the loaded set.
    fn resolve(&self, name: &str) -> Option<String> {
        self.properties().get(name).map(str::to_string)
    }

    /// The loaded key/value set. Triggers load-if-not-loaded.
    fn properties(&self) -> &Properties;
}

/// Resolves properties from a file at a path fixed at construction.
#[derive(Debug)]
pub struct FileResolver {
    path: PathBuf,
    cache: OnceCell<Properties>,
}

impl FileResolver {
    /// Create a resolver bound to `path`. Nothing is read until the first
    /// lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// The file path this resolver reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Properties {
        if !self.path.exists() {
            // Expected, valid state: optional files are simply not there in
            // some environments.
            tracing::info!(
                path = %self.path.display(),
                "properties file does not exist, continuing with an empty set"
            );
            return Properties::new();
        }
        match props_format::read(&self.path) {
            Ok(props) => {
                tracing::debug!(
                    path = %self.path.display(),
                    entries = props.len(),
                    "loaded properties file"
                );
                props
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "cannot load properties file, continuing with an empty set"
                );
                Properties::new()
            }
        }
    }
}

impl PropertyResolver for FileResolver {
    fn properties(&self) -> &Properties {
        self.cache.get_or_init(|| self.load())
    }
}

impl fmt::Display for FileResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileResolver(file={})", self.path.display())
    }
}

/// Resolves properties from a file whose path is itself stored under a named
/// key in the scope's property bag.
pub struct IndirectFileResolver {
    bag: Rc<dyn PropertyBag>,
    key: String,
    cache: OnceCell<Properties>,
}

impl IndirectFileResolver {
    /// Create a resolver that reads the file named by `key` in `bag`. The
    /// bag is not consulted until the first lookup.
    pub fn new(bag: Rc<dyn PropertyBag>, key: impl Into<String>) -> Self {
        Self {
            bag,
            key: key.into(),
            cache: OnceCell::new(),
        }
    }

    /// The bag key this resolver dereferences.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Properties {
        if !self.bag.has(&self.key) {
            // An absent key is the normal case, stay quiet.
            return Properties::new();
        }
        let Some(path) = self.bag.get(&self.key) else {
            // Present but not string-typed: not usable as a path.
            return Properties::new();
        };
        match props_format::read(&path) {
            Ok(props) => {
                tracing::debug!(
                    key = %self.key,
                    value = %path,
                    entries = props.len(),
                    "loaded indirect properties file"
                );
                props
            }
            Err(e) => {
                tracing::info!(
                    key = %self.key,
                    value = %path,
                    error = %e,
                    "cannot load indirect properties file, continuing with an empty set"
                );
                Properties::new()
            }
        }
    }
}

impl PropertyResolver for IndirectFileResolver {
    fn properties(&self) -> &Properties {
        self.cache.get_or_init(|| self.load())
    }
}

impl fmt::Debug for IndirectFileResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectFileResolver")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for IndirectFileResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndirectFileResolver(key={})", self.key)
    }
}
