//! Per-scope resolution container
//!
//! One container per scope. It owns the scope's explicit resolver
//! configuration and a lazily-built pair of default resolvers, and decides
//! which of the two lists is in effect: a non-empty explicit list disables
//! the defaults entirely (total override, no merge). The chain walk across
//! ancestor scopes lives in [`crate::resolution`].

use std::cell::OnceCell;
use std::rc::Rc;

use crate::config::ResolverConfig;
use crate::resolver::{FileResolver, IndirectFileResolver, PropertyResolver, ResolverList};
use crate::scope::{Scope, root_of};

/// Well-known property-bag key. When set to a file-system path, that file is
/// consulted with highest priority among the defaults.
pub const EXTERNAL_PROPERTIES: &str = "EXTERNAL_PROPERTIES";

/// Conventional properties file name, looked up in the root scope's
/// directory.
pub const ROOT_PROPERTIES_FILE: &str = "gradle.properties";

/// The resolution state attached to one scope.
#[derive(Default)]
pub struct PropertiesContainer {
    config: ResolverConfig,
    defaults: OnceCell<ResolverList>,
}

impl PropertiesContainer {
    /// Create a container with an empty resolver configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container around an already-populated configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            defaults: OnceCell::new(),
        }
    }

    /// The scope's explicit resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The resolvers in effect for this scope: the explicit list verbatim
    /// when non-empty, otherwise the defaults. Ancestor scopes are not
    /// included.
    pub fn resolvers(&self, scope: &dyn Scope) -> ResolverList {
        let configured = self.config.resolvers();
        if !configured.is_empty() {
            return configured;
        }
        self.default_resolvers(scope)
    }

    /// The default resolver pair, built on first use and reused for the
    /// container's lifetime:
    ///
    /// 1. an [`IndirectFileResolver`] bound to [`EXTERNAL_PROPERTIES`] in
    ///    this scope's property bag, then
    /// 2. a [`FileResolver`] bound to `gradle.properties` in the root
    ///    scope's directory.
    pub fn default_resolvers(&self, scope: &dyn Scope) -> ResolverList {
        Rc::clone(self.defaults.get_or_init(|| {
            let external = IndirectFileResolver::new(scope.bag(), EXTERNAL_PROPERTIES);
            let conventional =
                FileResolver::new(root_of(scope).dir().join(ROOT_PROPERTIES_FILE));
            tracing::debug!(
                root_file = %conventional.path().display(),
                "built default resolvers"
            );
            Rc::new(vec![
                Rc::new(external) as Rc<dyn PropertyResolver>,
                Rc::new(conventional),
            ])
        }))
    }
}
