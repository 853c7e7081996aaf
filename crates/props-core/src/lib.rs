//! Property resolution chain for Enhanced Properties
//!
//! Resolves named build properties by consulting an ordered list of
//! pluggable sources (resolvers), falling back from a scope's own
//! configuration up through the chain of ancestor scopes:
//!
//! - **Resolvers** answer a lookup from one concrete source: a fixed
//!   properties file ([`FileResolver`]) or a file whose path is stored under
//!   a key in the scope's property bag ([`IndirectFileResolver`]). Loads are
//!   lazy, cached for the resolver's lifetime, and degrade gracefully: a
//!   missing or unreadable file is an empty set, never an error.
//! - **[`ResolverConfig`]** is the per-scope registration surface, an
//!   ordered copy-on-write list populated during the configuration phase.
//! - **[`PropertiesContainer`]** owns a scope's effective resolver list:
//!   the explicit configuration when non-empty, otherwise a lazily-built
//!   default pair (`EXTERNAL_PROPERTIES` indirection first, then the root
//!   scope's `gradle.properties`).
//! - **[`resolution`]** walks the scope chain, first match wins.
//!
//! The host build tool supplies the [`Scope`] hierarchy and [`PropertyBag`]
//! stores; [`ScopeNode`] and [`MemoryBag`] provide an in-memory model for
//! embedding and tests.
//!
//! # Example
//!
//! ```no_run
//! use props_core::{ScopeNode, resolution};
//!
//! fn example() -> props_core::Result<()> {
//!     let root = ScopeNode::root("/path/to/build");
//!     let version = resolution::get(&root, "widget.version")?;
//!     let region = resolution::get_or(&root, "deploy.region", "eu-west-1")?;
//!     Ok(())
//! }
//! ```
//!
//! Everything is single-threaded by design: resolvers and containers are
//! built and consulted from one build-evaluation thread, and the `Rc`/
//! `RefCell`/`OnceCell` internals enforce that confinement.

pub mod config;
pub mod container;
pub mod error;
pub mod node;
pub mod resolution;
pub mod resolver;
pub mod scope;

pub use config::ResolverConfig;
pub use container::{EXTERNAL_PROPERTIES, PropertiesContainer, ROOT_PROPERTIES_FILE};
pub use error::{Error, Result};
pub use node::{MemoryBag, ScopeNode};
pub use props_format::Properties;
pub use resolver::{FileResolver, IndirectFileResolver, PropertyResolver, ResolverList};
pub use scope::{PropertyBag, Scope, root_of};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_the_property_name() {
        let missing = Error::MissingProperty {
            name: "widget.version".to_string(),
        };
        assert!(format!("{missing}").contains("widget.version"));

        let invalid = Error::InvalidName {
            name: "  ".to_string(),
        };
        let display = format!("{invalid}");
        assert!(
            display.to_lowercase().contains("invalid"),
            "Error display should mention invalid, got: {display}"
        );
    }
}
