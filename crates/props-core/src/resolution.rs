//! The chain walk and the query operations
//!
//! Resolution starts at the calling scope and moves up the ancestor chain:
//! each scope's container contributes its resolvers in order, first
//! non-absent value wins, and a scope's own resolvers always take precedence
//! over any ancestor's regardless of resolver type. Scopes without an
//! attached container are skipped without consulting anything.

use crate::error::{Error, Result};
use crate::scope::Scope;

/// Get the value for `name`, or fail with [`Error::MissingProperty`] when no
/// resolver in the chain has it.
pub fn get(scope: &dyn Scope, name: &str) -> Result<String> {
    match find_property_value(scope, name)? {
        Some(value) => Ok(value),
        None => Err(Error::MissingProperty {
            name: name.trim().to_string(),
        }),
    }
}

/// Get the value for `name`, or `default` when no resolver in the chain has
/// it. Still fails on an invalid name.
pub fn get_or(scope: &dyn Scope, name: &str, default: impl Into<String>) -> Result<String> {
    Ok(find_property_value(scope, name)?.unwrap_or_else(|| default.into()))
}

/// Whether any resolver in the chain has a value for `name`. Still fails on
/// an invalid name.
pub fn exists(scope: &dyn Scope, name: &str) -> Result<bool> {
    Ok(find_property_value(scope, name)?.is_some())
}

fn find_property_value(scope: &dyn Scope, name: &str) -> Result<Option<String>> {
    // Invalid names abort before any resolver is touched.
    let name = validate_name(name)?;

    let mut current = Some(scope);
    while let Some(s) = current {
        match s.properties() {
            Some(container) => {
                for resolver in container.resolvers(s).iter() {
                    if let Some(value) = resolver.resolve(name) {
                        tracing::debug!(name, "resolved property");
                        return Ok(Some(value));
                    }
                }
            }
            None => {
                tracing::debug!(name, "scope has no container attached, skipping");
            }
        }
        current = s.parent();
    }

    tracing::debug!(name, "property not found in any scope");
    Ok(None)
}

/// Trim the name and reject blank input. The only validation performed; no
/// character-set or length restriction.
fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(trimmed)
}
