//! Error types for props-core

/// Result type for props-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from property resolution.
///
/// Both variants signal caller-side conditions. Environmental failures
/// (missing or unreadable properties files) are never errors — resolvers
/// degrade to an empty set instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested property name is blank after trimming. Carries the
    /// original input for diagnostics.
    #[error("Invalid property name: {name:?}")]
    InvalidName { name: String },

    /// No resolver in the scope chain produced a value for the name.
    #[error("Property not found: {name}")]
    MissingProperty { name: String },
}
