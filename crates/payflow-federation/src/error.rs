//! Federation error types.

use thiserror::Error;

/// Errors from module registration and resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FederationError {
    /// A container with this name is already registered.
    #[error("Container already registered: {0}")]
    DuplicateContainer(String),

    /// No container registered under this name.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// The container exposes nothing at this path.
    #[error("Module not found: {path} in container {container}")]
    ModuleNotFound { container: String, path: String },

    /// Two containers demand incompatible versions of a singleton dependency.
    #[error("Singleton conflict for {dependency}: {provided} already loaded, {requested} requested")]
    SingletonConflict {
        dependency: String,
        provided: String,
        requested: String,
    },

    /// Version string did not parse.
    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}
