//! Federated module registry for PayFlow.
//!
//! A micro-frontend describes itself with a [`ContainerManifest`]: the
//! modules it exposes by path and the dependencies it expects to share with
//! the host. The host loads manifests into a [`ModuleRegistry`], which
//! enforces the shared-dependency contract at load time: a `singleton`
//! dependency (the rendering runtime) is never provided in two
//! incompatible versions.
//!
//! # Example
//!
//! ```rust,ignore
//! use payflow_federation::{ContainerManifest, ExposedModule, ModuleRegistry, SharedDependency};
//!
//! let manifest = ContainerManifest::new("payment-provider", "0.1.0")
//!     .with_module(ExposedModule::new("./ShoppingCart", "ShoppingCart"))
//!     .with_shared(SharedDependency::singleton("leptos", "0.7.8"));
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register(manifest)?;
//! let module = registry.resolve("payment-provider", "./ShoppingCart")?;
//! ```

mod error;
mod registry;
mod shared;

pub use error::FederationError;
pub use registry::{ContainerManifest, ExposedModule, ModuleRegistry};
pub use shared::{SharedDependency, Version};
