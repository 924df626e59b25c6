//! Container manifests and the module registry.

use crate::error::FederationError;
use crate::shared::SharedDependency;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One module a container exposes for consumption by a host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExposedModule {
    /// Import path within the container (e.g., "./ShoppingCart").
    pub path: String,
    /// Component the path resolves to.
    pub component: String,
}

impl ExposedModule {
    /// Create a new exposure entry.
    pub fn new(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
        }
    }
}

/// Manifest for a federated container: what it exposes and what it shares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerManifest {
    /// Unique container name.
    pub name: String,
    /// Semantic version of the container build.
    pub version: String,
    /// Modules exposed for import.
    pub exposes: Vec<ExposedModule>,
    /// Dependencies shared with the host.
    pub shared: Vec<SharedDependency>,
}

impl ContainerManifest {
    /// Create a new container manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            exposes: Vec::new(),
            shared: Vec::new(),
        }
    }

    /// Add an exposed module.
    pub fn with_module(mut self, module: ExposedModule) -> Self {
        self.exposes.push(module);
        self
    }

    /// Add a shared dependency.
    pub fn with_shared(mut self, dependency: SharedDependency) -> Self {
        self.shared.push(dependency);
        self
    }

    /// Look up an exposure entry by path.
    pub fn module(&self, path: &str) -> Option<&ExposedModule> {
        self.exposes.iter().find(|m| m.path == path)
    }
}

/// A shared dependency the registry has already accepted.
#[derive(Debug, Clone, PartialEq)]
struct LoadedShared {
    version: String,
    singleton: bool,
    /// Container whose copy is the loaded instance.
    provider: String,
}

/// Registry of loaded containers, keyed by container name.
///
/// Registration is atomic: the manifest is validated against the shared
/// scope first, and nothing is recorded unless every check passes.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    containers: HashMap<String, ContainerManifest>,
    shared_scope: HashMap<String, LoadedShared>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container, enforcing the shared-dependency contract.
    pub fn register(&mut self, manifest: ContainerManifest) -> Result<(), FederationError> {
        if self.containers.contains_key(&manifest.name) {
            return Err(FederationError::DuplicateContainer(manifest.name));
        }

        // Validate every shared declaration before touching the scope.
        for dep in &manifest.shared {
            let requested = dep.parsed_version()?;
            if let Some(loaded) = self.shared_scope.get(&dep.name) {
                if (loaded.singleton || dep.singleton)
                    && !requested.is_compatible_with(&loaded.version.parse()?)
                {
                    tracing::warn!(
                        container = %manifest.name,
                        dependency = %dep.name,
                        provided = %loaded.version,
                        requested = %dep.version,
                        "singleton conflict, refusing container"
                    );
                    return Err(FederationError::SingletonConflict {
                        dependency: dep.name.clone(),
                        provided: loaded.version.clone(),
                        requested: dep.version.clone(),
                    });
                }
            }
        }

        for dep in &manifest.shared {
            match self.shared_scope.get_mut(&dep.name) {
                // First provider wins; later containers reuse its instance.
                Some(loaded) => loaded.singleton |= dep.singleton,
                None => {
                    self.shared_scope.insert(
                        dep.name.clone(),
                        LoadedShared {
                            version: dep.version.clone(),
                            singleton: dep.singleton,
                            provider: manifest.name.clone(),
                        },
                    );
                }
            }
        }

        tracing::debug!(
            container = %manifest.name,
            version = %manifest.version,
            exposes = manifest.exposes.len(),
            "container registered"
        );
        self.containers.insert(manifest.name.clone(), manifest);
        Ok(())
    }

    /// Resolve an exposed module by container name and path.
    pub fn resolve(&self, container: &str, path: &str) -> Result<&ExposedModule, FederationError> {
        let manifest = self
            .containers
            .get(container)
            .ok_or_else(|| FederationError::ContainerNotFound(container.to_string()))?;
        manifest
            .module(path)
            .ok_or_else(|| FederationError::ModuleNotFound {
                container: container.to_string(),
                path: path.to_string(),
            })
    }

    /// Get a registered container's manifest.
    pub fn container(&self, name: &str) -> Option<&ContainerManifest> {
        self.containers.get(name)
    }

    /// Names of all registered containers.
    pub fn container_names(&self) -> Vec<&str> {
        self.containers.keys().map(String::as_str).collect()
    }

    /// The loaded version of a shared dependency, if any container
    /// provides it.
    pub fn shared_version(&self, dependency: &str) -> Option<&str> {
        self.shared_scope.get(dependency).map(|s| s.version.as_str())
    }

    /// Number of registered containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if no containers are registered.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
