//! This container's federation surface.

use payflow_federation::{ContainerManifest, ExposedModule, SharedDependency};

/// Name this container registers under.
pub const CONTAINER_NAME: &str = "payment-provider";

/// The rendering runtime every federated module must share: exactly one
/// loaded instance, so reactive state is not split across copies.
pub const RENDERER: &str = "leptos";
const RENDERER_VERSION: &str = "0.7.8";

/// Manifest describing what this micro-frontend exposes and shares.
pub fn manifest() -> ContainerManifest {
    ContainerManifest::new(CONTAINER_NAME, env!("CARGO_PKG_VERSION"))
        .with_module(ExposedModule::new(".", "App"))
        .with_module(ExposedModule::new("./ShoppingCart", "ShoppingCart"))
        .with_module(ExposedModule::new("./CheckoutForm", "CheckoutForm"))
        .with_module(ExposedModule::new("./PayButton", "PayButton"))
        .with_shared(SharedDependency::singleton(RENDERER, RENDERER_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use payflow_federation::ModuleRegistry;

    #[test]
    fn test_manifest_registers_and_resolves() {
        let mut registry = ModuleRegistry::new();
        registry.register(manifest()).unwrap();

        for path in [".", "./ShoppingCart", "./CheckoutForm", "./PayButton"] {
            assert!(registry.resolve(CONTAINER_NAME, path).is_ok(), "missing {path}");
        }
    }

    #[test]
    fn test_renderer_is_singleton() {
        let dep = manifest()
            .shared
            .iter()
            .find(|d| d.name == RENDERER)
            .cloned()
            .unwrap();
        assert!(dep.singleton);
    }

    #[test]
    fn test_host_with_compatible_renderer_loads() {
        let mut registry = ModuleRegistry::new();
        registry.register(manifest()).unwrap();

        let host = ContainerManifest::new("storefront-host", "1.0.0")
            .with_shared(SharedDependency::singleton(RENDERER, "0.7.2"));
        assert!(registry.register(host).is_ok());
    }
}
