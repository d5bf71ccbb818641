//! Singleton service registration for the function host

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// The host's service container.
///
/// Startup code registers singleton collaborators here, keyed by their
/// registered type; the host resolves them when wiring function
/// invocations. Registered instances live for the process lifetime and are
/// dropped at shutdown along with the registry.
#[derive(Default)]
pub struct ServiceRegistry {
    singletons: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one instance of the capability `T`, shared for the process
    /// lifetime. Registering the same capability again replaces the earlier
    /// instance.
    pub fn register_singleton<T: Clone + Send + Sync + 'static>(&mut self, instance: T) {
        self.singletons.insert(TypeId::of::<T>(), Box::new(instance));
    }

    /// Resolves the instance registered for the capability `T`, if any.
    pub fn get<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.singletons
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.downcast_ref::<T>())
            .cloned()
    }

    /// Whether an instance is registered for the capability `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.singletons.contains_key(&TypeId::of::<T>())
    }
}
