//! Static resource registry.
//!
//! Resource names resolve to handlers chosen at startup, never to code
//! selected by untrusted path input.

use crate::resources::{contacts::Contacts, Resource};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct ResourceRegistry {
    by_name: HashMap<&'static str, Arc<dyn Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> ResourceRegistry {
        ResourceRegistry::default()
    }

    /// Every resource this server exposes.
    pub fn with_defaults() -> ResourceRegistry {
        let mut registry = ResourceRegistry::new();
        registry.register(Contacts);
        registry
    }

    pub fn register<R: Resource + 'static>(&mut self, resource: R) {
        self.by_name.insert(resource.name(), Arc::new(resource));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Resource>> {
        self.by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}
