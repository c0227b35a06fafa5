//! Process-global registry of model descriptors.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::model::{Model, ModelDescriptor};

fn models() -> &'static RwLock<HashMap<String, ModelDescriptor>> {
    static MODELS: OnceLock<RwLock<HashMap<String, ModelDescriptor>>> = OnceLock::new();
    MODELS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a model type under its name. Registering the same model again
/// is a no-op; the existing descriptor is returned.
pub fn register<M: Model>() -> ModelDescriptor {
    let name = M::model_name();
    {
        let map = models().read().unwrap();
        if let Some(desc) = map.get(name) {
            return *desc;
        }
    }
    let desc = ModelDescriptor::of::<M>();
    let mut map = models().write().unwrap();
    *map.entry(name.to_string()).or_insert(desc)
}

/// Look up a registered model by name.
pub fn lookup(name: &str) -> Option<ModelDescriptor> {
    models().read().unwrap().get(name).copied()
}

pub fn is_registered(name: &str) -> bool {
    models().read().unwrap().contains_key(name)
}
