//! The model trait and the by-name descriptor used by the registry.

use crate::meta::ModelMetadata;

/// A model type whose attributes carry declarative metadata.
pub trait Model: Default {
    /// The name the model is registered and referenced under.
    fn model_name() -> &'static str;

    /// Full metadata for the model. Defaults to empty.
    fn metadata() -> ModelMetadata {
        ModelMetadata::new()
    }

    /// Attribute names in declaration order, derived from the metadata.
    fn attributes() -> Vec<String> {
        Self::metadata().attribute_names()
    }
}

/// An erased handle to a model type, suitable for by-name lookup.
#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    pub name: &'static str,
    pub metadata: fn() -> ModelMetadata,
    pub attributes: fn() -> Vec<String>,
}

impl ModelDescriptor {
    pub fn of<M: Model>() -> Self {
        Self {
            name: M::model_name(),
            metadata: M::metadata,
            attributes: M::attributes,
        }
    }
}
