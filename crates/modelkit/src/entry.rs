//! Entry points for model-to-schema conversion.

use modelkit_meta::{registry, Model};
use modelkit_schema::factory::{self, FactoryError};
use modelkit_schema::Schema;

use crate::error::SynthError;
use crate::model::{self, model_to_schema};

/// Instance-side conversion, available on every [`Model`].
pub trait ToSchema: Model {
    fn to_schema(&self) -> Result<Schema, SynthError>
    where
        Self: Sized,
    {
        model_to_schema::<Self>()
    }
}

impl<M: Model> ToSchema for M {}

/// Install model synthesis as the schema crate's by-name factory.
///
/// The factory slot is write-once: the first install wins and later calls
/// return `false` without replacing it, so repeated integration attempts
/// are harmless. Models must be registered before they can be reached by
/// name; nested model types referenced from metadata need the same.
pub fn install() -> bool {
    factory::install(synthesize_by_name)
}

fn synthesize_by_name(name: &str) -> Result<Schema, FactoryError> {
    let desc = registry::lookup(name).ok_or_else(|| FactoryError::Unknown(name.to_string()))?;
    model::synthesize_descriptor(&desc).map_err(|e| FactoryError::Synthesis(e.to_string()))
}
