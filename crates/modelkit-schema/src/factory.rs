//! Process-global factory slot for by-name schema synthesis.
//!
//! The slot is write-once: whoever installs first owns it, and later
//! install attempts are no-ops. This lets an integration layer hook model
//! synthesis into this crate without the two crates knowing each other.

use std::sync::OnceLock;

use thiserror::Error;

use crate::schema::Schema;

/// A function that synthesizes a schema for a registered type name.
pub type Factory = fn(&str) -> Result<Schema, FactoryError>;

static FACTORY: OnceLock<Factory> = OnceLock::new();

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("no schema factory installed")]
    NotInstalled,
    #[error("unknown type: {0}")]
    Unknown(String),
    #[error("{0}")]
    Synthesis(String),
}

/// Install a factory into the global slot.
///
/// Returns `true` if the slot was empty and the factory was installed,
/// `false` if a factory is already present (the existing one is kept).
pub fn install(factory: Factory) -> bool {
    FACTORY.set(factory).is_ok()
}

/// Whether a factory has been installed.
pub fn installed() -> bool {
    FACTORY.get().is_some()
}

/// Synthesize a schema for a type name via the installed factory.
pub fn from(name: &str) -> Result<Schema, FactoryError> {
    match FACTORY.get() {
        Some(factory) => factory(name),
        None => Err(FactoryError::NotInstalled),
    }
}
