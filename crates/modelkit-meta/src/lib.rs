//! modelkit-meta - declarative attribute metadata for model types.
//!
//! A model implements [`Model`] and describes its attributes with
//! [`AttributeMeta`] records collected into [`ModelMetadata`]. The
//! [`registry`] maps model names to [`ModelDescriptor`] handles so that
//! metadata can be reached from a type name alone.

pub mod keys;
pub mod meta;
pub mod model;
pub mod patterns;
pub mod registry;
pub mod type_ref;

pub use meta::{AttributeMeta, MetaEntry, ModelMetadata};
pub use model::{Model, ModelDescriptor};
pub use type_ref::{TypeRef, TypeSpec};
