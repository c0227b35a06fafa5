//! modelkit - synthesizes validation schemas from declarative model
//! metadata.
//!
//! A [`Model`](modelkit_meta::Model) describes its attributes with metadata
//! records (type, required-ness, collection shape, constraints,
//! descriptions). [`model_to_schema`] compiles that metadata into a
//! [`Schema`](modelkit_schema::Schema): the type resolver maps type
//! references to base schemas (recursing into nested models through the
//! registry), the constraint applier folds refinements in metadata order,
//! and the model synthesizer assembles the per-attribute results into an
//! object schema with optionality and descriptions applied.
//!
//! [`install`] additionally hooks synthesis into
//! `modelkit_schema::factory`, so schemas can be produced from a registered
//! model name alone.

pub mod attribute;
pub mod entry;
pub mod error;
pub mod model;
pub mod refine;
pub mod resolve;

pub use entry::{install, ToSchema};
pub use error::SynthError;
pub use model::{model_to_schema, synthesize_descriptor};
