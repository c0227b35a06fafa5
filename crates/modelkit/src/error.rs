//! Synthesis errors.

use thiserror::Error;

/// Failures raised while synthesizing a schema from model metadata.
///
/// Synthesis either fully succeeds or fails with one of these; there is no
/// partial-schema recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// An attribute carries metadata but no resolvable type entry.
    #[error("missing type information for attribute `{attribute}`")]
    MissingType { attribute: String },

    /// A non-primitive type name has no registered model.
    #[error("unknown type: {name}")]
    UnknownType { name: String },

    /// Recursive synthesis of a nested model failed.
    #[error("failed to synthesize model {model}: {source}")]
    Conversion {
        model: String,
        #[source]
        source: Box<SynthError>,
    },

    /// A refinement was requested that the target schema structurally
    /// forbids, such as applying a date constraint as a refinement.
    #[error("{kind} validator cannot be applied as a refinement")]
    InvalidRefinement { kind: String, schema: &'static str },

    /// A recognized refinement received an unusable parameter payload.
    #[error("invalid {kind} refinement: {reason}")]
    InvalidParams { kind: String, reason: String },
}
