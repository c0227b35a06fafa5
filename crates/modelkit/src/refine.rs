//! Constraint application, folding named constraints onto schema values.

use serde_json::Value;

use modelkit_meta::{keys, patterns};
use modelkit_schema::{Schema, SchemaError};

use crate::error::SynthError;

/// Constraint kinds consumed directly by the attribute synthesizer, never
/// routed through [`apply`]: the type entry, the required marker, and the
/// date discriminator.
pub const RESERVED: &[&str] = &[keys::TYPE, keys::REQUIRED, keys::DATE];

pub fn is_reserved(kind: &str) -> bool {
    RESERVED.contains(&kind)
}

type Handler = fn(Schema, &str, &Value) -> Result<Schema, SynthError>;

const HANDLERS: &[(&str, Handler)] = &[
    (keys::MIN, refine_min),
    (keys::MIN_LENGTH, refine_min),
    (keys::MAX, refine_max),
    (keys::MAX_LENGTH, refine_max),
    (keys::STEP, refine_step),
    (keys::PATTERN, refine_pattern),
    (keys::URL, refine_pattern),
    (keys::EMAIL, refine_pattern),
    (keys::PASSWORD, refine_password),
    (keys::DATE, refine_date),
];

/// Apply one constraint to a schema value.
///
/// Unknown constraint kinds return the schema unchanged, so metadata can
/// grow new kinds without breaking older synthesis logic.
pub fn apply(schema: Schema, kind: &str, params: &Value) -> Result<Schema, SynthError> {
    match HANDLERS.iter().find(|(k, _)| *k == kind) {
        Some((_, handler)) => handler(schema, kind, params),
        None => Ok(schema),
    }
}

/// The key a constraint's parameter is stored under. Pattern-family
/// constraints all carry their regex under "pattern"; every other kind uses
/// its own name.
fn param_key(kind: &str) -> &str {
    match kind {
        keys::URL | keys::EMAIL | keys::PASSWORD => keys::PATTERN,
        other => other,
    }
}

/// Extract a constraint's parameter from its payload. An object payload is
/// indexed by the parameter key; a bare scalar is accepted as shorthand.
fn param<'a>(kind: &str, params: &'a Value) -> Option<&'a Value> {
    match params {
        Value::Object(map) => map.get(param_key(kind)),
        Value::Null => None,
        other => Some(other),
    }
}

fn require_param<'a>(kind: &str, params: &'a Value) -> Result<&'a Value, SynthError> {
    param(kind, params).ok_or_else(|| SynthError::InvalidParams {
        kind: kind.to_string(),
        reason: "missing parameter value".to_string(),
    })
}

fn lift(kind: &str, err: SchemaError) -> SynthError {
    match err {
        SchemaError::Unsupported { schema, .. } => SynthError::InvalidRefinement {
            kind: kind.to_string(),
            schema,
        },
        SchemaError::InvalidParam { reason, .. } => SynthError::InvalidParams {
            kind: kind.to_string(),
            reason,
        },
    }
}

fn refine_min(schema: Schema, kind: &str, params: &Value) -> Result<Schema, SynthError> {
    let value = require_param(kind, params)?;
    schema.min(value).map_err(|e| lift(kind, e))
}

fn refine_max(schema: Schema, kind: &str, params: &Value) -> Result<Schema, SynthError> {
    let value = require_param(kind, params)?;
    schema.max(value).map_err(|e| lift(kind, e))
}

fn refine_step(schema: Schema, kind: &str, params: &Value) -> Result<Schema, SynthError> {
    let value = require_param(kind, params)?;
    schema.multiple_of(value).map_err(|e| lift(kind, e))
}

fn refine_pattern(schema: Schema, kind: &str, params: &Value) -> Result<Schema, SynthError> {
    let value = require_param(kind, params)?;
    let pattern = value.as_str().ok_or_else(|| SynthError::InvalidParams {
        kind: kind.to_string(),
        reason: "pattern must be a string".to_string(),
    })?;
    schema.regex(pattern).map_err(|e| lift(kind, e))
}

/// Password complexity uses the fixed built-in checks, never a
/// caller-supplied pattern.
fn refine_password(schema: Schema, kind: &str, _params: &Value) -> Result<Schema, SynthError> {
    let mut refined = schema;
    for check in patterns::PASSWORD_CHECKS {
        refined = refined.regex(check).map_err(|e| lift(kind, e))?;
    }
    Ok(refined)
}

/// Date typing flows through base type resolution only; as a refinement it
/// always fails.
fn refine_date(schema: Schema, kind: &str, _params: &Value) -> Result<Schema, SynthError> {
    Err(SynthError::InvalidRefinement {
        kind: kind.to_string(),
        schema: schema.kind(),
    })
}
