//! Type resolution from declared names to base schema values.

use modelkit_meta::{registry, TypeRef};
use modelkit_schema::Schema;

use crate::error::SynthError;
use crate::model;

/// Resolve an ordered list of type references to a schema value.
///
/// A single reference yields its schema directly; multiple references fold
/// left-to-right into a union, so the first reference becomes the union's
/// first option. Collection markers wrap `element`, defaulting to an
/// unconstrained any-schema.
pub fn resolve(refs: &[TypeRef], element: Option<&Schema>) -> Result<Schema, SynthError> {
    let mut resolved: Option<Schema> = None;
    for r in refs {
        let schema = resolve_name(&r.resolve(), element)?;
        resolved = Some(match resolved {
            None => schema,
            Some(acc) => acc.or(schema),
        });
    }
    resolved.ok_or_else(|| SynthError::UnknownType {
        name: String::new(),
    })
}

/// Resolve one type name: primitives and collection markers dispatch
/// case-insensitively; anything else is looked up in the model registry
/// under its original spelling and synthesized recursively.
pub fn resolve_name(name: &str, element: Option<&Schema>) -> Result<Schema, SynthError> {
    match name.to_ascii_lowercase().as_str() {
        "string" => Ok(Schema::string()),
        "number" => Ok(Schema::number()),
        "bigint" => Ok(Schema::bigint()),
        "boolean" => Ok(Schema::boolean()),
        "date" => Ok(Schema::date()),
        "array" => Ok(Schema::array(element.cloned().unwrap_or_else(Schema::any))),
        "set" => Ok(Schema::set(element.cloned().unwrap_or_else(Schema::any))),
        _ => match registry::lookup(name) {
            Some(desc) => {
                model::synthesize_descriptor(&desc).map_err(|e| SynthError::Conversion {
                    model: name.to_string(),
                    source: Box::new(e),
                })
            }
            None => Err(SynthError::UnknownType {
                name: name.to_string(),
            }),
        },
    }
}
