//! Per-attribute schema synthesis.

use modelkit_meta::{AttributeMeta, MetaEntry};
use modelkit_schema::Schema;

use crate::error::SynthError;
use crate::refine;
use crate::resolve;

/// Synthesize the schema for one attribute from its metadata record.
///
/// Returns `Ok(None)` when the record is empty: an attribute without
/// metadata contributes nothing to the model's schema. A non-empty record
/// must carry a type entry.
///
/// Constraints fold in the record's insertion order. The schema is wrapped
/// optional unless a required marker is present, and the description is
/// attached last, only if the schema does not already carry one.
pub fn synthesize_attribute(
    attribute: &str,
    record: &AttributeMeta,
    description: Option<&str>,
) -> Result<Option<Schema>, SynthError> {
    if record.is_empty() {
        return Ok(None);
    }

    let spec = match record.type_spec() {
        Some(spec) if !spec.is_empty() => spec,
        _ => {
            return Err(SynthError::MissingType {
                attribute: attribute.to_string(),
            })
        }
    };

    // Element types resolve first so collection markers can wrap them.
    let element = match record.element_types() {
        Some(refs) if !refs.is_empty() => Some(resolve::resolve(refs, None)?),
        _ => None,
    };

    let mut schema = resolve::resolve(&spec.names, element.as_ref())?;

    for (kind, entry) in record.iter() {
        if refine::is_reserved(kind) {
            continue;
        }
        if let MetaEntry::Params(params) = entry {
            schema = refine::apply(schema, kind, params)?;
        }
    }

    if !record.is_required() {
        schema = schema.optional();
    }

    if let Some(text) = description {
        if schema.description().is_none() {
            schema = schema.describe(text);
        }
    }

    Ok(Some(schema))
}
