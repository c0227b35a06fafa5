//! Whole-model synthesis into object schemas.

use std::cell::RefCell;

use indexmap::IndexMap;

use modelkit_meta::{registry, AttributeMeta, Model, ModelDescriptor, ModelMetadata};
use modelkit_schema::Schema;

use crate::attribute;
use crate::error::SynthError;

thread_local! {
    static IN_PROGRESS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// RAII guard for the per-thread stack of models being synthesized.
struct InProgress;

impl InProgress {
    /// Push `name` onto the stack, or return `None` if it is already there
    /// (the model is re-entered through a reference cycle).
    fn enter(name: &str) -> Option<InProgress> {
        IN_PROGRESS.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.iter().any(|n| n == name) {
                None
            } else {
                stack.push(name.to_string());
                Some(InProgress)
            }
        })
    }
}

impl Drop for InProgress {
    fn drop(&mut self) {
        IN_PROGRESS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Synthesize the object schema for a model descriptor.
///
/// Attributes are walked in declaration order; `"constructor"` and
/// underscore-prefixed names are skipped, and attributes without metadata
/// contribute nothing. A model re-entered on the current call stack
/// short-circuits to an empty object schema so that mutually-referencing
/// models terminate.
pub fn synthesize_descriptor(desc: &ModelDescriptor) -> Result<Schema, SynthError> {
    let _guard = match InProgress::enter(desc.name) {
        Some(guard) => guard,
        None => return Ok(Schema::object(IndexMap::new())),
    };

    let meta = (desc.metadata)();
    let mut shape: IndexMap<String, Schema> = IndexMap::new();

    for attr in (desc.attributes)() {
        if attr == "constructor" || attr.starts_with('_') {
            continue;
        }
        let record = effective_record(&meta, &attr);
        let description = meta.description_of(&attr);
        if let Some(schema) = attribute::synthesize_attribute(&attr, &record, description)? {
            shape.insert(attr, schema);
        }
    }

    let mut schema = Schema::object(shape);
    if let Some(text) = &meta.class_description {
        schema = schema.describe(text.as_str());
    }
    Ok(schema)
}

/// The attribute's validation record, with the declared type merged in as a
/// fallback when no explicit type entry exists.
fn effective_record(meta: &ModelMetadata, attr: &str) -> AttributeMeta {
    let mut record = meta.validation.get(attr).cloned().unwrap_or_default();
    let missing_type = record.type_spec().map_or(true, |spec| spec.is_empty());
    if missing_type {
        if let Some(declared) = meta.declared.get(attr) {
            record = record.typed(declared.clone());
        }
    }
    record
}

/// Synthesize the schema for a model type, registering it first if needed.
pub fn model_to_schema<M: Model>() -> Result<Schema, SynthError> {
    let desc = registry::register::<M>();
    synthesize_descriptor(&desc)
}
