//! Attribute metadata records and whole-model metadata.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::keys;
use crate::patterns;
use crate::type_ref::{TypeRef, TypeSpec};

/// One entry of an attribute metadata record.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaEntry {
    /// The declared base type (the reserved "type" entry).
    Type(TypeSpec),
    /// Element types of a collection (the "list" entry).
    Elements(Vec<TypeRef>),
    /// Parameters of a constraint, keyed by parameter name.
    Params(Value),
}

fn payload(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Declarative metadata for one attribute of one model.
///
/// Entries keep insertion order; constraint folding downstream follows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMeta {
    pub entries: IndexMap<String, MetaEntry>,
}

impl AttributeMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the attribute's base type.
    pub fn typed(mut self, spec: impl Into<TypeSpec>) -> Self {
        self.entries
            .insert(keys::TYPE.to_string(), MetaEntry::Type(spec.into()));
        self
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.entries.insert(
            keys::REQUIRED.to_string(),
            MetaEntry::Params(Value::Bool(true)),
        );
        self
    }

    /// Declare the element types of a collection attribute.
    pub fn elements(mut self, refs: Vec<TypeRef>) -> Self {
        self.entries
            .insert(keys::LIST.to_string(), MetaEntry::Elements(refs));
        self
    }

    /// Attach an arbitrary constraint with its parameter payload.
    pub fn constraint(mut self, kind: impl Into<String>, params: Value) -> Self {
        self.entries.insert(kind.into(), MetaEntry::Params(params));
        self
    }

    pub fn min(self, value: impl Into<Value>) -> Self {
        self.constraint(keys::MIN, payload(keys::MIN, value.into()))
    }

    pub fn max(self, value: impl Into<Value>) -> Self {
        self.constraint(keys::MAX, payload(keys::MAX, value.into()))
    }

    pub fn min_length(self, value: u64) -> Self {
        self.constraint(keys::MIN_LENGTH, payload(keys::MIN_LENGTH, value.into()))
    }

    pub fn max_length(self, value: u64) -> Self {
        self.constraint(keys::MAX_LENGTH, payload(keys::MAX_LENGTH, value.into()))
    }

    pub fn step(self, value: impl Into<Value>) -> Self {
        self.constraint(keys::STEP, payload(keys::STEP, value.into()))
    }

    pub fn pattern(self, pattern: &str) -> Self {
        self.constraint(keys::PATTERN, payload(keys::PATTERN, pattern.into()))
    }

    /// Require an email address. The payload carries the built-in pattern
    /// under the "pattern" key, like the other pattern-family constraints.
    pub fn email(self) -> Self {
        self.constraint(keys::EMAIL, payload(keys::PATTERN, patterns::EMAIL.into()))
    }

    pub fn url(self) -> Self {
        self.constraint(keys::URL, payload(keys::PATTERN, patterns::URL.into()))
    }

    /// Require password complexity. The checks themselves are fixed; the
    /// payload carries no caller-supplied pattern.
    pub fn password(self) -> Self {
        self.constraint(keys::PASSWORD, Value::Object(Map::new()))
    }

    /// Record the display format of a date attribute. The entry is a base
    /// type discriminator, not a refinement.
    pub fn date_format(self, format: &str) -> Self {
        self.constraint(keys::DATE, payload("format", format.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: &str) -> Option<&MetaEntry> {
        self.entries.get(kind)
    }

    /// The declared base type, if any.
    pub fn type_spec(&self) -> Option<&TypeSpec> {
        match self.entries.get(keys::TYPE) {
            Some(MetaEntry::Type(spec)) => Some(spec),
            _ => None,
        }
    }

    /// The declared collection element types, if any.
    pub fn element_types(&self) -> Option<&[TypeRef]> {
        match self.entries.get(keys::LIST) {
            Some(MetaEntry::Elements(refs)) => Some(refs),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.entries.contains_key(keys::REQUIRED)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaEntry)> {
        self.entries.iter()
    }
}

/// Full metadata for a model type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMetadata {
    /// Validation metadata per attribute.
    pub validation: IndexMap<String, AttributeMeta>,
    /// Declared types per attribute, used as a fallback when the validation
    /// record carries no explicit type entry.
    pub declared: IndexMap<String, TypeSpec>,
    /// Free-text descriptions per attribute.
    pub descriptions: IndexMap<String, String>,
    /// Free-text description of the model itself.
    pub class_description: Option<String>,
}

impl ModelMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl Into<String>, meta: AttributeMeta) -> Self {
        self.validation.insert(name.into(), meta);
        self
    }

    pub fn declare(mut self, name: impl Into<String>, spec: impl Into<TypeSpec>) -> Self {
        self.declared.insert(name.into(), spec.into());
        self
    }

    pub fn describe(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.descriptions.insert(name.into(), text.into());
        self
    }

    pub fn describe_model(mut self, text: impl Into<String>) -> Self {
        self.class_description = Some(text.into());
        self
    }

    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    /// Attribute names in declaration order: validation entries first, then
    /// declared-only attributes, without duplicates.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.validation.keys().chain(self.declared.keys()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.clone());
            }
        }
        names
    }
}
