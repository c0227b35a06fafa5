//! Type references, as plain names or lazily-evaluated thunks.

use crate::model::Model;

/// A reference to a declared type.
///
/// A `Name` is used verbatim; a `Thunk` defers evaluation until the
/// reference is resolved, which lets a model mention another model that is
/// defined later. A thunk is always invoked exactly once at resolution and
/// a name never is, so there is no ambiguity about what gets called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Name(String),
    Thunk(fn() -> String),
}

impl TypeRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn thunk(thunk: fn() -> String) -> Self {
        Self::Thunk(thunk)
    }

    /// Reference a model type by its registered name.
    pub fn of<M: Model>() -> Self {
        Self::Name(M::model_name().to_string())
    }

    /// Resolve the reference to a concrete type name.
    pub fn resolve(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Thunk(thunk) => thunk(),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// An ordered list of type references.
///
/// A single entry is a plain type; multiple entries denote a union whose
/// option order follows the entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSpec {
    pub names: Vec<TypeRef>,
}

impl TypeSpec {
    pub fn one(name: impl Into<TypeRef>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    pub fn union(names: Vec<TypeRef>) -> Self {
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        Self::one(name)
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        Self::one(name)
    }
}

impl From<TypeRef> for TypeSpec {
    fn from(name: TypeRef) -> Self {
        Self { names: vec![name] }
    }
}

impl From<Vec<TypeRef>> for TypeSpec {
    fn from(names: Vec<TypeRef>) -> Self {
        Self { names }
    }
}
