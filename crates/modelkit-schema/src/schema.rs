//! Immutable schema nodes and the combinator and refinement operations
//! that shape them.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;

use crate::date::parse_date;

/// Error raised when a refinement cannot be applied to a schema value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{refinement} refinement is not supported on {schema} schema")]
    Unsupported {
        refinement: &'static str,
        schema: &'static str,
    },
    #[error("invalid {refinement} parameter: {reason}")]
    InvalidParam {
        refinement: &'static str,
        reason: String,
    },
}

/// Fields shared by every schema node.
#[derive(Debug, Clone, Default)]
pub struct SchemaBase {
    pub description: Option<String>,
}

/// Accepts any JSON value.
#[derive(Debug, Clone, Default)]
pub struct AnySchema {
    pub base: SchemaBase,
}

/// Accepts a JSON boolean.
#[derive(Debug, Clone, Default)]
pub struct BoolSchema {
    pub base: SchemaBase,
}

/// Accepts a JSON number with optional range and step constraints.
#[derive(Debug, Clone, Default)]
pub struct NumSchema {
    pub base: SchemaBase,
    pub gte: Option<f64>,
    pub lte: Option<f64>,
    pub multiple_of: Option<f64>,
}

/// Accepts an integer-valued JSON number.
#[derive(Debug, Clone, Default)]
pub struct BigIntSchema {
    pub base: SchemaBase,
    pub gte: Option<i128>,
    pub lte: Option<i128>,
    pub multiple_of: Option<i128>,
}

/// Accepts a JSON string, with length bounds and regex patterns.
///
/// Successive regex refinements accumulate; all patterns must match.
#[derive(Debug, Clone, Default)]
pub struct StrSchema {
    pub base: SchemaBase,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub patterns: Vec<Regex>,
}

/// Accepts a date string (RFC 3339 or `YYYY-MM-DD`) with value bounds.
#[derive(Debug, Clone, Default)]
pub struct DateSchema {
    pub base: SchemaBase,
    pub min: Option<OffsetDateTime>,
    pub max: Option<OffsetDateTime>,
}

/// Accepts a JSON array of homogeneous elements.
#[derive(Debug, Clone)]
pub struct ArrSchema {
    pub base: SchemaBase,
    pub element: Box<Schema>,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Accepts a JSON array of homogeneous, pairwise-distinct elements.
#[derive(Debug, Clone)]
pub struct SetSchema {
    pub base: SchemaBase,
    pub element: Box<Schema>,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Accepts a JSON object with a fixed, ordered shape.
///
/// Keys absent from the shape are ignored; shape values wrapped in
/// [`Schema::Optional`] may be omitted.
#[derive(Debug, Clone, Default)]
pub struct ObjSchema {
    pub base: SchemaBase,
    pub shape: IndexMap<String, Schema>,
}

/// Accepts a value matching any of the options, tried in order.
#[derive(Debug, Clone)]
pub struct UnionSchema {
    pub base: SchemaBase,
    pub options: Vec<Schema>,
}

/// Accepts the inner schema or an absent/null value.
#[derive(Debug, Clone)]
pub struct OptionalSchema {
    pub base: SchemaBase,
    pub inner: Box<Schema>,
}

/// The unified schema enum covering all schema kinds.
#[derive(Debug, Clone)]
pub enum Schema {
    Any(AnySchema),
    Bool(BoolSchema),
    Num(NumSchema),
    BigInt(BigIntSchema),
    Str(StrSchema),
    Date(DateSchema),
    Arr(ArrSchema),
    Set(SetSchema),
    Obj(ObjSchema),
    Union(UnionSchema),
    Optional(OptionalSchema),
}

impl Schema {
    pub fn any() -> Self {
        Self::Any(AnySchema::default())
    }

    pub fn boolean() -> Self {
        Self::Bool(BoolSchema::default())
    }

    pub fn number() -> Self {
        Self::Num(NumSchema::default())
    }

    pub fn bigint() -> Self {
        Self::BigInt(BigIntSchema::default())
    }

    pub fn string() -> Self {
        Self::Str(StrSchema::default())
    }

    pub fn date() -> Self {
        Self::Date(DateSchema::default())
    }

    pub fn array(element: Schema) -> Self {
        Self::Arr(ArrSchema {
            base: SchemaBase::default(),
            element: Box::new(element),
            min: None,
            max: None,
        })
    }

    pub fn set(element: Schema) -> Self {
        Self::Set(SetSchema {
            base: SchemaBase::default(),
            element: Box::new(element),
            min: None,
            max: None,
        })
    }

    pub fn object(shape: IndexMap<String, Schema>) -> Self {
        Self::Obj(ObjSchema {
            base: SchemaBase::default(),
            shape,
        })
    }

    pub fn union(options: Vec<Schema>) -> Self {
        Self::Union(UnionSchema {
            base: SchemaBase::default(),
            options,
        })
    }

    /// Short string identifier for this node's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any(_) => "any",
            Self::Bool(_) => "bool",
            Self::Num(_) => "num",
            Self::BigInt(_) => "bigint",
            Self::Str(_) => "str",
            Self::Date(_) => "date",
            Self::Arr(_) => "arr",
            Self::Set(_) => "set",
            Self::Obj(_) => "obj",
            Self::Union(_) => "union",
            Self::Optional(_) => "optional",
        }
    }

    /// The shared base fields of this node.
    pub fn base(&self) -> &SchemaBase {
        match self {
            Self::Any(s) => &s.base,
            Self::Bool(s) => &s.base,
            Self::Num(s) => &s.base,
            Self::BigInt(s) => &s.base,
            Self::Str(s) => &s.base,
            Self::Date(s) => &s.base,
            Self::Arr(s) => &s.base,
            Self::Set(s) => &s.base,
            Self::Obj(s) => &s.base,
            Self::Union(s) => &s.base,
            Self::Optional(s) => &s.base,
        }
    }

    fn base_mut(&mut self) -> &mut SchemaBase {
        match self {
            Self::Any(s) => &mut s.base,
            Self::Bool(s) => &mut s.base,
            Self::Num(s) => &mut s.base,
            Self::BigInt(s) => &mut s.base,
            Self::Str(s) => &mut s.base,
            Self::Date(s) => &mut s.base,
            Self::Arr(s) => &mut s.base,
            Self::Set(s) => &mut s.base,
            Self::Obj(s) => &mut s.base,
            Self::Union(s) => &mut s.base,
            Self::Optional(s) => &mut s.base,
        }
    }

    /// Attach a human-readable description to this node.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.base_mut().description = Some(text.into());
        self
    }

    /// The description carried by this node itself (not by wrapped nodes).
    pub fn description(&self) -> Option<&str> {
        self.base().description.as_deref()
    }

    /// Combine two schemas into a union. Combining onto an existing union
    /// appends the option, so repeated `or` calls fold left-to-right into a
    /// single flat option list.
    pub fn or(self, other: Schema) -> Self {
        match self {
            Self::Union(mut u) => {
                u.options.push(other);
                Self::Union(u)
            }
            first => Self::union(vec![first, other]),
        }
    }

    /// Wrap this schema so that absent (or null) values are accepted.
    /// Wrapping an already-optional schema is a no-op.
    pub fn optional(self) -> Self {
        match self {
            s @ Self::Optional(_) => s,
            inner => Self::Optional(OptionalSchema {
                base: SchemaBase::default(),
                inner: Box::new(inner),
            }),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// The element schema of a collection node.
    pub fn element(&self) -> Option<&Schema> {
        match self {
            Self::Arr(s) => Some(&s.element),
            Self::Set(s) => Some(&s.element),
            _ => None,
        }
    }

    /// The option list of a union node.
    pub fn options(&self) -> Option<&[Schema]> {
        match self {
            Self::Union(s) => Some(&s.options),
            _ => None,
        }
    }

    /// Inclusive lower bound: a value bound on numeric and date schemas, a
    /// length bound on strings and collections.
    pub fn min(self, value: &Value) -> Result<Self, SchemaError> {
        match self {
            Self::Num(mut s) => {
                s.gte = Some(as_f64(value, "min")?);
                Ok(Self::Num(s))
            }
            Self::BigInt(mut s) => {
                s.gte = Some(as_i128(value, "min")?);
                Ok(Self::BigInt(s))
            }
            Self::Date(mut s) => {
                s.min = Some(as_date(value, "min")?);
                Ok(Self::Date(s))
            }
            Self::Str(mut s) => {
                s.min = Some(as_len(value, "min")?);
                Ok(Self::Str(s))
            }
            Self::Arr(mut s) => {
                s.min = Some(as_len(value, "min")?);
                Ok(Self::Arr(s))
            }
            Self::Set(mut s) => {
                s.min = Some(as_len(value, "min")?);
                Ok(Self::Set(s))
            }
            other => Err(SchemaError::Unsupported {
                refinement: "min",
                schema: other.kind(),
            }),
        }
    }

    /// Inclusive upper bound, symmetric with [`Schema::min`].
    pub fn max(self, value: &Value) -> Result<Self, SchemaError> {
        match self {
            Self::Num(mut s) => {
                s.lte = Some(as_f64(value, "max")?);
                Ok(Self::Num(s))
            }
            Self::BigInt(mut s) => {
                s.lte = Some(as_i128(value, "max")?);
                Ok(Self::BigInt(s))
            }
            Self::Date(mut s) => {
                s.max = Some(as_date(value, "max")?);
                Ok(Self::Date(s))
            }
            Self::Str(mut s) => {
                s.max = Some(as_len(value, "max")?);
                Ok(Self::Str(s))
            }
            Self::Arr(mut s) => {
                s.max = Some(as_len(value, "max")?);
                Ok(Self::Arr(s))
            }
            Self::Set(mut s) => {
                s.max = Some(as_len(value, "max")?);
                Ok(Self::Set(s))
            }
            other => Err(SchemaError::Unsupported {
                refinement: "max",
                schema: other.kind(),
            }),
        }
    }

    /// Require the value to be a multiple of the given step.
    pub fn multiple_of(self, value: &Value) -> Result<Self, SchemaError> {
        match self {
            Self::Num(mut s) => {
                let step = as_f64(value, "multiple_of")?;
                if step <= 0.0 {
                    return Err(SchemaError::InvalidParam {
                        refinement: "multiple_of",
                        reason: "step must be positive".to_string(),
                    });
                }
                s.multiple_of = Some(step);
                Ok(Self::Num(s))
            }
            Self::BigInt(mut s) => {
                let step = as_i128(value, "multiple_of")?;
                if step <= 0 {
                    return Err(SchemaError::InvalidParam {
                        refinement: "multiple_of",
                        reason: "step must be positive".to_string(),
                    });
                }
                s.multiple_of = Some(step);
                Ok(Self::BigInt(s))
            }
            other => Err(SchemaError::Unsupported {
                refinement: "multiple_of",
                schema: other.kind(),
            }),
        }
    }

    /// Add a regex pattern the string must match.
    pub fn regex(self, pattern: &str) -> Result<Self, SchemaError> {
        match self {
            Self::Str(mut s) => {
                let re = Regex::new(pattern).map_err(|e| SchemaError::InvalidParam {
                    refinement: "regex",
                    reason: e.to_string(),
                })?;
                s.patterns.push(re);
                Ok(Self::Str(s))
            }
            other => Err(SchemaError::Unsupported {
                refinement: "regex",
                schema: other.kind(),
            }),
        }
    }
}

fn as_f64(value: &Value, refinement: &'static str) -> Result<f64, SchemaError> {
    value.as_f64().ok_or_else(|| SchemaError::InvalidParam {
        refinement,
        reason: "expected a number".to_string(),
    })
}

fn as_i128(value: &Value, refinement: &'static str) -> Result<i128, SchemaError> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
        .ok_or_else(|| SchemaError::InvalidParam {
            refinement,
            reason: "expected an integer".to_string(),
        })
}

fn as_len(value: &Value, refinement: &'static str) -> Result<u64, SchemaError> {
    value.as_u64().ok_or_else(|| SchemaError::InvalidParam {
        refinement,
        reason: "expected a non-negative integer".to_string(),
    })
}

fn as_date(value: &Value, refinement: &'static str) -> Result<OffsetDateTime, SchemaError> {
    value
        .as_str()
        .and_then(parse_date)
        .ok_or_else(|| SchemaError::InvalidParam {
            refinement,
            reason: "expected an RFC 3339 or YYYY-MM-DD date string".to_string(),
        })
}
