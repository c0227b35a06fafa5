//! Runtime validation of JSON values against schema nodes.

use std::fmt;

use serde_json::Value;

use crate::date::parse_date;
use crate::schema::{
    ArrSchema, BigIntSchema, DateSchema, NumSchema, ObjSchema, Schema, SetSchema, StrSchema,
    UnionSchema,
};

/// Machine-readable validation failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Bool = 0,
    Num,
    Gte,
    Lte,
    Step,
    BigInt,
    Str,
    StrLen,
    Pattern,
    Date,
    DateRange,
    Arr,
    ArrLen,
    Set,
    SetLen,
    Dup,
    Obj,
    Key,
    Union,
}

impl ErrorCode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Num => "NUM",
            Self::Gte => "GTE",
            Self::Lte => "LTE",
            Self::Step => "STEP",
            Self::BigInt => "BIGINT",
            Self::Str => "STR",
            Self::StrLen => "STR_LEN",
            Self::Pattern => "PATTERN",
            Self::Date => "DATE",
            Self::DateRange => "DATE_RANGE",
            Self::Arr => "ARR",
            Self::ArrLen => "ARR_LEN",
            Self::Set => "SET",
            Self::SetLen => "SET_LEN",
            Self::Dup => "DUP",
            Self::Obj => "OBJ",
            Self::Key => "KEY",
            Self::Union => "UNION",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Bool => "value is not a boolean",
            Self::Num => "value is not a number",
            Self::Gte => "value is below the minimum",
            Self::Lte => "value is above the maximum",
            Self::Step => "value is not a multiple of the step",
            Self::BigInt => "value is not an integer",
            Self::Str => "value is not a string",
            Self::StrLen => "string length is out of bounds",
            Self::Pattern => "string does not match the pattern",
            Self::Date => "value is not a valid date",
            Self::DateRange => "date is out of range",
            Self::Arr => "value is not an array",
            Self::ArrLen => "array length is out of bounds",
            Self::Set => "value is not a set",
            Self::SetLen => "set size is out of bounds",
            Self::Dup => "set contains duplicate elements",
            Self::Obj => "value is not an object",
            Self::Key => "missing required key",
            Self::Union => "no union option matched",
        }
    }
}

/// One step into the validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "{k}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A validation failure: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub path: Vec<PathSegment>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.message())?;
        if !self.path.is_empty() {
            write!(f, " at ")?;
            for segment in &self.path {
                write!(f, "/{segment}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl Schema {
    /// Validate a JSON value against this schema.
    pub fn validate(&self, value: &Value) -> Result<(), ParseError> {
        validate_inner(self, value, &[])
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}

fn fail(code: ErrorCode, path: &[PathSegment]) -> Result<(), ParseError> {
    Err(ParseError {
        code,
        path: path.to_vec(),
    })
}

fn validate_inner(schema: &Schema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    match schema {
        Schema::Any(_) => Ok(()),

        Schema::Bool(_) => {
            if !value.is_boolean() {
                return fail(ErrorCode::Bool, path);
            }
            Ok(())
        }

        Schema::Num(s) => validate_num(s, value, path),

        Schema::BigInt(s) => validate_bigint(s, value, path),

        Schema::Str(s) => validate_str(s, value, path),

        Schema::Date(s) => validate_date(s, value, path),

        Schema::Arr(s) => validate_arr(s, value, path),

        Schema::Set(s) => validate_set(s, value, path),

        Schema::Obj(s) => validate_obj(s, value, path),

        Schema::Union(s) => validate_union(s, value, path),

        Schema::Optional(s) => {
            // Null stands in for an absent value at non-key positions.
            if value.is_null() {
                return Ok(());
            }
            validate_inner(&s.inner, value, path)
        }
    }
}

fn validate_num(s: &NumSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let num = match value.as_f64() {
        Some(n) => n,
        None => return fail(ErrorCode::Num, path),
    };
    if let Some(gte) = s.gte {
        if num < gte {
            return fail(ErrorCode::Gte, path);
        }
    }
    if let Some(lte) = s.lte {
        if num > lte {
            return fail(ErrorCode::Lte, path);
        }
    }
    if let Some(step) = s.multiple_of {
        let quotient = num / step;
        if (quotient - quotient.round()).abs() > 1e-9 {
            return fail(ErrorCode::Step, path);
        }
    }
    Ok(())
}

fn validate_bigint(
    s: &BigIntSchema,
    value: &Value,
    path: &[PathSegment],
) -> Result<(), ParseError> {
    let num = match value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
    {
        Some(n) => n,
        None => return fail(ErrorCode::BigInt, path),
    };
    if let Some(gte) = s.gte {
        if num < gte {
            return fail(ErrorCode::Gte, path);
        }
    }
    if let Some(lte) = s.lte {
        if num > lte {
            return fail(ErrorCode::Lte, path);
        }
    }
    if let Some(step) = s.multiple_of {
        if num % step != 0 {
            return fail(ErrorCode::Step, path);
        }
    }
    Ok(())
}

fn validate_str(s: &StrSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let text = match value.as_str() {
        Some(t) => t,
        None => return fail(ErrorCode::Str, path),
    };
    let len = text.chars().count() as u64;
    if let Some(min) = s.min {
        if len < min {
            return fail(ErrorCode::StrLen, path);
        }
    }
    if let Some(max) = s.max {
        if len > max {
            return fail(ErrorCode::StrLen, path);
        }
    }
    for pattern in &s.patterns {
        if !pattern.is_match(text) {
            return fail(ErrorCode::Pattern, path);
        }
    }
    Ok(())
}

fn validate_date(s: &DateSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let text = match value.as_str() {
        Some(t) => t,
        None => return fail(ErrorCode::Date, path),
    };
    let date = match parse_date(text) {
        Some(d) => d,
        None => return fail(ErrorCode::Date, path),
    };
    if let Some(min) = s.min {
        if date < min {
            return fail(ErrorCode::DateRange, path);
        }
    }
    if let Some(max) = s.max {
        if date > max {
            return fail(ErrorCode::DateRange, path);
        }
    }
    Ok(())
}

fn validate_arr(s: &ArrSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let arr = match value.as_array() {
        Some(a) => a,
        None => return fail(ErrorCode::Arr, path),
    };
    let len = arr.len() as u64;
    if let Some(min) = s.min {
        if len < min {
            return fail(ErrorCode::ArrLen, path);
        }
    }
    if let Some(max) = s.max {
        if len > max {
            return fail(ErrorCode::ArrLen, path);
        }
    }
    for (i, item) in arr.iter().enumerate() {
        let mut p = path.to_vec();
        p.push(PathSegment::Index(i));
        validate_inner(&s.element, item, &p)?;
    }
    Ok(())
}

fn validate_set(s: &SetSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let arr = match value.as_array() {
        Some(a) => a,
        None => return fail(ErrorCode::Set, path),
    };
    let len = arr.len() as u64;
    if let Some(min) = s.min {
        if len < min {
            return fail(ErrorCode::SetLen, path);
        }
    }
    if let Some(max) = s.max {
        if len > max {
            return fail(ErrorCode::SetLen, path);
        }
    }
    for (i, item) in arr.iter().enumerate() {
        let mut p = path.to_vec();
        p.push(PathSegment::Index(i));
        validate_inner(&s.element, item, &p)?;
    }
    for i in 0..arr.len() {
        for j in (i + 1)..arr.len() {
            if json_equal(&arr[i], &arr[j]) {
                let mut p = path.to_vec();
                p.push(PathSegment::Index(j));
                return fail(ErrorCode::Dup, &p);
            }
        }
    }
    Ok(())
}

fn validate_obj(s: &ObjSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    let obj = match value.as_object() {
        Some(o) => o,
        None => return fail(ErrorCode::Obj, path),
    };
    // Keys outside the shape are ignored.
    for (key, key_schema) in &s.shape {
        match obj.get(key) {
            Some(v) => {
                let mut p = path.to_vec();
                p.push(PathSegment::Key(key.clone()));
                validate_inner(key_schema, v, &p)?;
            }
            None => {
                if !key_schema.is_optional() {
                    let mut p = path.to_vec();
                    p.push(PathSegment::Key(key.clone()));
                    return fail(ErrorCode::Key, &p);
                }
            }
        }
    }
    Ok(())
}

fn validate_union(s: &UnionSchema, value: &Value, path: &[PathSegment]) -> Result<(), ParseError> {
    // Try each option in order, first match wins.
    for option in &s.options {
        if validate_inner(option, value, path).is_ok() {
            return Ok(());
        }
    }
    fail(ErrorCode::Union, path)
}

/// Deep equality over JSON values, used for set-uniqueness checks.
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).map_or(false, |w| json_equal(v, w)))
        }
        _ => false,
    }
}
