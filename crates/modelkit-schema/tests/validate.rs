//! Integration tests for schema construction, refinement, and validation.

use indexmap::IndexMap;
use modelkit_schema::{ErrorCode, ParseError, PathSegment, Schema, SchemaError};
use serde_json::{json, Value};

fn code(schema: &Schema, value: Value) -> ErrorCode {
    schema.validate(&value).unwrap_err().code
}

// ── Primitives ───────────────────────────────────────────────────────────────

#[test]
fn any_accepts_all_kinds() {
    let schema = Schema::any();
    assert!(schema.is_valid(&json!(null)));
    assert!(schema.is_valid(&json!(true)));
    assert!(schema.is_valid(&json!({"a": [1, "b"]})));
}

#[test]
fn boolean_rejects_non_booleans() {
    let schema = Schema::boolean();
    assert!(schema.is_valid(&json!(false)));
    assert_eq!(code(&schema, json!("true")), ErrorCode::Bool);
}

#[test]
fn number_bounds_are_inclusive() {
    let schema = Schema::number()
        .min(&json!(0))
        .unwrap()
        .max(&json!(100))
        .unwrap();
    assert!(schema.is_valid(&json!(0)));
    assert!(schema.is_valid(&json!(100)));
    assert_eq!(code(&schema, json!(-1)), ErrorCode::Gte);
    assert_eq!(code(&schema, json!(101)), ErrorCode::Lte);
}

#[test]
fn number_step() {
    let schema = Schema::number().multiple_of(&json!(5)).unwrap();
    assert!(schema.is_valid(&json!(0)));
    assert!(schema.is_valid(&json!(95)));
    assert_eq!(code(&schema, json!(7)), ErrorCode::Step);
}

#[test]
fn number_step_handles_decimal_steps() {
    let schema = Schema::number().multiple_of(&json!(0.1)).unwrap();
    assert!(schema.is_valid(&json!(0.3)));
    assert_eq!(code(&schema, json!(0.35)), ErrorCode::Step);
}

#[test]
fn bigint_requires_integer_values() {
    let schema = Schema::bigint();
    assert!(schema.is_valid(&json!(5)));
    assert!(schema.is_valid(&json!(-3)));
    assert_eq!(code(&schema, json!(1.5)), ErrorCode::BigInt);
    assert_eq!(code(&schema, json!("5")), ErrorCode::BigInt);
}

#[test]
fn string_length_counts_chars() {
    let schema = Schema::string()
        .min(&json!(5))
        .unwrap()
        .max(&json!(5))
        .unwrap();
    assert!(schema.is_valid(&json!("héllo")));
    assert_eq!(code(&schema, json!("hi")), ErrorCode::StrLen);
}

#[test]
fn string_patterns_accumulate() {
    let schema = Schema::string()
        .regex("[a-z]")
        .unwrap()
        .regex(r"\d")
        .unwrap();
    assert!(schema.is_valid(&json!("a1")));
    assert_eq!(code(&schema, json!("abc")), ErrorCode::Pattern);
    assert_eq!(code(&schema, json!("123")), ErrorCode::Pattern);
}

// ── Dates ────────────────────────────────────────────────────────────────────

#[test]
fn date_accepts_rfc3339_and_calendar_forms() {
    let schema = Schema::date();
    assert!(schema.is_valid(&json!("2024-03-01T12:30:00Z")));
    assert!(schema.is_valid(&json!("2024-03-01")));
    assert_eq!(code(&schema, json!("next tuesday")), ErrorCode::Date);
    assert_eq!(code(&schema, json!(1709290200)), ErrorCode::Date);
}

#[test]
fn date_bounds_compare_instants() {
    let schema = Schema::date()
        .min(&json!("2024-01-01"))
        .unwrap()
        .max(&json!("2024-12-31"))
        .unwrap();
    assert!(schema.is_valid(&json!("2024-06-15")));
    assert_eq!(code(&schema, json!("2023-12-31")), ErrorCode::DateRange);
    assert_eq!(
        code(&schema, json!("2025-01-01T00:00:00Z")),
        ErrorCode::DateRange
    );
}

// ── Collections ──────────────────────────────────────────────────────────────

#[test]
fn array_validates_each_element() {
    let schema = Schema::array(Schema::string());
    assert!(schema.is_valid(&json!(["a", "b"])));
    let err = schema.validate(&json!(["a", 1])).unwrap_err();
    assert_eq!(err.code, ErrorCode::Str);
    assert_eq!(err.path, vec![PathSegment::Index(1)]);
}

#[test]
fn array_length_bounds() {
    let schema = Schema::array(Schema::number())
        .min(&json!(1))
        .unwrap()
        .max(&json!(2))
        .unwrap();
    assert!(schema.is_valid(&json!([1])));
    assert_eq!(code(&schema, json!([])), ErrorCode::ArrLen);
    assert_eq!(code(&schema, json!([1, 2, 3])), ErrorCode::ArrLen);
}

#[test]
fn set_rejects_duplicates_by_deep_equality() {
    let schema = Schema::set(Schema::any());
    assert!(schema.is_valid(&json!([1, 2, 3])));
    let err = schema.validate(&json!([1, 2, 2])).unwrap_err();
    assert_eq!(err.code, ErrorCode::Dup);
    assert_eq!(err.path, vec![PathSegment::Index(2)]);
    assert_eq!(
        code(&schema, json!([{"a": 1}, {"a": 1}])),
        ErrorCode::Dup
    );
}

#[test]
fn set_still_validates_elements() {
    let schema = Schema::set(Schema::number());
    assert_eq!(code(&schema, json!([1, "x"])), ErrorCode::Num);
    assert_eq!(code(&schema, json!("nope")), ErrorCode::Set);
}

#[test]
fn element_accessor_works_for_both_collections() {
    assert_eq!(
        Schema::array(Schema::string()).element().unwrap().kind(),
        "str"
    );
    assert_eq!(
        Schema::set(Schema::number()).element().unwrap().kind(),
        "num"
    );
}

// ── Objects ──────────────────────────────────────────────────────────────────

fn person() -> Schema {
    let mut shape = IndexMap::new();
    shape.insert("name".to_string(), Schema::string());
    shape.insert("nick".to_string(), Schema::string().optional());
    Schema::object(shape)
}

#[test]
fn object_requires_non_optional_keys() {
    let schema = person();
    assert!(schema.is_valid(&json!({"name": "ada"})));
    let err = schema.validate(&json!({})).unwrap_err();
    assert_eq!(err.code, ErrorCode::Key);
    assert_eq!(err.path, vec![PathSegment::Key("name".to_string())]);
}

#[test]
fn object_ignores_unknown_keys() {
    assert!(person().is_valid(&json!({"name": "ada", "extra": 42})));
}

#[test]
fn optional_keys_may_be_absent_or_null() {
    let schema = person();
    assert!(schema.is_valid(&json!({"name": "ada"})));
    assert!(schema.is_valid(&json!({"name": "ada", "nick": null})));
    assert!(schema.is_valid(&json!({"name": "ada", "nick": "al"})));
    let err = schema
        .validate(&json!({"name": "ada", "nick": 5}))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Str);
    assert_eq!(err.path, vec![PathSegment::Key("nick".to_string())]);
}

#[test]
fn object_rejects_non_objects() {
    assert_eq!(code(&person(), json!([1, 2])), ErrorCode::Obj);
}

// ── Unions and optionals ─────────────────────────────────────────────────────

#[test]
fn union_tries_options_in_order() {
    let schema = Schema::string().or(Schema::number());
    assert!(schema.is_valid(&json!("x")));
    assert!(schema.is_valid(&json!(5)));
    assert_eq!(code(&schema, json!(true)), ErrorCode::Union);
    let options = schema.options().unwrap();
    assert_eq!(options[0].kind(), "str");
    assert_eq!(options[1].kind(), "num");
}

#[test]
fn or_folds_into_a_flat_option_list() {
    let schema = Schema::string().or(Schema::number()).or(Schema::boolean());
    assert_eq!(schema.options().unwrap().len(), 3);
}

#[test]
fn empty_union_matches_nothing() {
    let schema = Schema::union(Vec::new());
    assert_eq!(code(&schema, json!(1)), ErrorCode::Union);
}

#[test]
fn optional_accepts_null_standalone() {
    let schema = Schema::string().optional();
    assert!(schema.is_valid(&json!(null)));
    assert!(schema.is_valid(&json!("x")));
    assert_eq!(code(&schema, json!(5)), ErrorCode::Str);
}

#[test]
fn optional_is_idempotent() {
    let schema = Schema::string().optional().optional();
    assert_eq!(schema.kind(), "optional");
    assert!(!matches!(
        schema,
        Schema::Optional(ref s) if s.inner.is_optional()
    ));
}

// ── Descriptions ─────────────────────────────────────────────────────────────

#[test]
fn describe_sets_description_on_the_outermost_node() {
    let schema = Schema::string().optional().describe("a name");
    assert_eq!(schema.description(), Some("a name"));
    if let Schema::Optional(s) = &schema {
        assert_eq!(s.inner.description(), None);
    } else {
        panic!("expected optional");
    }
}

// ── Refinement errors ────────────────────────────────────────────────────────

#[test]
fn min_is_unsupported_on_booleans() {
    let err = Schema::boolean().min(&json!(1)).unwrap_err();
    assert_eq!(
        err,
        SchemaError::Unsupported {
            refinement: "min",
            schema: "bool",
        }
    );
}

#[test]
fn bad_regex_is_an_invalid_param() {
    let err = Schema::string().regex("[").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidParam {
            refinement: "regex",
            ..
        }
    ));
}

#[test]
fn zero_step_is_an_invalid_param() {
    let err = Schema::number().multiple_of(&json!(0)).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidParam {
            refinement: "multiple_of",
            ..
        }
    ));
}

#[test]
fn negative_length_bound_is_an_invalid_param() {
    let err = Schema::string().min(&json!(-1)).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidParam { .. }));
}

// ── Error formatting ─────────────────────────────────────────────────────────

#[test]
fn parse_error_display_includes_the_path() {
    let err = ParseError {
        code: ErrorCode::Key,
        path: vec![
            PathSegment::Key("address".to_string()),
            PathSegment::Key("street".to_string()),
        ],
    };
    assert_eq!(err.to_string(), "missing required key at /address/street");
    assert_eq!(ErrorCode::StrLen.name(), "STR_LEN");
}
