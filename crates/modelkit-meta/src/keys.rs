//! Constraint-kind identifiers used in attribute metadata records.

pub const TYPE: &str = "type";
pub const REQUIRED: &str = "required";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const MIN_LENGTH: &str = "minlength";
pub const MAX_LENGTH: &str = "maxlength";
pub const STEP: &str = "step";
pub const PATTERN: &str = "pattern";
pub const URL: &str = "url";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const DATE: &str = "date";
pub const LIST: &str = "list";
