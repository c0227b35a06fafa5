//! modelkit-schema - immutable validation schema values over `serde_json`.
//!
//! Schema values are built from constructors ([`Schema::string`],
//! [`Schema::array`], ...), shaped with combinators ([`Schema::or`],
//! [`Schema::optional`], [`Schema::describe`]), narrowed with refinements
//! ([`Schema::min`], [`Schema::regex`], ...), and checked at runtime with
//! [`Schema::validate`].

mod date;
pub mod factory;
pub mod schema;
pub mod validate;

pub use factory::FactoryError;
pub use schema::{Schema, SchemaBase, SchemaError};
pub use validate::{json_equal, ErrorCode, ParseError, PathSegment};
