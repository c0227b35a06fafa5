//! Date string parsing shared by refinements and validation.

use std::sync::OnceLock;

use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::{Date, OffsetDateTime};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` calendar date.
///
/// Calendar dates are anchored at midnight UTC so that value bounds can
/// compare timestamps and plain dates uniformly.
pub fn parse_date(s: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt);
    }
    let format =
        FORMAT.get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap());
    Date::parse(s, format).ok().map(|d| d.midnight().assume_utc())
}
