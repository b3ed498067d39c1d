//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Date format: "20220313"
const DATE: &str = "%Y%m%d";

/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Time format for RFC 1123 as used by the HTTP `Date` header: "Sun, 13 Mar 2022 07:20:04 GMT"
const RFC1123: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// RFC 1123 without the leading weekday: "13 Mar 2022 07:20:04 GMT"
const RFC1123_NO_WEEKDAY: &str = "%d %b %Y %H:%M:%S GMT";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Create date time with current time.
#[inline]
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format(DATE).to_string()
}

/// Format time into ISO8601 basic: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Format time into RFC1123: `Sun, 13 Mar 2022 07:20:04 GMT`
pub fn format_http_date(t: DateTime) -> String {
    t.format(RFC1123).to_string()
}

/// Parse an RFC1123 HTTP date like `Thu, 28 Nov 2013 15:04:05 GMT`.
///
/// The weekday must be a valid day name, but it is not checked against the date.
pub fn parse_rfc1123(s: &str) -> crate::Result<DateTime> {
    let rest = s
        .split_once(", ")
        .filter(|(weekday, _)| WEEKDAYS.iter().any(|v| v.eq_ignore_ascii_case(weekday)))
        .map(|(_, rest)| rest)
        .ok_or_else(|| {
            Error::date_invalid(format!(
                "parse '{s}' as rfc1123 date failed: invalid weekday"
            ))
        })?;

    NaiveDateTime::parse_from_str(rest, RFC1123_NO_WEEKDAY)
        .map(|t| t.and_utc())
        .map_err(|e| {
            Error::date_invalid(format!("parse '{s}' as rfc1123 date failed")).with_source(e)
        })
}

/// Parse an ISO8601 basic timestamp like `20131128T150405Z`.
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|t| t.and_utc())
        .map_err(|e| {
            Error::date_invalid(format!("parse '{s}' as iso8601 date failed")).with_source(e)
        })
}
