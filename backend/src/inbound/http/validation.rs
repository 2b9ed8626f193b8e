//! Validation helpers for inbound HTTP requests.
//!
//! Each helper returns an `invalid_request` [`Error`] whose `details` name the
//! offending field, the rejected value and a machine-readable code.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::json;

use crate::domain::{Error, UserId};

/// Detail codes attached to validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUserId,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUserId => "invalid_user_id",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Name of a request field as clients spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn invalid_value(field: FieldName, message: String, code: ErrorCode, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_user_id_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    invalid_value(
        field,
        format!("{name} must be an integer"),
        ErrorCode::InvalidUserId,
        value,
    )
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    invalid_value(
        field,
        format!("{name} must be a date (YYYY-MM-DD), an RFC 3339 date-time or epoch milliseconds"),
        ErrorCode::InvalidDate,
        value,
    )
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .parse::<UserId>()
        .map_err(|_| invalid_user_id_error(field, value))
}

/// Accepts `YYYY-MM-DD` or a date-time, keeping only the calendar date as
/// written (no offset conversion).
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .or_else(|_| {
            DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z").map(|dt| dt.date_naive())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .map_err(|_| invalid_date_error(field, value))
}

/// UTC calendar date of a millisecond Unix timestamp.
pub(crate) fn date_from_epoch_millis(millis: i64, field: FieldName) -> Result<NaiveDate, Error> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| invalid_date_error(field, &millis.to_string()))
}

/// Absent and blank dates both mean "not provided".
pub(crate) fn parse_optional_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_date(raw, field))
        .transpose()
}
