//! Converters that repair the wire format into canonical values.
//!
//! Every function here is pure. Absent or empty inputs become `None`;
//! present but malformed inputs become a [`DecodeError`] naming the field.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, Utc};

use crate::error::DecodeError;
pub use crate::api_interfaces::Loose;

/// `1` is true. `0`, any other code, and a missing flag are all absent.
pub fn zero_one_to_bool(code: Option<u8>) -> Option<bool> {
    (code == Some(1)).then_some(true)
}

/// Parses a quoted number. An empty string is absent.
pub fn string_to_number<T>(field: &'static str, raw: &str) -> Result<Option<T>, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| DecodeError::field(field, raw, e))
}

pub fn loose_i64(field: &'static str, value: Option<Loose>) -> Result<Option<i64>, DecodeError> {
    match value {
        None => Ok(None),
        Some(Loose::Text(text)) => string_to_number(field, &text),
        Some(Loose::Number(number)) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::field(field, number.to_string(), "expected an integer")),
    }
}

pub fn loose_f64(field: &'static str, value: Option<Loose>) -> Result<Option<f64>, DecodeError> {
    match value {
        None => Ok(None),
        Some(Loose::Text(text)) => string_to_number(field, &text),
        Some(Loose::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| DecodeError::field(field, number.to_string(), "expected a number")),
    }
}

/// Text as-is, numbers in their JSON spelling. Empty text is absent.
pub fn loose_string(value: Option<Loose>) -> Option<String> {
    match value? {
        Loose::Text(text) if text.is_empty() => None,
        Loose::Text(text) => Some(text),
        Loose::Number(number) => Some(number.to_string()),
    }
}

/// A timestamp type with exactly one wire format.
pub trait WireTimestamp: Sized {
    const FORMAT: &'static str;

    fn parse_wire(raw: &str) -> ParseResult<Self>;
}

impl WireTimestamp for NaiveDate {
    const FORMAT: &'static str = "%Y-%m-%d";

    fn parse_wire(raw: &str) -> ParseResult<Self> {
        NaiveDate::parse_from_str(raw, Self::FORMAT)
    }
}

impl WireTimestamp for NaiveTime {
    const FORMAT: &'static str = "%H:%M:%S";

    fn parse_wire(raw: &str) -> ParseResult<Self> {
        NaiveTime::parse_from_str(raw, Self::FORMAT)
    }
}

impl WireTimestamp for NaiveDateTime {
    const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    fn parse_wire(raw: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(raw, Self::FORMAT)
    }
}

/// Parses `raw` with the single format of `T`. Strings of length 0 or 1 are absent.
pub fn parse_timestamp<T: WireTimestamp>(
    field: &'static str,
    raw: &str,
) -> Result<Option<T>, DecodeError> {
    if raw.chars().count() <= 1 {
        return Ok(None);
    }
    T::parse_wire(raw)
        .map(Some)
        .map_err(|e| DecodeError::field(field, raw, format!("expected `{}`: {e}", T::FORMAT)))
}

pub(crate) fn opt_timestamp<T: WireTimestamp>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, DecodeError> {
    parse_timestamp(field, raw.unwrap_or_default())
}

/// Unix seconds, as a number or a quoted number. Zero is absent.
pub fn unix_timestamp(
    field: &'static str,
    value: Option<Loose>,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match loose_i64(field, value)? {
        None | Some(0) => Ok(None),
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| DecodeError::field(field, secs.to_string(), "timestamp out of range")),
    }
}

/// Splits a comma-joined list, trimming each item and dropping empty ones.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A single-key JSON object wrapping one value.
pub trait Wrapper {
    type Inner;

    fn into_inner(self) -> Option<Self::Inner>;
}

/// Flattens wrapper entries in order, dropping those with no inner value.
pub fn unwrap_list<W: Wrapper>(entries: Vec<W>) -> Vec<W::Inner> {
    entries.into_iter().filter_map(Wrapper::into_inner).collect()
}

/// [`unwrap_list`] followed by converting each inner wire value.
pub(crate) fn convert_list<W, T>(entries: Option<Vec<W>>) -> Result<Vec<T>, DecodeError>
where
    W: Wrapper,
    T: TryFrom<W::Inner, Error = DecodeError>,
{
    convert_all(Some(unwrap_list(entries.unwrap_or_default())))
}

pub(crate) fn convert_all<W, T>(items: Option<Vec<W>>) -> Result<Vec<T>, DecodeError>
where
    T: TryFrom<W, Error = DecodeError>,
{
    items
        .unwrap_or_default()
        .into_iter()
        .map(T::try_from)
        .collect()
}

pub(crate) fn convert_opt<W, T>(item: Option<W>) -> Result<Option<T>, DecodeError>
where
    T: TryFrom<W, Error = DecodeError>,
{
    item.map(T::try_from).transpose()
}
