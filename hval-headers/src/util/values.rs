use std::borrow::Cow;
use std::fmt::Display;

use http::HeaderValue;
use hval_error::{ErrorContext as _, OpaqueError};
use hval_parse::{http_list, parse_with};
use hval_utils::collections::NonEmptyVec;

use crate::{Error, Grammar};

/// Read a field line as text, one code point per octet.
///
/// Octets `0x80` and up are `obs-text` and map to U+0080 to U+00FF,
/// the same code points the character classes of the grammar use.
fn value_as_str(value: &HeaderValue) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    match std::str::from_utf8(bytes) {
        Ok(s) if s.is_ascii() => Cow::Borrowed(s),
        _ => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}

/// Write text back as octets, the inverse of [`value_as_str`].
///
/// Fails for code points above U+00FF, which have no octet.
fn str_as_value(s: &str) -> Result<HeaderValue, OpaqueError> {
    if s.is_ascii() {
        return HeaderValue::from_str(s).context("encode header value");
    }
    let bytes = s
        .chars()
        .map(u8::try_from)
        .collect::<Result<Vec<u8>, _>>()
        .context("header value has a code point above U+00FF")?;
    HeaderValue::from_bytes(&bytes).context("encode header value")
}

/// Decode all field lines as a single `1#element` list.
pub(crate) fn try_decode_list<'i, T, I>(values: &mut I) -> Result<NonEmptyVec<T>, OpaqueError>
where
    T: Grammar,
    I: Iterator<Item = &'i HeaderValue>,
{
    let mut combined: Option<NonEmptyVec<T>> = None;
    for value in values {
        let s = value_as_str(value);
        let elements =
            parse_with(&s, http_list(T::parse_from)).context("parse header field line as list")?;
        match combined.as_mut() {
            Some(combined) => combined.extend(elements),
            None => combined = Some(elements),
        }
    }
    combined.context("no header field lines")
}

/// Decode exactly one field line as a single value.
pub(crate) fn try_decode_single<'i, T, I>(values: &mut I) -> Result<T, OpaqueError>
where
    T: Grammar,
    I: Iterator<Item = &'i HeaderValue>,
{
    let value = values.next().context("no header field lines")?;
    if values.next().is_some() {
        return Err(OpaqueError::from_display(
            "more than one field line for a singleton header",
        ));
    }
    let s = value_as_str(value);
    parse_with(&s, T::parse_from).context("parse header field line")
}

pub(crate) fn decode_list<'i, T, I>(values: &mut I) -> Result<NonEmptyVec<T>, Error>
where
    T: Grammar,
    I: Iterator<Item = &'i HeaderValue>,
{
    try_decode_list(values).map_err(|err| {
        tracing::debug!("failed to decode header value(s) as list typed header: {err}");
        Error::invalid()
    })
}

pub(crate) fn decode_single<'i, T, I>(values: &mut I) -> Result<T, Error>
where
    T: Grammar,
    I: Iterator<Item = &'i HeaderValue>,
{
    try_decode_single(values).map_err(|err| {
        tracing::debug!("failed to decode header value as typed header: {err}");
        Error::invalid()
    })
}

/// Encode a value through its `Display` implementation.
pub(crate) fn encode_display<T: Display + ?Sized>(value: &T) -> Option<HeaderValue> {
    match str_as_value(&value.to_string()) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("failed to encode typed header as header value: {err}");
            None
        }
    }
}
