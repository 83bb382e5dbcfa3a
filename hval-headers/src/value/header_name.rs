use hval_parse::{Cursor, Parser, ParserExt, token};
use hval_utils::collections::Interner;
use hval_utils::macros::error::static_str_error;
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

use crate::util::is_token;

static_str_error! {
    /// The header name is not a token.
    pub struct InvalidHeaderName = "invalid header name";
}

/// A header field name, stored in its canonical lowercase form.
///
/// Used where header names appear inside header values,
/// e.g. in `Vary`, `Connection` or the `no-cache="..."` directive.
///
/// ```
/// use hval_headers::value::HeaderName;
///
/// let a: HeaderName = "Accept".parse().unwrap();
/// let b: HeaderName = "accept".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "accept");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderName(SmolStr);

impl HeaderName {
    /// Create a header name, lowercasing it.
    pub fn try_new(name: &str) -> Result<Self, InvalidHeaderName> {
        if is_token(name) {
            Ok(Self(ascii_lowercase_smolstr(name)))
        } else {
            Err(InvalidHeaderName)
        }
    }

    /// The lowercase header name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical shared instance of this header name.
    pub fn intern(self, interner: &Interner<Self>) -> Arc<Self> {
        interner.intern_arc(Arc::new(self))
    }
}

impl crate::Grammar for HeaderName {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        token.map(|name| Self(ascii_lowercase_smolstr(name))).parse(cursor)
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl_str_codec!(HeaderName);

#[cfg(feature = "http")]
impl From<&::http::HeaderName> for HeaderName {
    fn from(name: &::http::HeaderName) -> Self {
        // http keeps header names lowercase already
        Self(SmolStr::new(name.as_str()))
    }
}

#[cfg(feature = "http")]
impl TryFrom<&HeaderName> for ::http::HeaderName {
    type Error = ::http::header::InvalidHeaderName;

    fn try_from(name: &HeaderName) -> Result<Self, Self::Error> {
        Self::from_bytes(name.as_str().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_case() {
        let name: HeaderName = "X-Request-ID".parse().unwrap();
        assert_eq!(name.to_string(), "x-request-id");
        assert_eq!(name, HeaderName::try_new("x-request-id").unwrap());
        assert_eq!(HeaderName::try_new("bad name"), Err(InvalidHeaderName));
        assert!("".parse::<HeaderName>().is_err());
    }

    #[test]
    fn test_intern_header_name() {
        let interner = Interner::new();
        let a = "Accept".parse::<HeaderName>().unwrap().intern(&interner);
        let b = "accept".parse::<HeaderName>().unwrap().intern(&interner);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(interner.len(), 1);
        assert!(interner.contains(&HeaderName::try_new("ACCEPT").unwrap()));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_header_name_conversion() {
        let name = HeaderName::from(&::http::header::CONTENT_TYPE);
        assert_eq!(name.as_str(), "content-type");
        let back = ::http::HeaderName::try_from(&name).unwrap();
        assert_eq!(back, ::http::header::CONTENT_TYPE);
    }
}
