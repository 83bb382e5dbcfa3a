use http::{HeaderName, HeaderValue};

use std::error;
use std::fmt::{self, Display, Formatter};

/// A header field with a well-known name.
pub trait TypedHeader {
    /// The name of this header.
    fn name() -> &'static HeaderName;
}

/// A [`TypedHeader`] which can be decoded from its field lines.
pub trait HeaderDecode: TypedHeader {
    /// Decode this type from an iterator of [`HeaderValue`]s,
    /// one per field line, in order.
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>;
}

/// A [`TypedHeader`] which can be encoded into field lines.
pub trait HeaderEncode: TypedHeader {
    /// Encode this type to a [`HeaderValue`], and add it to a container
    /// which has [`HeaderValue`] type as each element.
    ///
    /// Values that cannot be represented as a [`HeaderValue`]
    /// are logged and skipped.
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E);

    /// Encode this header to a single [`HeaderValue`], if it produces any.
    fn encode_to_value(&self) -> Option<HeaderValue> {
        let mut container = ExtendOnce(None);
        self.encode(&mut container);
        container.0
    }
}

struct ExtendOnce(Option<HeaderValue>);

impl Extend<HeaderValue> for ExtendOnce {
    fn extend<T: IntoIterator<Item = HeaderValue>>(&mut self, iter: T) {
        self.0 = iter.into_iter().next();
    }
}

/// Errors trying to decode a header.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    Invalid,
}

impl Error {
    /// Create an 'invalid' Error.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            kind: Kind::Invalid,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            Kind::Invalid => f.write_str("invalid HTTP header"),
        }
    }
}

impl error::Error for Error {}
