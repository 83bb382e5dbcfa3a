use http::HeaderValue;

use crate::Error;
use crate::util::{decode_single, encode_display};
use crate::value::{MediaRange, Parameters};

/// `Content-Type` header, defined in
/// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-8.3)
///
/// The `Content-Type` header field indicates the media type of the
/// associated representation: either the representation enclosed in the
/// message payload or the selected representation, as determined by the
/// message semantics.
///
/// Unlike in `Accept`, wildcards are not a valid media type here.
///
/// # ABNF
///
/// ```text
/// Content-Type = media-type
/// media-type   = type "/" subtype *( OWS ";" OWS parameter )
/// ```
///
/// # Example values
///
/// * `text/html; charset=utf-8`
/// * `application/json`
///
/// # Examples
///
/// ```
/// use hval_headers::{ContentType, HeaderMapExt};
///
/// let mut headers = http::HeaderMap::new();
/// headers.typed_insert(ContentType::text_utf8());
/// assert_eq!(headers["content-type"], "text/plain;charset=utf-8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentType(MediaRange);

impl ContentType {
    /// Create a `Content-Type` header for a media type.
    ///
    /// Returns `None` for a wildcard media range.
    #[must_use]
    pub fn new(media_type: MediaRange) -> Option<Self> {
        if media_type.is_wildcard() {
            None
        } else {
            Some(Self(media_type))
        }
    }

    /// A constructor to easily create a `Content-Type: application/json` header.
    #[must_use]
    pub fn json() -> Self {
        Self(MediaRange::APPLICATION_JSON)
    }

    /// A constructor to easily create a `Content-Type: text/plain` header.
    #[must_use]
    pub fn text() -> Self {
        Self(MediaRange::TEXT_PLAIN)
    }

    /// A constructor to easily create a `Content-Type: text/plain;charset=utf-8` header.
    #[must_use]
    pub fn text_utf8() -> Self {
        Self::text().with_charset("utf-8")
    }

    /// A constructor to easily create a `Content-Type: text/html` header.
    #[must_use]
    pub fn html() -> Self {
        Self(MediaRange::TEXT_HTML)
    }

    /// A constructor to easily create a `Content-Type: text/xml` header.
    #[must_use]
    pub fn xml() -> Self {
        Self(MediaRange::TEXT_XML)
    }

    /// A constructor to easily create a `Content-Type: application/x-www-form-urlencoded` header.
    #[must_use]
    pub fn form_url_encoded() -> Self {
        Self(MediaRange::APPLICATION_WWW_FORM_URLENCODED)
    }

    /// A constructor to easily create a `Content-Type: image/jpeg` header.
    #[must_use]
    pub fn jpeg() -> Self {
        Self(MediaRange::IMAGE_JPEG)
    }

    /// A constructor to easily create a `Content-Type: image/png` header.
    #[must_use]
    pub fn png() -> Self {
        Self(MediaRange::IMAGE_PNG)
    }

    /// A constructor to easily create a `Content-Type: application/octet-stream` header.
    #[must_use]
    pub fn octet_stream() -> Self {
        Self(MediaRange::APPLICATION_OCTET_STREAM)
    }

    /// Replace the parameters with a single `charset` parameter.
    #[must_use]
    pub fn with_charset(self, charset: &'static str) -> Self {
        let mut parameters = Parameters::new();
        match parameters.try_push("charset", charset) {
            Ok(()) => Self(self.0.with_parameters(parameters)),
            Err(err) => {
                tracing::debug!("ignore invalid charset {charset:?} for content type: {err}");
                self
            }
        }
    }

    /// The media type of this header.
    #[must_use]
    pub fn media_type(&self) -> &MediaRange {
        &self.0
    }

    /// The media type of this header.
    #[must_use]
    pub fn into_media_type(self) -> MediaRange {
        self.0
    }
}

impl crate::TypedHeader for ContentType {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::CONTENT_TYPE
    }
}

impl crate::HeaderDecode for ContentType {
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let media_type: MediaRange = decode_single(values)?;
        Self::new(media_type).ok_or_else(|| {
            tracing::debug!("wildcard media range is not a valid content type");
            Error::invalid()
        })
    }
}

impl crate::HeaderEncode for ContentType {
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(encode_display(&self.0));
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_decode_content_type() {
        let ct: ContentType = test_decode(&["Text/HTML; Charset=\"UTF-8\""]).unwrap();
        assert_eq!(ct.media_type().type_(), "text");
        assert_eq!(ct.media_type().subtype(), "html");
        assert_eq!(ct.media_type().charset(), Some("UTF-8"));
    }

    #[test]
    fn test_reject_wildcards() {
        assert_eq!(test_decode::<ContentType>(&["*/*"]), None);
        assert_eq!(test_decode::<ContentType>(&["text/*"]), None);
        assert_eq!(ContentType::new(MediaRange::IMAGE_STAR), None);
        assert!(ContentType::new(MediaRange::IMAGE_PNG).is_some());
    }

    #[test]
    fn test_singleton() {
        assert_eq!(
            test_decode::<ContentType>(&["text/html", "application/json"]),
            None
        );
    }

    #[test]
    fn test_encode_content_type() {
        assert_eq!(test_encode(ContentType::json())["content-type"], "application/json");
        assert_eq!(ContentType::text_utf8().to_string(), "text/plain;charset=utf-8");
    }
}
