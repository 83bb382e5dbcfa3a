use http::HeaderValue;

use super::ETag;
use super::if_match::decode_entity_tag_match;
use crate::Error;
use crate::value::EntityTagMatch;

/// `If-None-Match` header, defined in
/// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-13.1.2)
///
/// The `If-None-Match` header field makes the request method conditional
/// on a recipient cache or origin server either not having any current
/// representation of the target resource, when the field-value is "*",
/// or having a selected representation with an entity-tag that does not
/// match any of those listed in the field-value.
///
/// A recipient MUST use the weak comparison function when comparing
/// entity-tags for If-None-Match, since weak entity-tags can be used for
/// cache validation even if there have been changes to the representation
/// data.
///
/// # ABNF
///
/// ```text
/// If-None-Match = "*" / 1#entity-tag
/// ```
///
/// # Example values
///
/// * `"xyzzy"`
/// * `W/"xyzzy"`
/// * `"xyzzy", "r2d2xxxx", "c3piozzzz"`
/// * `W/"xyzzy", W/"r2d2xxxx", W/"c3piozzzz"`
/// * `*`
///
/// # Examples
///
/// ```
/// use hval_headers::IfNoneMatch;
///
/// let if_none_match = IfNoneMatch::any();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfNoneMatch(pub EntityTagMatch);

impl crate::TypedHeader for IfNoneMatch {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::IF_NONE_MATCH
    }
}

impl crate::HeaderDecode for IfNoneMatch {
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        decode_entity_tag_match(values).map(Self)
    }
}

impl crate::HeaderEncode for IfNoneMatch {
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(crate::util::encode_display(&self.0));
    }
}

impl IfNoneMatch {
    /// Create a new `If-None-Match: *` header.
    #[must_use]
    pub fn any() -> Self {
        Self(EntityTagMatch::Any)
    }

    /// Checks whether the `ETag` passes this precondition,
    /// i.e. it does not weakly match any of the listed tags.
    #[must_use]
    pub fn precondition_passes(&self, etag: &ETag) -> bool {
        !self.0.matches_weak(&etag.0)
    }
}

impl From<ETag> for IfNoneMatch {
    fn from(etag: ETag) -> Self {
        Self(EntityTagMatch::Tags(hval_utils::collections::NonEmptyVec::new(etag.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_if_none_match() {
        let foo = ETag("\"foo\"".parse().unwrap());
        let weak_foo = ETag("W/\"foo\"".parse().unwrap());
        let bar = ETag("\"bar\"".parse().unwrap());

        let if_none_match = IfNoneMatch::from(foo);
        assert!(!if_none_match.precondition_passes(&weak_foo));
        assert!(if_none_match.precondition_passes(&bar));

        assert!(!IfNoneMatch::any().precondition_passes(&bar));
    }

    #[test]
    fn test_roundtrip() {
        let header: IfNoneMatch = test_decode(&[r#"W/"xyzzy", W/"r2d2xxxx""#]).unwrap();
        assert_eq!(
            test_encode(header)["if-none-match"],
            r#"W/"xyzzy", W/"r2d2xxxx""#
        );
        assert_eq!(test_encode(IfNoneMatch::any())["if-none-match"], "*");
    }
}
