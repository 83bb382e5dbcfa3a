use http::HeaderValue;

use super::ETag;
use crate::Error;
use crate::util::{decode_list, decode_single};
use crate::value::{EntityTag, EntityTagMatch};

/// `If-Match` header, defined in
/// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-13.1.1)
///
/// The `If-Match` header field makes the request method conditional on
/// the recipient origin server either having at least one current
/// representation of the target resource, when the field-value is "*",
/// or having a current representation of the target resource that has an
/// entity-tag matching a member of the list of entity-tags provided in
/// the field-value.
///
/// An origin server MUST use the strong comparison function when
/// comparing entity-tags for `If-Match`, since the client
/// intends this precondition to prevent the method from being applied if
/// there have been any changes to the representation data.
///
/// # ABNF
///
/// ```text
/// If-Match = "*" / 1#entity-tag
/// ```
///
/// # Example values
///
/// * `"xyzzy"`
/// * "xyzzy", "r2d2xxxx", "c3piozzzz"
///
/// # Examples
///
/// ```
/// use hval_headers::IfMatch;
///
/// let if_match = IfMatch::any();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfMatch(pub EntityTagMatch);

/// `*` is only valid as the sole field line; several lines
/// combine into a single list of entity tags.
pub(super) fn decode_entity_tag_match<'i, I>(values: &mut I) -> Result<EntityTagMatch, Error>
where
    I: Iterator<Item = &'i HeaderValue>,
{
    let lines: Vec<&HeaderValue> = values.collect();
    if lines.len() == 1 {
        decode_single(&mut lines.into_iter())
    } else {
        decode_list::<EntityTag, _>(&mut lines.into_iter()).map(EntityTagMatch::Tags)
    }
}

impl crate::TypedHeader for IfMatch {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::IF_MATCH
    }
}

impl crate::HeaderDecode for IfMatch {
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        decode_entity_tag_match(values).map(Self)
    }
}

impl crate::HeaderEncode for IfMatch {
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(crate::util::encode_display(&self.0));
    }
}

impl IfMatch {
    /// Create a new `If-Match: *` header.
    #[must_use]
    pub fn any() -> Self {
        Self(EntityTagMatch::Any)
    }

    /// Returns whether this is `If-Match: *`, matching any entity tag.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self.0, EntityTagMatch::Any)
    }

    /// Checks whether the `ETag` strongly matches.
    #[must_use]
    pub fn precondition_passes(&self, etag: &ETag) -> bool {
        self.0.matches_strong(&etag.0)
    }
}

impl From<ETag> for IfMatch {
    fn from(etag: ETag) -> Self {
        Self(EntityTagMatch::Tags(hval_utils::collections::NonEmptyVec::new(etag.0)))
    }
}
