use crate::value::{EntityTag, InvalidEntityTag};

derive_value_header! {
    #[header(name = ETAG)]
    /// `ETag` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-8.8.3)
    ///
    /// The `ETag` header field in a response provides the current entity-tag
    /// for the selected representation, as determined at the conclusion of
    /// handling the request.  An entity-tag is an opaque validator for
    /// differentiating between multiple representations of the same
    /// resource, regardless of whether those multiple representations are
    /// due to resource state changes over time, content negotiation
    /// resulting in multiple representations being valid at the same time,
    /// or both.
    ///
    /// # ABNF
    ///
    /// ```text
    /// ETag       = entity-tag
    /// ```
    ///
    /// # Example values
    ///
    /// * `"xyzzy"`
    /// * `W/"xyzzy"`
    /// * `""`
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ETag(pub EntityTag);
}

impl ETag {
    /// Create a strong `ETag` for the given opaque tag.
    pub fn strong(tag: &str) -> Result<Self, InvalidEntityTag> {
        EntityTag::strong(tag).map(Self)
    }

    /// Create a weak `ETag` for the given opaque tag.
    pub fn weak(tag: &str) -> Result<Self, InvalidEntityTag> {
        EntityTag::weak(tag).map(Self)
    }
}
