use crate::value::WarningValue;

derive_non_empty_list_header! {
    #[header(name = WARNING)]
    /// `Warning` header, defined in [RFC7234](https://datatracker.ietf.org/doc/html/rfc7234#section-5.5)
    ///
    /// Obsoleted by RFC 9111, still found in the wild.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Warning = 1#warning-value
    /// ```
    ///
    /// # Example values
    /// * `110 cache.example.com "Response is stale"`
    /// * `112 - "cache down" "Wed, 21 Oct 2015 07:28:00 GMT"`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Warning(pub NonEmptyVec<WarningValue>);
}
