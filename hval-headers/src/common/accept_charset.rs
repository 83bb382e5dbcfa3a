use crate::negotiation::Preference;
use crate::value::Charset;

derive_non_empty_list_header! {
    #[header(name = ACCEPT_CHARSET)]
    /// `Accept-Charset` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-12.5.2)
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Charset = #( ( token / "*" ) [ weight ] )
    /// ```
    ///
    /// # Example values
    /// * `iso-8859-5, unicode-1-1;q=0.8`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptCharset(pub NonEmptyVec<Preference<Charset>>);
}

impl_negotiate!(AcceptCharset, Charset);
