use crate::negotiation::Preference;
use crate::value::Language;

derive_non_empty_list_header! {
    #[header(name = ACCEPT_LANGUAGE)]
    /// `Accept-Language` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-12.5.4)
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Language = #( language-range [ weight ] )
    /// language-range  = ( 1*8ALPHA *( "-" 1*8alphanum ) ) / "*"
    /// ```
    ///
    /// # Example values
    /// * `da, en-gb;q=0.8, en;q=0.7`
    /// * `en-us;q=1.0, en;q=0.5, fr`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptLanguage(pub NonEmptyVec<Preference<Language>>);
}

impl_negotiate!(AcceptLanguage, Language);
