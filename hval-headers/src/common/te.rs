use crate::negotiation::Preference;
use crate::value::TransferCoding;

derive_non_empty_list_header! {
    #[header(name = TE)]
    /// `TE` header, defined in
    /// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-10.1.4)
    ///
    /// The "TE" header field in a request indicates what transfer codings,
    /// besides chunked, the client is willing to accept in response, and
    /// whether or not the client is willing to accept trailer fields in a
    /// chunked transfer coding.
    ///
    /// # ABNF
    ///
    /// ```text
    /// TE        = #t-codings
    /// t-codings = "trailers" / ( transfer-coding [ weight ] )
    /// ```
    ///
    /// # Example values
    /// * `trailers`
    /// * `trailers, deflate;q=0.5`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Te(pub NonEmptyVec<Preference<TransferCoding>>);
}

impl_negotiate!(Te, TransferCoding);

impl Te {
    /// Create a `TE: trailers` header.
    #[must_use]
    pub fn trailers() -> Self {
        Self::new(Preference::new(TransferCoding::TRAILERS))
    }

    /// Returns true if the client accepts trailer fields.
    #[must_use]
    pub fn accepts_trailers(&self) -> bool {
        self.iter()
            .any(|p| p.value() == &TransferCoding::TRAILERS && p.quality().as_u16() > 0)
    }
}
