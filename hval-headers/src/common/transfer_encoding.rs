use crate::value::TransferCoding;

derive_non_empty_list_header! {
    #[header(name = TRANSFER_ENCODING)]
    /// `Transfer-Encoding` header, defined in
    /// [RFC9112](https://www.rfc-editor.org/rfc/rfc9112#section-6.1)
    ///
    /// The `Transfer-Encoding` header field lists the transfer coding names
    /// corresponding to the sequence of transfer codings that have been (or
    /// will be) applied to the payload body in order to form the message
    /// body.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Transfer-Encoding = #transfer-coding
    /// ```
    ///
    /// # Example values
    /// * `chunked`
    /// * `gzip, chunked`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TransferEncoding(pub NonEmptyVec<TransferCoding>);
}

impl TransferEncoding {
    /// Constructor for the most common Transfer-Encoding, `chunked`.
    #[must_use]
    pub fn chunked() -> Self {
        Self::new(TransferCoding::CHUNKED)
    }

    /// Returns whether this ends with the `chunked` encoding.
    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.0.last().is_chunked()
    }
}
