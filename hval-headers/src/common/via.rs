use crate::value::ViaElement;

derive_non_empty_list_header! {
    #[header(name = VIA)]
    /// `Via` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-7.6.3)
    ///
    /// The `Via` header field indicates the presence of intermediate
    /// protocols and recipients between the user agent and the server on
    /// requests, and between the origin server and the client on responses.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Via = #( received-protocol RWS received-by [ RWS comment ] )
    /// ```
    ///
    /// # Example values
    /// * `1.0 fred, 1.1 p.example.net`
    /// * `HTTP/1.1 proxy.example.com:8080 (squid)`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Via(pub NonEmptyVec<ViaElement>);
}

impl Via {
    /// Append a hop.
    #[must_use]
    pub fn with(mut self, hop: ViaElement) -> Self {
        self.0.push(hop);
        self
    }
}
