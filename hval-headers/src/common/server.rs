use crate::value::ProductList;

derive_value_header! {
    #[header(name = SERVER)]
    /// `Server` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-10.2.4)
    ///
    /// The `Server` header field contains information about the software
    /// used by the origin server to handle the request.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Server = product *( RWS ( product / comment ) )
    /// ```
    ///
    /// # Example values
    ///
    /// * `CERN/3.0 libwww/2.17`
    /// * `Apache/2.4.1 (Unix)`
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Server(pub ProductList);
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn test_server() {
        let server: Server = test_decode(&["Apache/2.4.1 (Unix)"]).unwrap();
        assert_eq!(server.0.product().version(), Some("2.4.1"));
        assert_eq!(
            server.0.comments().map(|c| c.text()).collect::<Vec<_>>(),
            ["Unix"]
        );
    }
}
