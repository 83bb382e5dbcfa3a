use crate::value::ProductList;

derive_value_header! {
    #[header(name = USER_AGENT)]
    /// `User-Agent` header, defined in
    /// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-10.1.5)
    ///
    /// The `User-Agent` header field contains information about the user
    /// agent originating the request, which is often used by servers to help
    /// identify the scope of reported interoperability problems, to work
    /// around or tailor responses to avoid particular user agent
    /// limitations, and for analytics regarding browser or operating system
    /// use.
    ///
    /// # ABNF
    ///
    /// ```text
    /// User-Agent = product *( RWS ( product / comment ) )
    /// product         = token ["/" product-version]
    /// product-version = token
    /// ```
    ///
    /// # Example values
    ///
    /// * `CERN-LineMode/2.15 libwww/2.17b3`
    /// * `Bunnies`
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UserAgent(pub ProductList);
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_user_agent() {
        let ua: UserAgent = test_decode(&["CERN-LineMode/2.15 libwww/2.17b3"]).unwrap();
        assert_eq!(ua.0.product().name(), "CERN-LineMode");
        assert_eq!(ua.0.products().count(), 2);
        assert_eq!(
            test_encode(ua)["user-agent"],
            "CERN-LineMode/2.15 libwww/2.17b3"
        );
        assert_eq!(test_decode::<UserAgent>(&["(no product)"]), None);
    }
}
