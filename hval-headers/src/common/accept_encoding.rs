use crate::negotiation::Preference;
use crate::value::ContentCoding;

derive_non_empty_list_header! {
    #[header(name = ACCEPT_ENCODING)]
    /// `Accept-Encoding` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-12.5.3)
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Encoding = #( codings [ weight ] )
    /// codings         = content-coding / "identity" / "*"
    /// ```
    ///
    /// # Example values
    /// * `compress, gzip`
    /// * `gzip;q=1.0, identity; q=0.5, *;q=0`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptEncoding(pub NonEmptyVec<Preference<ContentCoding>>);
}

impl_negotiate!(AcceptEncoding, ContentCoding);

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn test_accept_encoding() {
        let header: AcceptEncoding =
            test_decode(&["gzip;q=1.0, identity; q=0.5", "*;q=0"]).unwrap();
        assert_eq!(header.iter().count(), 3);

        let available = [ContentCoding::BROTLI, ContentCoding::IDENTITY, ContentCoding::GZIP];
        assert_eq!(header.negotiate(&available), Some(&ContentCoding::GZIP));
        assert_eq!(
            header.negotiate(&[ContentCoding::BROTLI]),
            None,
            "q=0 wildcard never matches"
        );
    }

    #[test]
    fn test_accept_encoding_invalid() {
        assert_eq!(test_decode::<AcceptEncoding>(&["gzip;q=1.5"]), None);
        assert_eq!(test_decode::<AcceptEncoding>(&[", ,"]), None);
    }
}
