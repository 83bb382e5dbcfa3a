derive_date_header! {
    #[header(name = LAST_MODIFIED)]
    /// `Last-Modified` header, defined in
    /// [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-8.8.2)
    ///
    /// The `Last-Modified` header field in a response provides a timestamp
    /// indicating the date and time at which the origin server believes the
    /// selected representation was last modified, as determined at the
    /// conclusion of handling the request.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Last-Modified = HTTP-date
    /// ```
    ///
    /// # Example values
    ///
    /// * `Sat, 29 Oct 1994 19:43:31 GMT`
    pub struct LastModified(pub HttpDate);
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn test_last_modified_ordering() {
        let earlier: LastModified = test_decode(&["Sat, 29 Oct 1994 19:43:31 GMT"]).unwrap();
        let later: LastModified = test_decode(&["Sun, 30 Oct 1994 19:43:31 GMT"]).unwrap();
        assert!(earlier < later);
        assert_eq!(later.0.as_unix_secs() - earlier.0.as_unix_secs(), 86_400);
    }
}
