token_value! {
    /// A character encoding scheme name, or `*`,
    /// as listed in `Accept-Charset`.
    ///
    /// ```text
    /// charset = token
    /// ```
    pub struct Charset;
    error = InvalidCharset: "invalid charset";
    consts = {
        /// `utf-8`
        UTF_8 => "utf-8",
        /// `us-ascii`
        US_ASCII => "us-ascii",
        /// `iso-8859-1`
        ISO_8859_1 => "iso-8859-1",
    }
}
