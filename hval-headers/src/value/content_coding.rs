token_value! {
    /// A content coding, or `*`, as listed in `Accept-Encoding`.
    ///
    /// `identity` stands for "no encoding".
    pub struct ContentCoding;
    error = InvalidContentCoding: "invalid content coding";
    consts = {
        /// `identity`
        IDENTITY => "identity",
        /// `gzip`
        GZIP => "gzip",
        /// `deflate`
        DEFLATE => "deflate",
        /// `br`
        BROTLI => "br",
        /// `zstd`
        ZSTD => "zstd",
        /// `compress`
        COMPRESS => "compress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiation::{Matcheable, Preference, best_match};

    #[test]
    fn test_content_coding_negotiation() {
        let preferences: Vec<Preference<ContentCoding>> = ["gzip;q=0.5", "BR", "*;q=0.1"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(preferences[1].value(), &ContentCoding::BROTLI);

        let available = [ContentCoding::GZIP, ContentCoding::BROTLI];
        assert_eq!(
            best_match(&preferences, &available),
            Some(&ContentCoding::BROTLI)
        );

        let available = [ContentCoding::ZSTD];
        assert_eq!(best_match(&preferences, &available), Some(&ContentCoding::ZSTD));
        assert_eq!(ContentCoding::ANY.match_score(&ContentCoding::ZSTD), 100);
    }
}
