use crate::negotiation::Preference;
use crate::value::MediaRange;

derive_non_empty_list_header! {
    #[header(name = ACCEPT)]
    /// `Accept` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-12.5.1)
    ///
    /// The `Accept` header field can be used by user agents to specify
    /// response media types that are acceptable.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept = #( media-range [ weight ] *( OWS ";" OWS accept-ext ) )
    ///
    /// media-range    = ( "*/*"
    ///                  / ( type "/" "*" )
    ///                  / ( type "/" subtype )
    ///                  ) *( OWS ";" OWS parameter )
    /// ```
    ///
    /// # Example values
    /// * `audio/*; q=0.2, audio/basic`
    /// * `text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c`
    ///
    /// # Examples
    ///
    /// ```
    /// use hval_headers::{Accept, HeaderMapExt, MediaRange};
    ///
    /// let mut headers = http::HeaderMap::new();
    /// headers.typed_insert(Accept::json());
    /// assert_eq!(headers["accept"], "application/json");
    ///
    /// headers.insert("accept", "text/html, application/*;q=0.5".parse().unwrap());
    /// let accept: Accept = headers.typed_get().unwrap();
    /// let available = [MediaRange::APPLICATION_JSON, MediaRange::TEXT_PLAIN];
    /// assert_eq!(accept.negotiate(&available), Some(&MediaRange::APPLICATION_JSON));
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Accept(pub NonEmptyVec<Preference<MediaRange>>);
}

impl_negotiate!(Accept, MediaRange);

impl Accept {
    /// Create an `Accept` header for a single media range.
    #[must_use]
    pub fn new_from_media_range(media_range: MediaRange) -> Self {
        Self::new(Preference::new(media_range))
    }

    /// A constructor to easily create `Accept: */*`.
    #[must_use]
    pub fn star() -> Self {
        Self::new_from_media_range(MediaRange::STAR_STAR)
    }

    /// A constructor to easily create `Accept: application/json`.
    #[must_use]
    pub fn json() -> Self {
        Self::new_from_media_range(MediaRange::APPLICATION_JSON)
    }

    /// A constructor to easily create `Accept: text/*`.
    #[must_use]
    pub fn text() -> Self {
        Self::new_from_media_range(MediaRange::TEXT_STAR)
    }

    /// A constructor to easily create `Accept: image/*`.
    #[must_use]
    pub fn image() -> Self {
        Self::new_from_media_range(MediaRange::IMAGE_STAR)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;
    use crate::negotiation::Quality;
    use hval_utils::collections::non_empty_vec;

    macro_rules! test_header {
        ($name: ident, $input: expr, $expected: expr) => {
            #[test]
            fn $name() {
                assert_eq!(test_decode::<Accept>(&$input), $expected);
            }
        };
    }

    fn pref(s: &str, quality: u16) -> Preference<MediaRange> {
        Preference::new(s.parse().unwrap()).with_quality(Quality::try_new(quality).unwrap())
    }

    // Tests from the RFC
    test_header!(
        test1,
        ["audio/*; q=0.2, audio/basic"],
        Some(Accept(non_empty_vec![
            pref("audio/*", 200),
            pref("audio/basic", 1000),
        ]))
    );
    test_header!(
        test2,
        ["text/plain; q=0.5, text/html,\ttext/x-dvi; q=0.8, text/x-c"],
        Some(Accept(non_empty_vec![
            pref("text/plain", 500),
            pref("text/html", 1000),
            pref("text/x-dvi", 800),
            pref("text/x-c", 1000),
        ]))
    );
    test_header!(
        test3,
        ["text/*, text/plain", "text/plain;format=flowed, */*"],
        Some(Accept(non_empty_vec![
            pref("text/*", 1000),
            pref("text/plain", 1000),
            pref("text/plain;format=flowed", 1000),
            pref("*/*", 1000),
        ]))
    );
    test_header!(test_invalid_media_range, ["text"], None::<Accept>);
    test_header!(test_invalid_quality, ["text/html;q=2"], None::<Accept>);
    test_header!(test_empty, [""], None::<Accept>);

    #[test]
    fn test_encode_accept() {
        let accept = Accept(non_empty_vec![pref("text/html", 1000), pref("*/*", 800)]);
        let map = test_encode(accept);
        assert_eq!(map["accept"], "text/html, */*;q=0.8");
    }

    #[test]
    fn test_negotiate() {
        let accept: Accept =
            test_decode(&["text/*;q=0.3, text/plain;format=flowed, application/json;q=0.9"])
                .unwrap();
        let available = [MediaRange::TEXT_HTML, MediaRange::APPLICATION_JSON];
        assert_eq!(
            accept.negotiate(&available),
            Some(&MediaRange::APPLICATION_JSON)
        );
        assert_eq!(
            accept
                .sorted_by_quality()
                .iter()
                .map(|p| p.quality().as_u16())
                .collect::<Vec<_>>(),
            [1000, 900, 300]
        );
    }
}
