use hval_parse::{Cursor, Sequence, literal_char, token};
use hval_utils::collections::Interner;
use hval_utils::macros::error::static_str_error;
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

use super::Parameters;
use super::parameters::parse_parameters;
use crate::negotiation::Matcheable;
use crate::util::is_token;

static_str_error! {
    /// Type and subtype must be tokens, and a wildcard type
    /// requires a wildcard subtype.
    pub struct InvalidMediaRange = "invalid media range";
}

/// A media type, or a range of them using `*` wildcards.
///
/// ```text
/// media-range = ( "*/*" / ( type "/" "*" ) / ( type "/" subtype ) )
///               *( OWS ";" OWS parameter )
/// ```
///
/// Type and subtype are case-insensitive and stored lowercased.
/// A parameter named `q` is never part of a media range: it ends the
/// range and starts the weight of an `Accept` preference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRange {
    type_: SmolStr,
    subtype: SmolStr,
    parameters: Parameters,
}

macro_rules! media_range_consts {
    ($($(#[$m:meta])* $name:ident => $type_:literal / $subtype:literal,)+) => {
        impl MediaRange {
            $(
                $(#[$m])*
                pub const $name: Self = Self::from_static($type_, $subtype);
            )+
        }
    };
}

media_range_consts! {
    /// `*/*`
    STAR_STAR => "*" / "*",
    /// `text/*`
    TEXT_STAR => "text" / "*",
    /// `text/plain`
    TEXT_PLAIN => "text" / "plain",
    /// `text/html`
    TEXT_HTML => "text" / "html",
    /// `text/css`
    TEXT_CSS => "text" / "css",
    /// `text/csv`
    TEXT_CSV => "text" / "csv",
    /// `text/javascript`
    TEXT_JAVASCRIPT => "text" / "javascript",
    /// `text/xml`
    TEXT_XML => "text" / "xml",
    /// `text/event-stream`
    TEXT_EVENT_STREAM => "text" / "event-stream",
    /// `image/*`
    IMAGE_STAR => "image" / "*",
    /// `image/png`
    IMAGE_PNG => "image" / "png",
    /// `image/jpeg`
    IMAGE_JPEG => "image" / "jpeg",
    /// `image/gif`
    IMAGE_GIF => "image" / "gif",
    /// `image/webp`
    IMAGE_WEBP => "image" / "webp",
    /// `image/svg+xml`
    IMAGE_SVG => "image" / "svg+xml",
    /// `audio/*`
    AUDIO_STAR => "audio" / "*",
    /// `video/*`
    VIDEO_STAR => "video" / "*",
    /// `application/*`
    APPLICATION_STAR => "application" / "*",
    /// `application/json`
    APPLICATION_JSON => "application" / "json",
    /// `application/xml`
    APPLICATION_XML => "application" / "xml",
    /// `application/octet-stream`
    APPLICATION_OCTET_STREAM => "application" / "octet-stream",
    /// `application/x-www-form-urlencoded`
    APPLICATION_WWW_FORM_URLENCODED => "application" / "x-www-form-urlencoded",
    /// `application/pdf`
    APPLICATION_PDF => "application" / "pdf",
    /// `multipart/form-data`
    MULTIPART_FORM_DATA => "multipart" / "form-data",
}

impl MediaRange {
    const fn from_static(type_: &'static str, subtype: &'static str) -> Self {
        Self {
            type_: SmolStr::new_inline(type_),
            subtype: SmolStr::new_inline(subtype),
            parameters: Parameters::new(),
        }
    }

    /// Create a new [`MediaRange`] without parameters.
    pub fn try_new(type_: &str, subtype: &str) -> Result<Self, InvalidMediaRange> {
        if !is_token(type_) || !is_token(subtype) || (type_ == "*" && subtype != "*") {
            return Err(InvalidMediaRange);
        }
        Ok(Self {
            type_: ascii_lowercase_smolstr(type_),
            subtype: ascii_lowercase_smolstr(subtype),
            parameters: Parameters::new(),
        })
    }

    /// Replace the parameters of this media range.
    ///
    /// A parameter named `q` would be read back as a weight,
    /// and is therefore dropped.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters.without_weight();
        self
    }

    /// The top-level type, `*` for any.
    #[must_use]
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The subtype, `*` for any.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The parameters, in order.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The value of the `charset` parameter, if any.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.parameters.get("charset")
    }

    /// Returns true if the type or subtype is a wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.subtype == "*"
    }

    /// Returns the canonical shared instance of this media range.
    pub fn intern(self, interner: &Interner<Self>) -> Arc<Self> {
        interner.intern_arc(Arc::new(self))
    }
}

impl crate::Grammar for MediaRange {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let (type_, _, subtype) = seq.read((token, literal_char('/'), token))?;
        if type_ == "*" && subtype != "*" {
            return None;
        }
        let parameters = parse_parameters(seq.cursor(), true);
        seq.finish();
        Some(Self {
            type_: ascii_lowercase_smolstr(type_),
            subtype: ascii_lowercase_smolstr(subtype),
            parameters,
        })
    }
}

impl fmt::Display for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.type_, self.subtype, self.parameters)
    }
}

impl_str_codec!(MediaRange);

impl Matcheable for MediaRange {
    fn match_score(&self, candidate: &Self) -> u16 {
        if self.type_ == "*" {
            return 100;
        }
        if self.type_ != candidate.type_ {
            return 0;
        }
        if self.subtype == "*" {
            return 500;
        }
        if self.subtype != candidate.subtype {
            0
        } else if self.parameters.is_equivalent(&candidate.parameters) {
            1000
        } else if self.parameters.is_subset_of(&candidate.parameters) {
            900
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arbitrary_text::{parameters, token};
    use quickcheck::{TestResult, quickcheck};

    #[test]
    fn test_parse_media_range() {
        let range: MediaRange = "Text/HTML;Charset=UTF-8; level=1".parse().unwrap();
        assert_eq!(range.type_(), "text");
        assert_eq!(range.subtype(), "html");
        assert_eq!(range.charset(), Some("UTF-8"));
        assert_eq!(range.parameters().get("level"), Some("1"));
        assert_eq!(range.to_string(), "text/html;charset=UTF-8;level=1");

        assert_eq!("*/*".parse::<MediaRange>().unwrap(), MediaRange::STAR_STAR);
        assert_eq!("image/*".parse::<MediaRange>().unwrap(), MediaRange::IMAGE_STAR);

        for invalid in ["", "text", "text/", "/html", "*/html", "text/html;", "text /html"] {
            assert!(invalid.parse::<MediaRange>().is_err(), "input: {invalid:?}");
        }
    }

    #[test]
    fn test_weight_ends_media_range() {
        let mut cursor = Cursor::new("text/html;level=1 ; q=0.5");
        let range = <MediaRange as crate::Grammar>::parse_from(&mut cursor).unwrap();
        assert_eq!(range.parameters().len(), 1);
        assert_eq!(cursor.remaining(), " ; q=0.5");
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            MediaRange::try_new("Application", "JSON"),
            Ok(MediaRange::APPLICATION_JSON)
        );
        assert_eq!(MediaRange::try_new("*", "json"), Err(InvalidMediaRange));
        assert_eq!(MediaRange::try_new("text", "ht ml"), Err(InvalidMediaRange));

        let range = MediaRange::TEXT_PLAIN.with_parameters(
            Parameters::new()
                .try_with("q", "1")
                .unwrap()
                .try_with("charset", "utf-8")
                .unwrap(),
        );
        assert_eq!(range.to_string(), "text/plain;charset=utf-8");
        assert_eq!(range.to_string().parse::<MediaRange>().unwrap(), range);
    }

    #[test]
    fn test_match_score() {
        let html: MediaRange = "text/html".parse().unwrap();
        let html_utf8: MediaRange = "text/html;charset=utf-8".parse().unwrap();
        let html_utf8_upper: MediaRange = "text/html;charset=UTF-8".parse().unwrap();
        let html_latin1: MediaRange = "text/html;charset=latin1".parse().unwrap();

        assert_eq!(html.match_score(&html), 1000);
        assert_eq!(html_utf8.match_score(&html_utf8_upper), 1000);
        assert_eq!(html.match_score(&html_utf8), 900);
        assert_eq!(html_utf8.match_score(&html), 0);
        assert_eq!(html_utf8.match_score(&html_latin1), 0);
        assert_eq!(MediaRange::TEXT_STAR.match_score(&html), 500);
        assert_eq!(MediaRange::STAR_STAR.match_score(&MediaRange::IMAGE_PNG), 100);
        assert_eq!(MediaRange::TEXT_STAR.match_score(&MediaRange::IMAGE_PNG), 0);
        assert_eq!(MediaRange::TEXT_PLAIN.match_score(&html), 0);
    }

    #[test]
    fn test_intern() {
        let interner = Interner::new();
        let a = "text/html".parse::<MediaRange>().unwrap().intern(&interner);
        let b = MediaRange::TEXT_HTML.intern(&interner);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(interner.len(), 1);
    }

    quickcheck! {
        fn display_roundtrip(
            type_: String,
            subtype: String,
            params: Vec<(String, String)>
        ) -> TestResult {
            let Ok(media_range) = MediaRange::try_new(&token(&type_), &token(&subtype)) else {
                return TestResult::discard();
            };
            let media_range = media_range.with_parameters(parameters(&params));
            TestResult::from_bool(media_range.to_string().parse().ok() == Some(media_range))
        }
    }
}
