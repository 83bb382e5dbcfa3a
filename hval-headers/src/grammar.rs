use hval_parse::Cursor;

/// A value type with a grammar over header value text.
///
/// [`Grammar::parse_from`] is a regular parser and therefore composes
/// with every combinator of `hval-parse`. The `FromStr` implementation
/// of every type in this crate is that same parser run over the complete
/// input, using [`hval_parse::parse_with`].
pub trait Grammar: Sized {
    /// Parse a value from the current position of the cursor,
    /// restoring the position on failure.
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self>;

    /// [`Grammar::parse_from`] as a function pointer parser.
    #[must_use]
    fn parser<'a>() -> fn(&mut Cursor<'a>) -> Option<Self> {
        Self::parse_from
    }
}

/// Implements `FromStr` (and with the `serde` feature
/// `Serialize`/`Deserialize`) in terms of [`Grammar`] and `Display`.
macro_rules! impl_str_codec {
    ($type:ty) => {
        impl ::std::str::FromStr for $type {
            type Err = ::hval_parse::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                ::hval_parse::parse_with(s, <$type as $crate::Grammar>::parse_from)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <::std::borrow::Cow<'de, str> as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::{CacheDirective, HttpDate, Language, MediaRange, Preference};

    #[test]
    fn test_serde_as_wire_format() {
        let media_range: MediaRange = "Text/HTML; Charset=UTF-8".parse().unwrap();
        let json = serde_json::to_string(&media_range).unwrap();
        assert_eq!(json, r#""text/html;charset=UTF-8""#);
        assert_eq!(serde_json::from_str::<MediaRange>(&json).unwrap(), media_range);

        let preferences: Vec<Preference<Language>> =
            serde_json::from_str(r#"["en-US;q=0.8", "fr"]"#).unwrap();
        assert_eq!(preferences[0].quality().as_u16(), 800);
        assert_eq!(
            serde_json::to_value(&preferences).unwrap(),
            serde_json::json!(["en-us;q=0.8", "fr"])
        );

        let date: HttpDate = serde_json::from_str(r#""Sun, 06 Nov 1994 08:49:37 GMT""#).unwrap();
        assert_eq!(date.as_unix_secs(), 784_111_777);

        let directive: CacheDirective = serde_json::from_str(r#""max-age=60""#).unwrap();
        assert_eq!(directive.seconds(), Some(60));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<MediaRange>(r#""*/html""#).is_err());
        assert!(serde_json::from_str::<Preference<Language>>(r#""en;q=2""#).is_err());
        assert!(serde_json::from_str::<MediaRange>("42").is_err());
    }
}
