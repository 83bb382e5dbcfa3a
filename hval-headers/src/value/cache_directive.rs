use hval_parse::{Cursor, ParserExt, Sequence, literal_char, token, word};
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::fmt;
use std::time::Duration;

use crate::Grammar;
use crate::util::{is_quotable, is_token, write_word};

/// A single `Cache-Control` directive.
///
/// ```text
/// cache-directive = token [ "=" ( token / quoted-string ) ]
/// ```
///
/// Names are case-insensitive and stored lowercased. Directives defined
/// by [RFC 9111](https://www.rfc-editor.org/rfc/rfc9111#section-5.2)
/// and [RFC 8246](https://www.rfc-editor.org/rfc/rfc8246) have their own
/// constructors; extension directives are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheDirective {
    name: SmolStr,
    value: Option<SmolStr>,
}

macro_rules! flag_directives {
    ($($(#[$m:meta])* $fn_name:ident => $name:literal,)+) => {
        $(
            $(#[$m])*
            #[must_use]
            pub const fn $fn_name() -> Self {
                Self::from_static($name)
            }
        )+
    };
}

macro_rules! seconds_directives {
    ($($(#[$m:meta])* $fn_name:ident => $name:literal,)+) => {
        $(
            $(#[$m])*
            #[must_use]
            pub fn $fn_name(duration: Duration) -> Self {
                Self {
                    name: SmolStr::new_inline($name),
                    value: Some(SmolStr::from(duration.as_secs().to_string())),
                }
            }
        )+
    };
}

impl CacheDirective {
    const fn from_static(name: &'static str) -> Self {
        Self {
            name: SmolStr::new_inline(name),
            value: None,
        }
    }

    flag_directives! {
        /// `no-cache`
        no_cache => "no-cache",
        /// `no-store`
        no_store => "no-store",
        /// `no-transform`
        no_transform => "no-transform",
        /// `only-if-cached`
        only_if_cached => "only-if-cached",
        /// `must-revalidate`
        must_revalidate => "must-revalidate",
        /// `must-understand`
        must_understand => "must-understand",
        /// `proxy-revalidate`
        proxy_revalidate => "proxy-revalidate",
        /// `public`
        public => "public",
        /// `private`
        private => "private",
        /// `immutable`
        immutable => "immutable",
    }

    seconds_directives! {
        /// `max-age=<seconds>`, sub-second precision is truncated.
        max_age => "max-age",
        /// `s-maxage=<seconds>`, sub-second precision is truncated.
        s_max_age => "s-maxage",
        /// `min-fresh=<seconds>`, sub-second precision is truncated.
        min_fresh => "min-fresh",
        /// `stale-while-revalidate=<seconds>`, sub-second precision is truncated.
        stale_while_revalidate => "stale-while-revalidate",
        /// `stale-if-error=<seconds>`, sub-second precision is truncated.
        stale_if_error => "stale-if-error",
    }

    /// `max-stale`, optionally limited to a number of seconds.
    #[must_use]
    pub fn max_stale(limit: Option<Duration>) -> Self {
        Self {
            name: SmolStr::new_inline("max-stale"),
            value: limit.map(|d| SmolStr::from(d.as_secs().to_string())),
        }
    }

    /// Create an extension directive.
    ///
    /// Returns `None` if the name is not a token or the value
    /// cannot be written as a quoted-string.
    #[must_use]
    pub fn extension(name: &str, value: Option<&str>) -> Option<Self> {
        if !is_token(name) || !value.is_none_or(is_quotable) {
            return None;
        }
        Some(Self {
            name: ascii_lowercase_smolstr(name),
            value: value.map(SmolStr::new),
        })
    }

    /// The directive name, lowercased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directive argument, unquoted.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The argument as delta-seconds.
    #[must_use]
    pub fn seconds(&self) -> Option<u64> {
        let value = self.value.as_deref()?;
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // delta-seconds too large to represent mean "a very long time"
        Some(value.parse().unwrap_or(u64::MAX))
    }

    /// The argument as a [`Duration`] of delta-seconds.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.seconds().map(Duration::from_secs)
    }

    /// Returns true if this directive has the given (case-insensitive) name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl Grammar for CacheDirective {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let name = seq.read(token)?;
        let value = seq.read_optional((literal_char('='), word).map(|(_, value)| value));
        seq.finish();
        Some(Self {
            name: ascii_lowercase_smolstr(name),
            value: value.map(SmolStr::new),
        })
    }
}

impl fmt::Display for CacheDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(value) = &self.value {
            f.write_str("=")?;
            write_word(f, value)?;
        }
        Ok(())
    }
}

impl_str_codec!(CacheDirective);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arbitrary_text::{quotable, token};
    use quickcheck::quickcheck;

    #[test]
    fn test_parse_cache_directive() {
        for (input, name, value) in [
            ("no-cache", "no-cache", None),
            ("Max-Age=60", "max-age", Some("60")),
            (r#"private="set-cookie, x-a""#, "private", Some("set-cookie, x-a")),
            (r#"community="UCI""#, "community", Some("UCI")),
        ] {
            let directive: CacheDirective = input.parse().unwrap();
            assert_eq!(directive.name(), name, "input: {input:?}");
            assert_eq!(directive.value(), value, "input: {input:?}");
        }

        for invalid in ["", "=60", "max-age=", "max age"] {
            assert!(invalid.parse::<CacheDirective>().is_err(), "input: {invalid:?}");
        }
    }

    #[test]
    fn test_display_cache_directive() {
        assert_eq!(CacheDirective::no_store().to_string(), "no-store");
        assert_eq!(
            CacheDirective::max_age(Duration::from_millis(90_500)).to_string(),
            "max-age=90"
        );
        assert_eq!(CacheDirective::max_stale(None).to_string(), "max-stale");
        assert_eq!(
            CacheDirective::extension("private", Some("set-cookie, x-a"))
                .unwrap()
                .to_string(),
            r#"private="set-cookie, x-a""#
        );
        assert!(CacheDirective::extension("bad name", None).is_none());
    }

    #[test]
    fn test_seconds() {
        let directive: CacheDirective = r#"max-age="30""#.parse().unwrap();
        assert_eq!(directive.seconds(), Some(30));
        assert_eq!(directive.duration(), Some(Duration::from_secs(30)));

        let directive: CacheDirective = "max-age=99999999999999999999999".parse().unwrap();
        assert_eq!(directive.seconds(), Some(u64::MAX));

        assert_eq!(CacheDirective::no_cache().seconds(), None);
        let directive: CacheDirective = "max-age=-1".parse().unwrap();
        assert_eq!(directive.seconds(), None);
    }

    quickcheck! {
        fn display_roundtrip(name: String, value: Option<String>, secs: u64) -> bool {
            let value = value.as_deref().map(quotable);
            let extension = CacheDirective::extension(&token(&name), value.as_deref()).unwrap();
            let max_age = CacheDirective::max_age(Duration::from_secs(secs));
            let max_stale = CacheDirective::max_stale(Some(Duration::from_secs(secs)));
            [extension, max_age, max_stale]
                .into_iter()
                .all(|directive| directive.to_string().parse().ok() == Some(directive))
        }
    }
}
