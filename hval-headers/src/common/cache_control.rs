use std::time::Duration;

use crate::value::CacheDirective;

derive_non_empty_list_header! {
    #[header(name = CACHE_CONTROL)]
    /// `Cache-Control` header, defined in [RFC9111](https://www.rfc-editor.org/rfc/rfc9111#section-5.2)
    /// with extensions in [RFC8246](https://www.rfc-editor.org/rfc/rfc8246)
    ///
    /// The `Cache-Control` header field is used to specify directives for
    /// caches along the request/response chain.  Such cache directives are
    /// unidirectional in that the presence of a directive in a request does
    /// not imply that the same directive is to be given in the response.
    ///
    /// Directives are kept in order, extension directives included.
    ///
    /// ## ABNF
    ///
    /// ```text
    /// Cache-Control   = 1#cache-directive
    /// cache-directive = token [ "=" ( token / quoted-string ) ]
    /// ```
    ///
    /// ## Example values
    ///
    /// * `no-cache`
    /// * `private, community="UCI"`
    /// * `max-age=30`
    ///
    /// # Example
    ///
    /// ```
    /// use hval_headers::{CacheControl, CacheDirective};
    /// use std::time::Duration;
    ///
    /// let cc = CacheControl::new(CacheDirective::public())
    ///     .with(CacheDirective::max_age(Duration::from_secs(60)));
    /// assert!(cc.public());
    /// assert_eq!(cc.max_age(), Some(Duration::from_secs(60)));
    /// assert_eq!(cc.to_string(), "public, max-age=60");
    /// ```
    #[derive(PartialEq, Eq, Clone, Debug)]
    pub struct CacheControl(pub NonEmptyVec<CacheDirective>);
}

macro_rules! flag_getters {
    ($($(#[$m:meta])* $fn_name:ident => $name:literal,)+) => {
        $(
            $(#[$m])*
            #[must_use]
            pub fn $fn_name(&self) -> bool {
                self.contains($name)
            }
        )+
    };
}

macro_rules! duration_getters {
    ($($(#[$m:meta])* $fn_name:ident => $name:literal,)+) => {
        $(
            $(#[$m])*
            #[must_use]
            pub fn $fn_name(&self) -> Option<Duration> {
                self.get($name).and_then(CacheDirective::duration)
            }
        )+
    };
}

impl CacheControl {
    /// Append a directive.
    #[must_use]
    pub fn with(mut self, directive: CacheDirective) -> Self {
        self.0.push(directive);
        self
    }

    /// The first directive with the given (case-insensitive) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CacheDirective> {
        self.iter().find(|directive| directive.is(name))
    }

    /// Returns true if a directive with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    flag_getters! {
        /// Check if the `no-cache` directive is set.
        no_cache => "no-cache",
        /// Check if the `no-store` directive is set.
        no_store => "no-store",
        /// Check if the `no-transform` directive is set.
        no_transform => "no-transform",
        /// Check if the `only-if-cached` directive is set.
        only_if_cached => "only-if-cached",
        /// Check if the `public` directive is set.
        public => "public",
        /// Check if the `private` directive is set.
        private => "private",
        /// Check if the `immutable` directive is set.
        immutable => "immutable",
        /// Check if the `must-revalidate` directive is set.
        must_revalidate => "must-revalidate",
        /// Check if the `must-understand` directive is set.
        must_understand => "must-understand",
    }

    duration_getters! {
        /// Get the value of the `max-age` directive if set.
        max_age => "max-age",
        /// Get the value of the `min-fresh` directive if set.
        min_fresh => "min-fresh",
        /// Get the value of the `s-maxage` directive if set.
        s_max_age => "s-maxage",
        /// Get the value of the `stale-while-revalidate` directive if set.
        stale_while_revalidate => "stale-while-revalidate",
        /// Get the value of the `stale-if-error` directive if set.
        stale_if_error => "stale-if-error",
    }

    /// Get the value of the `max-stale` directive if set.
    ///
    /// A `max-stale` without a limit accepts any staleness
    /// and is returned as [`Duration::MAX`].
    #[must_use]
    pub fn max_stale(&self) -> Option<Duration> {
        let directive = self.get("max-stale")?;
        match directive.value() {
            None => Some(Duration::MAX),
            Some(_) => directive.duration(),
        }
    }
}

impl From<CacheDirective> for CacheControl {
    fn from(directive: CacheDirective) -> Self {
        Self::new(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_parse_multiple_headers() {
        let cc: CacheControl = test_decode(&["no-cache", "private"]).unwrap();
        assert!(cc.no_cache());
        assert!(cc.private());
        assert!(!cc.public());
    }

    #[test]
    fn test_parse_argument() {
        let cc: CacheControl = test_decode(&["max-age=100, PUBLIC"]).unwrap();
        assert_eq!(cc.max_age(), Some(Duration::from_secs(100)));
        assert!(cc.public());
    }

    #[test]
    fn test_parse_quote_form() {
        let cc: CacheControl = test_decode(&["max-age=\"200\""]).unwrap();
        assert_eq!(cc.max_age(), Some(Duration::from_secs(200)));
    }

    #[test]
    fn test_parse_extension() {
        let cc: CacheControl = test_decode(&["foo, bar=baz", r#"community="UCI""#]).unwrap();
        assert_eq!(cc.get("foo").and_then(CacheDirective::value), None);
        assert_eq!(cc.get("bar").and_then(CacheDirective::value), Some("baz"));
        assert_eq!(cc.get("community").and_then(CacheDirective::value), Some("UCI"));
        assert_eq!(cc.iter().count(), 3);
    }

    #[test]
    fn test_parse_bad_syntax() {
        assert_eq!(test_decode::<CacheControl>(&["max-age=lolz"]).and_then(|cc| cc.max_age()), None);
        assert_eq!(test_decode::<CacheControl>(&["foo bar"]), None);
        assert_eq!(test_decode::<CacheControl>(&[""]), None);
    }

    #[test]
    fn test_max_stale() {
        let cc: CacheControl = test_decode(&["max-stale"]).unwrap();
        assert_eq!(cc.max_stale(), Some(Duration::MAX));
        let cc: CacheControl = test_decode(&["max-stale=5"]).unwrap();
        assert_eq!(cc.max_stale(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn encode_one_flag_directive() {
        let cc = CacheControl::from(CacheDirective::no_cache());
        assert_eq!(test_encode(cc)["cache-control"], "no-cache");
    }

    #[test]
    fn encode_one_param_directive() {
        let cc = CacheControl::new(CacheDirective::max_age(Duration::from_secs(300)));
        assert_eq!(test_encode(cc)["cache-control"], "max-age=300");
    }

    #[test]
    fn encode_two_directive() {
        let cc = CacheControl::new(CacheDirective::no_cache()).with(CacheDirective::private());
        assert_eq!(test_encode(cc)["cache-control"], "no-cache, private");

        let cc = CacheControl::new(CacheDirective::no_cache())
            .with(CacheDirective::s_max_age(Duration::from_secs(999)));
        assert_eq!(test_encode(cc)["cache-control"], "no-cache, s-maxage=999");
    }
}
