//! Typed headers built on the value grammars of this crate.

/// Add negotiation helpers to a list header of [`Preference`]s.
///
/// [`Preference`]: crate::negotiation::Preference
macro_rules! impl_negotiate {
    ($type:ident, $t:ty) => {
        impl $type {
            /// Pick the available value that best satisfies this header,
            /// see [`best_match`](crate::negotiation::best_match).
            pub fn negotiate<'v, I>(&self, available: I) -> Option<&'v $t>
            where
                I: IntoIterator<Item = &'v $t>,
                I::IntoIter: Clone,
            {
                $crate::negotiation::best_match(self.iter(), available)
            }

            /// The preferences of this header, sorted by descending quality.
            #[must_use]
            pub fn sorted_by_quality(&self) -> Vec<$crate::negotiation::Preference<$t>> {
                let mut preferences = self.0.clone().into_vec();
                $crate::negotiation::sort_by_quality(&mut preferences);
                preferences
            }
        }
    };
}

/// Derive a singleton `HTTP-date` header, convertible from and to `SystemTime`.
macro_rules! derive_date_header {
    (
        #[header(name = $name:ident)]
        $(#[$m:meta])*
        pub struct $type:ident(pub HttpDate);
    ) => {
        derive_value_header! {
            #[header(name = $name)]
            $(#[$m])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $type(pub $crate::value::HttpDate);
        }

        impl TryFrom<::std::time::SystemTime> for $type {
            type Error = $crate::value::InvalidHttpDate;

            fn try_from(time: ::std::time::SystemTime) -> Result<Self, Self::Error> {
                $crate::value::HttpDate::try_from(time).map(Self)
            }
        }

        impl From<$type> for ::std::time::SystemTime {
            fn from(header: $type) -> Self {
                header.0.into()
            }
        }
    };
}

mod accept;
pub use accept::Accept;

mod accept_charset;
pub use accept_charset::AcceptCharset;

mod accept_encoding;
pub use accept_encoding::AcceptEncoding;

mod accept_language;
pub use accept_language::AcceptLanguage;

mod authorization;
pub use authorization::Authorization;

mod cache_control;
pub use cache_control::CacheControl;

mod content_range;

mod content_type;
pub use content_type::ContentType;

mod date;
pub use date::Date;

mod etag;
pub use etag::ETag;

mod expires;
pub use expires::Expires;

mod if_match;
pub use if_match::IfMatch;

mod if_none_match;
pub use if_none_match::IfNoneMatch;

mod last_modified;
pub use last_modified::LastModified;

mod range;

mod server;
pub use server::Server;

mod te;
pub use te::Te;

mod transfer_encoding;
pub use transfer_encoding::TransferEncoding;

mod user_agent;
pub use user_agent::UserAgent;

mod via;
pub use via::Via;

mod warning;
pub use warning::Warning;

mod www_authenticate;
pub use www_authenticate::WwwAuthenticate;

#[cfg(test)]
fn test_decode<T: crate::HeaderDecode>(values: &[&str]) -> Option<T> {
    let mut map = ::http::HeaderMap::new();
    for value in values {
        map.append(T::name(), ::http::HeaderValue::from_str(value).ok()?);
    }
    crate::HeaderMapExt::typed_get(&map)
}

#[cfg(test)]
fn test_encode<T: crate::HeaderEncode>(header: T) -> ::http::HeaderMap {
    let mut map = ::http::HeaderMap::new();
    crate::HeaderMapExt::typed_insert(&mut map, header);
    map
}
