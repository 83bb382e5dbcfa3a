//! # Typed HTTP header values
//!
//! Header values are text with a grammar, and this crate gives each
//! well-known grammar a type: media ranges, language ranges, cache
//! directives, challenges, entity tags, dates and more. Every type
//! parses with [`FromStr`](std::str::FromStr), writes its canonical wire
//! format with `Display`, and exposes its parser through [`Grammar`] so
//! it can be embedded in larger grammars built with `hval-parse`.
//!
//! On top of these sit the [`negotiation`] helpers, which score the
//! preferences of a client against what a server has to offer, and (with
//! the `http` feature) typed headers for use with [`http::HeaderMap`].
//!
//! ```
//! use hval_headers::{AcceptLanguage, HeaderMapExt, Language};
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert("accept-language", "en-us;q=0.8, fr;q=0.9, *;q=0.1".parse().unwrap());
//!
//! let accept: AcceptLanguage = headers.typed_get().unwrap();
//! let available: [Language; 2] = ["fr".parse().unwrap(), "de".parse().unwrap()];
//! assert_eq!(accept.negotiate(&available), Some(&available[0]));
//! ```
//!
//! # Defining Custom Headers
//!
//! ```
//! use http::{HeaderName, HeaderValue};
//! use hval_headers::{HeaderDecode, HeaderEncode, TypedHeader};
//!
//! struct Dnt(bool);
//!
//! impl TypedHeader for Dnt {
//!     fn name() -> &'static HeaderName {
//!          &http::header::DNT
//!     }
//! }
//!
//! impl HeaderDecode for Dnt {
//!     fn decode<'i, I>(values: &mut I) -> Result<Self, hval_headers::Error>
//!     where
//!         I: Iterator<Item = &'i HeaderValue>,
//!     {
//!         let value = values
//!             .next()
//!             .ok_or_else(hval_headers::Error::invalid)?;
//!
//!         if value == "0" {
//!             Ok(Dnt(false))
//!         } else if value == "1" {
//!             Ok(Dnt(true))
//!         } else {
//!             Err(hval_headers::Error::invalid())
//!         }
//!     }
//! }
//!
//! impl HeaderEncode for Dnt {
//!     fn encode<E>(&self, values: &mut E)
//!     where
//!         E: Extend<HeaderValue>,
//!     {
//!         let s = if self.0 { "1" } else { "0" };
//!         values.extend(std::iter::once(HeaderValue::from_static(s)));
//!     }
//! }
//! ```
//!
//! # hval
//!
//! Crate used by the end-user `hval` crate and `hval` crate authors alike.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[macro_use]
mod grammar;
#[doc(inline)]
pub use grammar::Grammar;

#[macro_use]
mod util;

pub mod negotiation;
#[doc(inline)]
pub use negotiation::{
    InvalidQuality, Matcheable, Preference, Quality, best_match, sort_by_quality,
};

pub mod value;
#[doc(inline)]
pub use value::{
    ByteRangeSpec, CacheDirective, ChallengeContent, ChallengeMessage, Charset, Comment,
    ContentCoding, ContentRange, EntityTag, EntityTagMatch, HeaderName, HttpDate, Language,
    MediaRange, Parameters, Product, ProductList, ProductOrComment, Range, TransferCoding,
    ViaElement, WarningValue,
};

#[cfg(feature = "http")]
mod header;
#[cfg(feature = "http")]
#[doc(inline)]
pub use header::{Error, HeaderDecode, HeaderEncode, TypedHeader};

#[cfg(feature = "http")]
mod map_ext;
#[cfg(feature = "http")]
#[doc(inline)]
pub use map_ext::HeaderMapExt;

#[cfg(feature = "http")]
mod common;
#[cfg(feature = "http")]
pub use common::*;

pub mod dep {
    //! Dependencies for hval header utilities and types.

    #[cfg(feature = "http")]
    #[doc(inline)]
    pub use http;

    #[doc(inline)]
    pub use httpdate;
}
