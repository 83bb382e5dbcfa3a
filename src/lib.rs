//! hval: typed HTTP header values.
//!
//! Header values are small languages. hval parses them with a
//! backtracking parser-combinator core ([`parse`]), gives every
//! well-known grammar a type ([`headers::value`]), and scores client
//! preferences against what a server can offer ([`headers::negotiation`]).
//!
//! | crate | contents |
//! |-|-|
//! | [`parse`] | cursor, combinators, char classes, `parse_with` and parse limits |
//! | [`headers`] | value grammars, negotiation, typed headers for `http::HeaderMap` |
//! | [`utils`] | `NonEmptyVec`, the value `Interner` and string helpers |
//! | [`error`] | the `BoxError`/`OpaqueError` error types and `ErrorContext` |
//!
//! ```
//! use hval::headers::dep::http::HeaderMap;
//! use hval::headers::{Accept, HeaderMapExt, MediaRange, Preference, best_match};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("accept", "text/*;q=0.5, application/json".parse().unwrap());
//!
//! let accept: Accept = headers.typed_get().unwrap();
//! let offered = [MediaRange::TEXT_HTML, MediaRange::APPLICATION_JSON];
//! assert_eq!(
//!     best_match(accept.iter(), &offered),
//!     Some(&MediaRange::APPLICATION_JSON),
//! );
//!
//! let preference: Preference<MediaRange> = "text/html;q=0.25".parse().unwrap();
//! assert_eq!(preference.quality().as_u16(), 250);
//! ```

#![warn(
    clippy::all,
    clippy::todo,
    clippy::empty_enum,
    clippy::enum_glob_use,
    clippy::mem_forget,
    clippy::unused_self,
    clippy::filter_map_next,
    clippy::needless_continue,
    clippy::needless_borrow,
    clippy::match_wildcard_for_single_variants,
    clippy::imprecise_flops,
    clippy::lossy_float_literal,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::fn_params_excessive_bools,
    clippy::exit,
    clippy::inefficient_to_string,
    clippy::linkedlist,
    clippy::macro_use_imports,
    clippy::option_option,
    clippy::verbose_file_reads,
    clippy::unnested_or_patterns,
    clippy::str_to_string,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    missing_debug_implementations,
    missing_docs
)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::hval_error as error;

#[doc(inline)]
pub use ::hval_parse as parse;

#[doc(inline)]
pub use ::hval_headers as headers;

#[doc(inline)]
pub use ::hval_utils as utils;

pub mod telemetry {
    //! Re-export of the logging facade used by hval.

    #[doc(inline)]
    pub use ::hval_parse::telemetry::tracing;
}
