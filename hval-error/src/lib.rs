//! Error types for hval.
//!
//! Parsing itself never produces error values: a grammar that does not match
//! simply yields `None` and leaves its input untouched. Errors only show up at
//! the edges, when a caller asks for a complete value (`FromStr`, typed header
//! decoding) or passes an invalid argument to a constructor.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait and is used for cases where it is usually not
//! that important what specific error type is returned, but rather that an error occurred.
//!
//! That said, one can use downcasting or [`OpaqueError::is`] to try to get the cause of the error.
//!
//! # hval
//!
//! Crate used by the end-user `hval` crate and `hval` crate authors alike.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

mod opaque;
#[doc(inline)]
pub use opaque::OpaqueError;

mod context;
#[doc(inline)]
pub use context::{ErrorContext, ErrorExt};
