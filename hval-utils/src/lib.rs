//! utilities crate for hval
//!
//! `hval-utils` contains utilities used by `hval`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # hval
//!
//! Crate used by the end-user `hval` crate and `hval` crate authors alike.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod collections;
pub mod str;
