//! Content negotiation: quality factors, preferences and scoring.
//!
//! A client lists [`Preference`]s for a kind of value (media ranges,
//! languages, charsets, codings), each weighted by a [`Quality`].
//! A server scores what it can offer against them through
//! [`Matcheable`] and picks the [`best_match`].

mod quality;
pub use quality::{InvalidQuality, Quality, q_param, qvalue};

mod preference;
pub use preference::{Matcheable, Preference, best_match, sort_by_quality};
