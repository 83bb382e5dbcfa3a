use hval_parse::char_class::{ALPHA, ALPHANUM};
use hval_parse::{Cursor, Parser, ParserExt, Sequence, first_available, literal_char, while_matches1};
use hval_utils::macros::error::static_str_error;
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::fmt;

use crate::Grammar;
use crate::negotiation::Matcheable;

static_str_error! {
    /// Not a `language-range`.
    pub struct InvalidLanguage = "invalid language range";
}

/// A language range as used by `Accept-Language`, or the `*` wildcard.
///
/// ```text
/// language-range = ( 1*8ALPHA *( "-" 1*8alphanum ) ) / "*"
/// ```
///
/// Compared case-insensitively, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(SmolStr);

impl Language {
    /// The `*` wildcard.
    pub const ANY: Self = Self(SmolStr::new_inline("*"));

    /// Create a [`Language`] from a language range.
    pub fn try_new(range: &str) -> Result<Self, InvalidLanguage> {
        hval_parse::parse_with(range, Self::parse_from)
            .ok()
            .ok_or(InvalidLanguage)
    }

    /// The language range, lowercased.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the `*` wildcard.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0 == "*"
    }

    /// The subtags of this range: `en-us` has `en` and `us`.
    pub fn subtags(&self) -> impl Iterator<Item = &str> {
        self.0.split('-')
    }

    /// The primary subtag: `en` for `en-us`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.subtags().next().unwrap_or_default()
    }

    /// Returns true when this range is a subtag prefix of `other`:
    /// `en` is a prefix of `en-us` but not of `eng`.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    }
}

fn subtag<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    while_matches1(ALPHANUM)
        .map_opt(|s: &'a str| (s.len() <= 8).then_some(s))
        .parse(cursor)
}

fn language_tag<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut seq = Sequence::new(cursor);
    let start = seq.start();
    seq.read(while_matches1(ALPHA).map_opt(|s: &'a str| (s.len() <= 8).then_some(s)))?;
    seq.read_while_available(literal_char('-'), subtag);
    let tag = seq.cursor().consumed_since(start);
    seq.finish();
    Some(tag)
}

impl Grammar for Language {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        first_available((language_tag, literal_char('*').recognize()))
            .map(|range: &str| Self(ascii_lowercase_smolstr(range)))
            .parse(cursor)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl_str_codec!(Language);

impl Matcheable for Language {
    fn match_score(&self, candidate: &Self) -> u16 {
        if self.is_any() {
            100
        } else if self == candidate {
            1000
        } else if self.is_prefix_of(candidate) {
            500
        } else {
            0
        }
    }
}
