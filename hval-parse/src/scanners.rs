//! Primitive scanners for the HTTP core grammar.

use crate::char_class::{CharPredicate, DIGIT, QDTEXT, QUOTED_PAIR, TCHAR, WSP};
use crate::{Cursor, Parser};
use std::borrow::Cow;

/// Greedily consume code points matching `predicate`.
///
/// Always succeeds, possibly with an empty run.
pub fn while_matches<P: CharPredicate>(predicate: P) -> WhileMatches<P> {
    WhileMatches {
        predicate,
        at_least_one: false,
    }
}

/// Like [`while_matches`], but fails on an empty run.
pub fn while_matches1<P: CharPredicate>(predicate: P) -> WhileMatches<P> {
    WhileMatches {
        predicate,
        at_least_one: true,
    }
}

/// See [`while_matches`] and [`while_matches1`].
#[derive(Debug, Clone, Copy)]
pub struct WhileMatches<P> {
    predicate: P,
    at_least_one: bool,
}

impl<'a, P: CharPredicate> Parser<'a> for WhileMatches<P> {
    type Output = &'a str;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let start = cursor.position();
        while cursor.advance_if(|c| self.predicate.matches(c)).is_some() {}
        let run = cursor.consumed_since(start);
        if self.at_least_one && run.is_empty() {
            return None;
        }
        Some(run)
    }
}

/// Consume a single code point matching `predicate`.
pub fn char_matching<P: CharPredicate>(predicate: P) -> CharMatching<P> {
    CharMatching(predicate)
}

/// See [`char_matching`].
#[derive(Debug, Clone, Copy)]
pub struct CharMatching<P>(P);

impl<'a, P: CharPredicate> Parser<'a> for CharMatching<P> {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<char> {
        cursor.advance_if(|c| self.0.matches(c))
    }
}

/// Match exactly the character `c`.
#[must_use]
pub const fn literal_char(c: char) -> LiteralChar {
    LiteralChar(c)
}

/// See [`literal_char`].
#[derive(Debug, Clone, Copy)]
pub struct LiteralChar(char);

impl<'a> Parser<'a> for LiteralChar {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<char> {
        cursor.advance_if(|c| c == self.0)
    }
}

/// Match exactly the string `s`, producing the matched input.
#[must_use]
pub const fn literal_str(s: &str) -> LiteralStr<'_> {
    LiteralStr {
        literal: s,
        ignore_ascii_case: false,
    }
}

/// Match the string `s` ignoring ASCII case, producing the matched input.
#[must_use]
pub const fn literal_str_ignore_case(s: &str) -> LiteralStr<'_> {
    LiteralStr {
        literal: s,
        ignore_ascii_case: true,
    }
}

/// See [`literal_str`] and [`literal_str_ignore_case`].
#[derive(Debug, Clone, Copy)]
pub struct LiteralStr<'s> {
    literal: &'s str,
    ignore_ascii_case: bool,
}

impl<'a> Parser<'a> for LiteralStr<'_> {
    type Output = &'a str;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let remaining = cursor.remaining();
        let candidate = remaining.get(..self.literal.len())?;
        let matched = if self.ignore_ascii_case {
            candidate.eq_ignore_ascii_case(self.literal)
        } else {
            candidate == self.literal
        };
        if !matched {
            return None;
        }
        let start = cursor.position();
        cursor.set_position(start + candidate.len());
        Some(candidate)
    }
}

/// `token = 1*tchar`
pub fn token<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    while_matches1(TCHAR).parse(cursor)
}

/// `OWS = *( SP / HTAB )`, always succeeds.
pub fn ows<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    while_matches(WSP).parse(cursor)
}

/// `RWS = 1*( SP / HTAB )`
pub fn rws<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    while_matches1(WSP).parse(cursor)
}

/// `1*DIGIT`
pub fn digits<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    while_matches1(DIGIT).parse(cursor)
}

/// A run of digits as an unsigned 32 bit integer.
///
/// Fails without consuming anything on an empty run or overflow.
pub fn integer(cursor: &mut Cursor<'_>) -> Option<u32> {
    let start = cursor.position();
    let value = digits(cursor)?.parse().ok();
    if value.is_none() {
        cursor.set_position(start);
    }
    value
}

/// A run of digits as an unsigned 64 bit integer.
///
/// Fails without consuming anything on an empty run or overflow.
pub fn long(cursor: &mut Cursor<'_>) -> Option<u64> {
    let start = cursor.position();
    let value = digits(cursor)?.parse().ok();
    if value.is_none() {
        cursor.set_position(start);
    }
    value
}

/// `quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE`
///
/// Produces the unescaped content, borrowed from the input
/// when it contains no quoted-pair.
pub fn quoted_string<'a>(cursor: &mut Cursor<'a>) -> Option<Cow<'a, str>> {
    let start = cursor.position();
    let value = quoted_string_inner(cursor);
    if value.is_none() {
        cursor.set_position(start);
    }
    value
}

fn quoted_string_inner<'a>(cursor: &mut Cursor<'a>) -> Option<Cow<'a, str>> {
    cursor.advance_if(|c| c == '"')?;
    let content_start = cursor.position();
    let mut unescaped: Option<String> = None;
    loop {
        match cursor.advance()? {
            '"' => {
                return Some(match unescaped {
                    Some(s) => Cow::Owned(s),
                    None => {
                        let end = cursor.position() - 1;
                        Cow::Borrowed(cursor.slice(content_start, end))
                    }
                });
            }
            '\\' => {
                let escaped = cursor.advance_if(|c| QUOTED_PAIR.contains(c))?;
                let buf = unescaped.get_or_insert_with(|| {
                    // everything before this backslash was plain qdtext
                    let end = cursor.position() - 1 - escaped.len_utf8();
                    cursor.slice(content_start, end).to_owned()
                });
                buf.push(escaped);
            }
            c if QDTEXT.contains(c) => {
                if let Some(buf) = unescaped.as_mut() {
                    buf.push(c);
                }
            }
            _ => return None,
        }
    }
}

/// `word = token / quoted-string`
///
/// The token is tried first.
pub fn word<'a>(cursor: &mut Cursor<'a>) -> Option<Cow<'a, str>> {
    token(cursor)
        .map(Cow::Borrowed)
        .or_else(|| quoted_string(cursor))
}
