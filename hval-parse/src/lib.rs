//! Backtracking parser combinators for HTTP header values.
//!
//! Everything revolves around a single contract: a [`Parser`] that fails
//! leaves its [`Cursor`] where it found it. Scanners, sequences, lists and
//! alternations all uphold it, so grammar rules compose without any
//! bookkeeping of their own.
//!
//! ```
//! use hval_parse::{
//!     Cursor, Parser, ParserExt, Sequence, first_available, http_list,
//!     literal_char, parse_with, quoted_string, token,
//! };
//! use std::borrow::Cow;
//!
//! // `name [ "=" ( token / quoted-string ) ]`
//! fn directive<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, Option<Cow<'a, str>>)> {
//!     let mut seq = Sequence::new(cursor);
//!     let name = seq.read(token)?;
//!     let value = seq.read_optional(
//!         (literal_char('='), first_available((token.map(Cow::Borrowed), quoted_string)))
//!             .map(|(_, value)| value),
//!     );
//!     seq.finish();
//!     Some((name, value))
//! }
//!
//! let directives = parse_with(r#"no-cache, max-age=60, private="x-a""#, http_list(directive)).unwrap();
//! assert_eq!(directives.len(), 3);
//! assert_eq!(directives.last().1.as_deref(), Some("x-a"));
//! ```
//!
//! # hval
//!
//! Crate used by the end-user `hval` crate and `hval` crate authors alike.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod cursor;
#[doc(inline)]
pub use cursor::Cursor;

pub mod char_class;
#[doc(inline)]
pub use char_class::{CharClass, CharPredicate};

mod parser;
#[doc(inline)]
pub use parser::{
    Map, MapOpt, Optional, Parser, ParserExt, Peek, Recognize, eof, optional,
};

mod scanners;
#[doc(inline)]
pub use scanners::{
    CharMatching, LiteralChar, LiteralStr, WhileMatches, char_matching, digits, integer,
    literal_char, literal_str, literal_str_ignore_case, long, ows, quoted_string, rws, token,
    while_matches, while_matches1, word,
};

mod sequence;
#[doc(inline)]
pub use sequence::Sequence;

mod alt;
#[doc(inline)]
pub use alt::{FirstAvailable, first_available};

mod list;
#[doc(inline)]
pub use list::{HttpList, List, comma_separator, http_list, list, semicolon_separator};

mod parse_with;
#[doc(inline)]
pub use parse_with::{DEFAULT_MAX_INPUT_LEN, ParseError, ParseLimits, parse_with, parse_with_limits};

pub mod telemetry {
    //! Re-export of the logging facade used by hval.

    #[doc(inline)]
    pub use tracing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;

    /// Runs `parser` from every char boundary of `input`
    /// and checks that failures leave the cursor in place.
    fn restores_on_failure<'a, P: Parser<'a>>(input: &'a str, parser: P) -> bool {
        input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .all(|start| {
                let mut cursor = Cursor::new(input);
                cursor.set_position(start);
                match parser.parse(&mut cursor) {
                    Some(_) => cursor.position() >= start,
                    None => cursor.position() == start,
                }
            })
    }

    fn header_like(s: &str) -> String {
        // bias arbitrary strings towards header syntax
        s.chars()
            .map(|c| match u32::from(c) % 12 {
                0 => '"',
                1 => ',',
                2 => ' ',
                3 => '\\',
                4 => ';',
                5 => '=',
                _ => c,
            })
            .collect()
    }

    quickcheck! {
        fn scanners_backtrack(input: String) -> bool {
            let input = header_like(&input);
            let input = input.as_str();
            restores_on_failure(input, token)
                && restores_on_failure(input, rws)
                && restores_on_failure(input, digits)
                && restores_on_failure(input, integer)
                && restores_on_failure(input, long)
                && restores_on_failure(input, quoted_string)
                && restores_on_failure(input, word)
                && restores_on_failure(input, literal_str("no-"))
                && restores_on_failure(input, literal_str_ignore_case("Q="))
                && restores_on_failure(input, while_matches1(char_class::TOKEN68))
        }

        fn combinators_backtrack(input: String) -> bool {
            let input = header_like(&input);
            let input = input.as_str();
            let pair = (token, literal_char('='), word);
            restores_on_failure(input, pair)
                && restores_on_failure(input, list(pair, semicolon_separator))
                && restores_on_failure(input, list(word, comma_separator))
                && restores_on_failure(input, http_list(token))
                && restores_on_failure(input, first_available((
                    pair.map(|(n, _, _)| n),
                    token,
                )))
                && restores_on_failure(input, digits.map_opt(|d: &str| d.parse::<u8>().ok()))
                && restores_on_failure(input, |cursor: &mut Cursor<'_>| {
                    let mut seq = Sequence::new(cursor);
                    seq.read(token)?;
                    seq.read_optional(rws);
                    let rest = seq.read_while_available(comma_separator, token);
                    seq.read(literal_char(';'))?;
                    seq.finish();
                    Some(rest.len())
                })
        }

        fn quoted_string_roundtrip(content: String) -> TestResult {
            if !content.chars().all(|c| char_class::QUOTED_PAIR.contains(c)) {
                return TestResult::discard();
            }
            let mut quoted = String::from("\"");
            for c in content.chars() {
                if c == '"' || c == '\\' {
                    quoted.push('\\');
                }
                quoted.push(c);
            }
            quoted.push('"');
            TestResult::from_bool(
                parse_with(&quoted, quoted_string).as_deref() == Ok(content.as_str()),
            )
        }
    }
}
