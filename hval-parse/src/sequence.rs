use crate::{Cursor, Parser};
use hval_utils::macros::all_the_tuples_no_last_special_case;

/// An all-or-nothing chain of parsers over a single cursor.
///
/// The position at creation is the start of the chain. A failing
/// [`Sequence::read`] rewinds the cursor to that start and returns `None`,
/// so a grammar rule reads as a list of `?`-terminated steps. Dropping the
/// guard without [`Sequence::finish`] rewinds as well.
///
/// ```
/// use hval_parse::{Cursor, Sequence, comma_separator, literal_char, ows, token};
///
/// fn name_values<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, Vec<&'a str>)> {
///     let mut seq = Sequence::new(cursor);
///     let name = seq.read(token)?;
///     seq.read(literal_char(':'))?;
///     seq.read(ows)?;
///     let first = seq.read(token)?;
///     let mut values = vec![first];
///     values.extend(seq.read_while_available(comma_separator, token));
///     seq.finish();
///     Some((name, values))
/// }
///
/// let mut cursor = Cursor::new("vary: accept, accept-encoding,");
/// let (name, values) = name_values(&mut cursor).unwrap();
/// assert_eq!(name, "vary");
/// assert_eq!(values, ["accept", "accept-encoding"]);
/// assert_eq!(cursor.remaining(), ",");
///
/// let mut cursor = Cursor::new("vary accept");
/// assert!(name_values(&mut cursor).is_none());
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Debug)]
pub struct Sequence<'s, 'a> {
    cursor: &'s mut Cursor<'a>,
    start: usize,
    committed: bool,
}

impl<'s, 'a> Sequence<'s, 'a> {
    /// Start a new chain at the current cursor position.
    pub fn new(cursor: &'s mut Cursor<'a>) -> Self {
        let start = cursor.position();
        Self {
            cursor,
            start,
            committed: false,
        }
    }

    /// The position the chain started at.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Direct access to the cursor, for recursive grammar rules.
    ///
    /// The chain still rewinds to its start when it fails.
    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        self.cursor
    }

    /// Run a required step.
    ///
    /// On failure the whole chain is rewound to its start.
    pub fn read<P>(&mut self, parser: P) -> Option<P::Output>
    where
        P: Parser<'a>,
    {
        let output = parser.parse(self.cursor);
        if output.is_none() {
            self.cursor.set_position(self.start);
        }
        output
    }

    /// Run an optional step.
    ///
    /// A failing step produces `None` and only skips itself:
    /// the chain carries on from where the step started.
    pub fn read_optional<P>(&mut self, parser: P) -> Option<P::Output>
    where
        P: Parser<'a>,
    {
        parser.parse(self.cursor)
    }

    /// Repeatedly run `separator` then `item`, collecting the items.
    ///
    /// Stops the first time either fails, with the cursor rewound to
    /// before that separator. Never fails the chain, so the result
    /// may be empty.
    pub fn read_while_available<S, I>(&mut self, separator: S, item: I) -> Vec<I::Output>
    where
        S: Parser<'a>,
        I: Parser<'a>,
    {
        let mut items = Vec::new();
        loop {
            let before = self.cursor.position();
            if separator.parse(self.cursor).is_none() {
                break;
            }
            match item.parse(self.cursor) {
                Some(value) => items.push(value),
                None => {
                    self.cursor.set_position(before);
                    break;
                }
            }
        }
        items
    }

    /// Commit the chain, keeping everything consumed so far.
    pub fn finish(mut self) {
        self.committed = true;
    }
}

impl Drop for Sequence<'_, '_> {
    fn drop(&mut self) {
        if !self.committed {
            self.cursor.set_position(self.start);
        }
    }
}

macro_rules! impl_parser_tuple {
    ($($ty:ident),+ $(,)?) => {
        #[expect(non_snake_case)]
        impl<'a, $($ty),+> Parser<'a> for ($($ty),+,)
            where $($ty: Parser<'a>),+
        {
            type Output = ($($ty::Output),+,);

            fn parse(&self, cursor: &mut Cursor<'a>) -> Option<Self::Output> {
                let ($($ty),+,) = self;
                let start = cursor.position();
                $(
                    let Some($ty) = $ty.parse(cursor) else {
                        cursor.set_position(start);
                        return None;
                    };
                )+
                Some(($($ty),+,))
            }
        }
    };
}

all_the_tuples_no_last_special_case!(impl_parser_tuple);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, literal_char, optional, ows, rws, token};

    #[test]
    fn test_read_failure_rewinds_to_chain_start() {
        let mut cursor = Cursor::new("max-age=abc");
        let mut seq = Sequence::new(&mut cursor);
        assert_eq!(seq.read(token), Some("max-age"));
        assert_eq!(seq.read(literal_char('=')), Some('='));
        assert_eq!(seq.read(integer), None);
        drop(seq);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_drop_without_finish_rewinds() {
        let mut cursor = Cursor::new("private, no-cache");
        {
            let mut seq = Sequence::new(&mut cursor);
            assert_eq!(seq.read(token), Some("private"));
        }
        assert_eq!(cursor.position(), 0);

        let mut seq = Sequence::new(&mut cursor);
        assert_eq!(seq.read(token), Some("private"));
        seq.finish();
        assert_eq!(cursor.remaining(), ", no-cache");
    }

    #[test]
    fn test_read_optional_skips_only_its_slot() {
        let mut cursor = Cursor::new("HTTP/1.1 proxy");
        let mut seq = Sequence::new(&mut cursor);
        let name = seq.read_optional((token, literal_char('/')));
        assert_eq!(name, Some(("HTTP", '/')));
        let missing = seq.read_optional(literal_char(';'));
        assert_eq!(missing, None);
        assert_eq!(seq.read(token), Some("1.1"));
        seq.finish();
        assert_eq!(cursor.remaining(), " proxy");
    }

    #[test]
    fn test_read_while_available() {
        let sep = (ows, literal_char(','), ows);
        for (input, expected, rest) in [
            ("a", vec![], ""),
            ("a, b , c", vec!["b", "c"], ""),
            ("a, b,", vec!["b"], ","),
            ("a, b, ;", vec!["b"], ", ;"),
        ] {
            let mut cursor = Cursor::new(input);
            let mut seq = Sequence::new(&mut cursor);
            assert_eq!(seq.read(token), Some("a"));
            assert_eq!(seq.read_while_available(sep, token), expected, "input: {input}");
            seq.finish();
            assert_eq!(cursor.remaining(), rest, "input: {input}");
        }
    }

    #[test]
    fn test_tuple_sequence_is_all_or_nothing() {
        let parser = (token, rws, token, optional(literal_char(';')));

        let mut cursor = Cursor::new("1.1 example.com;");
        assert_eq!(
            parser.parse(&mut cursor),
            Some(("1.1", " ", "example.com", Some(';')))
        );
        assert!(cursor.is_at_end());

        let mut cursor = Cursor::new("1.1 ;");
        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_single_and_large_tuples() {
        let mut cursor = Cursor::new("x");
        assert_eq!((token,).parse(&mut cursor), Some(("x",)));

        let c = literal_char('c');
        let mut cursor = Cursor::new("cccccccccccc");
        let twelve = (c, c, c, c, c, c, c, c, c, c, c, c);
        assert!(twelve.parse(&mut cursor).is_some());
        assert!(cursor.is_at_end());

        let mut cursor = Cursor::new("ccccccccccc");
        assert!(twelve.parse(&mut cursor).is_none());
        assert_eq!(cursor.position(), 0);
    }
}
