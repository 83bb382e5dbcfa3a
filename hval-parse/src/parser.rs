use crate::Cursor;

/// A parser over a [`Cursor`].
///
/// # Contract
///
/// A parser that returns `None` leaves the cursor at the position it had
/// when [`Parser::parse`] was called. Every combinator in this crate relies
/// on it: alternation and optional slots retry from the same position
/// without remembering anything themselves.
///
/// Any `Fn(&mut Cursor<'a>) -> Option<T>` is a parser, so grammar rules
/// are usually plain functions:
///
/// ```
/// use hval_parse::{Cursor, Parser, ParserExt, literal_char, token};
///
/// fn pair<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
///     (token, literal_char('='), token)
///         .map(|(name, _, value)| (name, value))
///         .parse(cursor)
/// }
///
/// let mut cursor = Cursor::new("charset=utf-8");
/// assert_eq!(pair(&mut cursor), Some(("charset", "utf-8")));
/// assert!(cursor.is_at_end());
/// ```
pub trait Parser<'a> {
    /// The value produced on success.
    type Output;

    /// Parse from the current position of the cursor.
    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<Self::Output>;
}

impl<'a, F, T> Parser<'a> for F
where
    F: Fn(&mut Cursor<'a>) -> Option<T>,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<T> {
        self(cursor)
    }
}

/// Adapters available on every [`Parser`].
pub trait ParserExt<'a>: Parser<'a> + Sized {
    /// Transform the output of a successful parse.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }

    /// Transform the output, failing (and restoring the cursor)
    /// when `f` returns `None`.
    fn map_opt<F, U>(self, f: F) -> MapOpt<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        MapOpt { parser: self, f }
    }

    /// Succeed with the slice of input consumed by this parser,
    /// discarding its output.
    fn recognize(self) -> Recognize<Self> {
        Recognize(self)
    }

    /// Never fail: produce `None` when this parser does not match.
    fn optional(self) -> Optional<Self> {
        Optional(self)
    }

    /// Run this parser without consuming any input on success.
    fn peek(self) -> Peek<Self> {
        Peek(self)
    }
}

impl<'a, P> ParserExt<'a> for P where P: Parser<'a> {}

/// See [`ParserExt::map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F, U> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<U> {
        self.parser.parse(cursor).map(&self.f)
    }
}

/// See [`ParserExt::map_opt`].
#[derive(Debug, Clone, Copy)]
pub struct MapOpt<P, F> {
    parser: P,
    f: F,
}

impl<'a, P, F, U> Parser<'a> for MapOpt<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<U> {
        let start = cursor.position();
        let output = self.parser.parse(cursor).and_then(&self.f);
        if output.is_none() {
            cursor.set_position(start);
        }
        output
    }
}

/// See [`ParserExt::recognize`].
#[derive(Debug, Clone, Copy)]
pub struct Recognize<P>(P);

impl<'a, P> Parser<'a> for Recognize<P>
where
    P: Parser<'a>,
{
    type Output = &'a str;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let start = cursor.position();
        self.0.parse(cursor)?;
        Some(cursor.consumed_since(start))
    }
}

/// See [`ParserExt::optional`] and [`optional`].
#[derive(Debug, Clone, Copy)]
pub struct Optional<P>(P);

impl<'a, P> Parser<'a> for Optional<P>
where
    P: Parser<'a>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<Self::Output> {
        Some(self.0.parse(cursor))
    }
}

/// Wrap a parser so that a failed match produces `None`
/// instead of failing the enclosing grammar.
pub fn optional<'a, P>(parser: P) -> Optional<P>
where
    P: Parser<'a>,
{
    Optional(parser)
}

/// See [`ParserExt::peek`].
#[derive(Debug, Clone, Copy)]
pub struct Peek<P>(P);

impl<'a, P> Parser<'a> for Peek<P>
where
    P: Parser<'a>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<P::Output> {
        let start = cursor.position();
        let output = self.0.parse(cursor)?;
        cursor.set_position(start);
        Some(output)
    }
}

/// Succeeds without consuming anything, only at the end of the input.
pub fn eof(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.is_at_end().then_some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digits, literal_char, token};

    #[test]
    fn test_closure_parser() {
        let any = |cursor: &mut Cursor<'_>| cursor.advance();
        let mut cursor = Cursor::new("xy");
        assert_eq!(any.parse(&mut cursor), Some('x'));
        assert_eq!(any.parse(&mut cursor), Some('y'));
        assert_eq!(any.parse(&mut cursor), None);
    }

    #[test]
    fn test_map_opt_restores() {
        let small = digits.map_opt(|s: &str| s.parse::<u8>().ok());
        let mut cursor = Cursor::new("1000");
        assert_eq!(small.parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("200;");
        assert_eq!(small.parse(&mut cursor), Some(200));
        assert_eq!(cursor.remaining(), ";");
    }

    #[test]
    fn test_recognize() {
        let mut cursor = Cursor::new("a=b;c");
        let pair = (token, literal_char('='), token).recognize();
        assert_eq!(pair.parse(&mut cursor), Some("a=b"));
        assert_eq!(cursor.remaining(), ";c");
    }

    #[test]
    fn test_optional_never_fails() {
        let mut cursor = Cursor::new(";");
        assert_eq!(optional(token).parse(&mut cursor), Some(None));
        assert_eq!(cursor.position(), 0);
        assert_eq!(
            literal_char(';').optional().parse(&mut cursor),
            Some(Some(';'))
        );
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_and_eof() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(token.peek().parse(&mut cursor), Some("abc"));
        assert_eq!(cursor.position(), 0);
        assert_eq!(eof(&mut cursor), None);
        token(&mut cursor);
        assert_eq!(eof(&mut cursor), Some(()));
    }
}
