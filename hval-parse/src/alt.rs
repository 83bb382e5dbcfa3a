use crate::{Cursor, Parser};
use hval_utils::macros::all_the_tuples_from_two;

/// Ordered alternation over a tuple of parsers with the same output.
///
/// Each candidate is tried from the same start position and the first
/// one that matches wins. There is no longest-match rule: the order of
/// the tuple is the precedence of the grammar.
///
/// ```
/// use hval_parse::{Cursor, Parser, ParserExt, first_available, literal_char, token};
///
/// let star_or_token = first_available((
///     literal_char('*').map(|_| None),
///     token.map(Some),
/// ));
///
/// let mut cursor = Cursor::new("*");
/// assert_eq!(star_or_token.parse(&mut cursor), Some(None));
///
/// let mut cursor = Cursor::new("en");
/// assert_eq!(star_or_token.parse(&mut cursor), Some(Some("en")));
/// ```
pub fn first_available<T>(candidates: T) -> FirstAvailable<T> {
    FirstAvailable(candidates)
}

/// See [`first_available`].
#[derive(Debug, Clone, Copy)]
pub struct FirstAvailable<T>(T);

macro_rules! impl_first_available {
    ($($ty:ident),+ $(,)?) => {
        #[expect(non_snake_case)]
        impl<'a, O, $($ty),+> Parser<'a> for FirstAvailable<($($ty),+,)>
            where $($ty: Parser<'a, Output = O>),+
        {
            type Output = O;

            fn parse(&self, cursor: &mut Cursor<'a>) -> Option<O> {
                let ($($ty),+,) = &self.0;
                $(
                    if let Some(output) = $ty.parse(cursor) {
                        return Some(output);
                    }
                )+
                None
            }
        }
    };
}

all_the_tuples_from_two!(impl_first_available);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParserExt, literal_char, literal_str, quoted_string, token, while_matches1};
    use crate::char_class::TOKEN68;
    use std::borrow::Cow;

    #[test]
    fn test_first_declared_candidate_wins() {
        // both candidates match a prefix of "abc=="
        let token_first = first_available((
            token.map(|s| ("token", s)),
            while_matches1(TOKEN68).recognize().map(|s| ("token68", s)),
        ));
        let token68_first = first_available((
            while_matches1(TOKEN68).recognize().map(|s| ("token68", s)),
            token.map(|s| ("token", s)),
        ));

        let mut cursor = Cursor::new("abc/d==");
        assert_eq!(token_first.parse(&mut cursor), Some(("token", "abc")));
        let mut cursor = Cursor::new("abc/d==");
        assert_eq!(token68_first.parse(&mut cursor), Some(("token68", "abc/d")));
    }

    #[test]
    fn test_all_fail_leaves_cursor_unmoved() {
        let parser = first_available((
            literal_str("bytes").map(Cow::Borrowed),
            quoted_string,
            (literal_char('<'), token).map(|(_, t)| Cow::Borrowed(t)),
        ));
        let mut cursor = Cursor::new("<\"x");
        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("\"x\"");
        assert_eq!(parser.parse(&mut cursor).as_deref(), Some("x"));
    }
}
