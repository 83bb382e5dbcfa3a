use crate::{Cursor, Parser, Sequence, literal_char, ows};
use hval_utils::collections::NonEmptyVec;

/// `item *( separator item )`
///
/// Stops cleanly before the first separator that is not followed by an
/// item. Fails only when the first item does.
pub fn list<'a, I, S>(item: I, separator: S) -> List<I, S>
where
    I: Parser<'a>,
    S: Parser<'a>,
{
    List { item, separator }
}

/// See [`list`].
#[derive(Debug, Clone, Copy)]
pub struct List<I, S> {
    item: I,
    separator: S,
}

impl<'a, I, S> Parser<'a> for List<I, S>
where
    I: Parser<'a>,
    S: Parser<'a>,
{
    type Output = NonEmptyVec<I::Output>;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<Self::Output> {
        let mut seq = Sequence::new(cursor);
        let head = seq.read(|c: &mut Cursor<'a>| self.item.parse(c))?;
        let tail = seq.read_while_available(
            |c: &mut Cursor<'a>| self.separator.parse(c),
            |c: &mut Cursor<'a>| self.item.parse(c),
        );
        seq.finish();
        Some(NonEmptyVec { head, tail })
    }
}

/// `OWS "," OWS`
pub fn comma_separator(cursor: &mut Cursor<'_>) -> Option<()> {
    (ows, literal_char(','), ows).parse(cursor).map(|_| ())
}

/// `OWS ";" OWS`
pub fn semicolon_separator(cursor: &mut Cursor<'_>) -> Option<()> {
    (ows, literal_char(';'), ows).parse(cursor).map(|_| ())
}

/// An HTTP `1#element` list.
///
/// Like [`list`] with [`comma_separator`], but empty list elements are
/// tolerated as RFC 9110 section 5.6.1.2 asks of recipients:
/// `", a ,, b"` yields `a` and `b`. At least one element is required.
pub fn http_list<'a, I>(item: I) -> HttpList<I>
where
    I: Parser<'a>,
{
    HttpList(item)
}

/// See [`http_list`].
#[derive(Debug, Clone, Copy)]
pub struct HttpList<I>(I);

impl<'a, I> Parser<'a> for HttpList<I>
where
    I: Parser<'a>,
{
    type Output = NonEmptyVec<I::Output>;

    fn parse(&self, cursor: &mut Cursor<'a>) -> Option<Self::Output> {
        let start = cursor.position();

        // *( "," OWS ) element
        while (literal_char(','), ows).parse(cursor).is_some() {}
        let Some(head) = self.0.parse(cursor) else {
            cursor.set_position(start);
            return None;
        };

        // *( OWS "," [ OWS element ] )
        let mut tail = Vec::new();
        loop {
            let before = cursor.position();
            if (ows, literal_char(',')).parse(cursor).is_none() {
                cursor.set_position(before);
                break;
            }
            let after_comma = cursor.position();
            ows(cursor);
            match self.0.parse(cursor) {
                Some(value) => tail.push(value),
                None => cursor.set_position(after_comma),
            }
        }

        Some(NonEmptyVec { head, tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, token};
    use hval_utils::collections::non_empty_vec;

    #[test]
    fn test_list_boundaries() {
        let parser = list(token, comma_separator);

        let mut cursor = Cursor::new("");
        assert_eq!(parser.parse(&mut cursor), None);

        let mut cursor = Cursor::new("a");
        assert_eq!(parser.parse(&mut cursor), Some(non_empty_vec!["a"]));

        let mut cursor = Cursor::new("a, b, c");
        assert_eq!(parser.parse(&mut cursor), Some(non_empty_vec!["a", "b", "c"]));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_list_stops_before_dangling_separator() {
        let parser = list(integer, semicolon_separator);
        let mut cursor = Cursor::new("1;2 ; 3;x");
        assert_eq!(parser.parse(&mut cursor), Some(non_empty_vec![1, 2, 3]));
        assert_eq!(cursor.remaining(), ";x");

        let mut cursor = Cursor::new(";1");
        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_http_list_tolerates_empty_elements() {
        for (input, expected, rest) in [
            ("a", Some(non_empty_vec!["a"]), ""),
            ("a, b", Some(non_empty_vec!["a", "b"]), ""),
            (", a ,, b", Some(non_empty_vec!["a", "b"]), ""),
            (",,a,", Some(non_empty_vec!["a"]), ""),
            ("a , ", Some(non_empty_vec!["a"]), " "),
            ("a;b", Some(non_empty_vec!["a"]), ";b"),
            ("", None, ""),
            (",", None, ","),
            (", ,", None, ", ,"),
        ] {
            let mut cursor = Cursor::new(input);
            assert_eq!(http_list(token).parse(&mut cursor), expected, "input: {input:?}");
            assert_eq!(cursor.remaining(), rest, "input: {input:?}");
        }
    }
}
