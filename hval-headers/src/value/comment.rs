use hval_parse::Cursor;
use hval_parse::char_class::{CTEXT, QUOTED_PAIR};
use hval_utils::macros::error::static_str_error;
use smol_str::SmolStr;
use std::fmt::{self, Write as _};

use crate::Grammar;

static_str_error! {
    /// The text contains a character that cannot be written in a comment.
    pub struct InvalidComment = "invalid comment text";
}

/// Maximum nesting of comments within a comment.
pub const MAX_COMMENT_DEPTH: usize = 64;

/// A parenthesized comment, as found in `User-Agent`, `Server` and `Via`.
///
/// ```text
/// comment = "(" *( ctext / quoted-pair / comment ) ")"
/// ```
///
/// The text is stored unescaped and without the outer parentheses.
/// Nested comments keep their parentheses. On output every `(`, `)`
/// and `\` is escaped, which reads back as the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment(SmolStr);

impl Comment {
    /// Create a comment with the given text.
    pub fn new(text: &str) -> Result<Self, InvalidComment> {
        if text.chars().all(|c| QUOTED_PAIR.contains(c)) {
            Ok(Self(SmolStr::new(text)))
        } else {
            Err(InvalidComment)
        }
    }

    /// The unescaped text, without the outer parentheses.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

fn nested(cursor: &mut Cursor<'_>, text: &mut String, depth: usize) -> Option<()> {
    let start = cursor.position();
    let result = nested_inner(cursor, text, depth);
    if result.is_none() {
        cursor.set_position(start);
    }
    result
}

fn nested_inner(cursor: &mut Cursor<'_>, text: &mut String, depth: usize) -> Option<()> {
    if depth > MAX_COMMENT_DEPTH {
        return None;
    }
    cursor.advance_if(|c| c == '(')?;
    loop {
        match cursor.advance()? {
            ')' => return Some(()),
            '(' => {
                cursor.pushback();
                text.push('(');
                nested(cursor, text, depth + 1)?;
                text.push(')');
            }
            '\\' => text.push(cursor.advance_if(|c| QUOTED_PAIR.contains(c))?),
            c if CTEXT.contains(c) => text.push(c),
            _ => return None,
        }
    }
}

impl Grammar for Comment {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut text = String::new();
        nested(cursor, &mut text, 1)?;
        Some(Self(SmolStr::from(text)))
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        for c in self.0.chars() {
            if matches!(c, '(' | ')' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char(')')
    }
}

impl_str_codec!(Comment);
