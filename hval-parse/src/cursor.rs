/// A position within an in-memory header value.
///
/// The position is a byte offset into the input that always sits on a
/// `char` boundary, with `input.len()` meaning end of input. Parsers move
/// it forward one code point at a time using [`Cursor::advance`] and
/// rewind it with [`Cursor::set_position`] when they fail.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    // position before the last `advance`, cleared once used
    last_advance: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            last_advance: None,
        }
    }

    /// The complete input this cursor walks over.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Rewind (or forward) the cursor to an earlier observed position.
    ///
    /// # Panics
    ///
    /// Panics when `position` is past the end of the input
    /// or does not sit on a `char` boundary.
    pub fn set_position(&mut self, position: usize) {
        assert!(
            self.input.is_char_boundary(position),
            "cursor position {position} out of range or not on a char boundary (len = {})",
            self.input.len(),
        );
        self.position = position;
        self.last_advance = None;
    }

    /// The next code point, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the next code point.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.last_advance = Some(self.position);
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consume the next code point if it satisfies `f`.
    pub fn advance_if(&mut self, f: impl FnOnce(char) -> bool) -> Option<char> {
        let c = self.peek()?;
        if f(c) { self.advance() } else { None }
    }

    /// Undo the last [`Cursor::advance`].
    ///
    /// This is a single step undo, not a general rewind.
    ///
    /// # Panics
    ///
    /// Panics when nothing was consumed since the last pushback
    /// or the last call to [`Cursor::set_position`].
    pub fn pushback(&mut self) {
        let previous = self.last_advance.take();
        assert!(
            previous.is_some(),
            "pushback without a preceding advance (position = {})",
            self.position,
        );
        if let Some(position) = previous {
            self.position = position;
        }
    }

    /// Returns true once every code point was consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position == self.input.len()
    }

    /// The input that is not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.position..).unwrap_or_default()
    }

    /// The input between two observed positions.
    ///
    /// Returns an empty string for a range that is not valid for the input.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        self.input.get(from..to).unwrap_or_default()
    }

    /// The input consumed since the observed position `from`.
    #[must_use]
    pub fn consumed_since(&self, from: usize) -> &'a str {
        self.slice(from, self.position)
    }
}
