use crate::{Cursor, Parser};
use std::error;
use std::fmt::{self, Display, Formatter};

/// Default for [`ParseLimits::max_input_len`], in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 8 * 1024;

/// Limits applied by [`parse_with_limits`] before any parsing happens.
///
/// Parsing time is bounded by the input length, so capping the length
/// of a header value bounds the work done on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    max_input_len: usize,
}

impl ParseLimits {
    /// Create [`ParseLimits`] with the default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Maximum input length in bytes.
    #[must_use]
    pub const fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Set the maximum input length in bytes.
    #[must_use]
    pub const fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// Set the maximum input length in bytes.
    pub fn set_max_input_len(&mut self, max: usize) -> &mut Self {
        self.max_input_len = max;
        self
    }

    /// No limits at all.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_input_len: usize::MAX,
        }
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// The error returned when a complete input could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    NoMatch,
    TrailingInput { position: usize },
    TooLong { len: usize, max: usize },
}

impl ParseError {
    /// Create a 'no match' error.
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            kind: Kind::NoMatch,
        }
    }

    /// Create a 'trailing input' error for input left at `position`.
    #[must_use]
    pub const fn trailing_input(position: usize) -> Self {
        Self {
            kind: Kind::TrailingInput { position },
        }
    }

    /// Create a 'too long' error.
    #[must_use]
    pub const fn too_long(len: usize, max: usize) -> Self {
        Self {
            kind: Kind::TooLong { len, max },
        }
    }

    /// The grammar did not match the start of the input.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self.kind, Kind::NoMatch)
    }

    /// The grammar matched but left input unconsumed.
    #[must_use]
    pub const fn is_trailing_input(&self) -> bool {
        matches!(self.kind, Kind::TrailingInput { .. })
    }

    /// The input exceeded [`ParseLimits::max_input_len`].
    #[must_use]
    pub const fn is_too_long(&self) -> bool {
        matches!(self.kind, Kind::TooLong { .. })
    }

    /// Byte offset of the first unconsumed character,
    /// for a 'trailing input' error.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self.kind {
            Kind::TrailingInput { position } => Some(position),
            Kind::NoMatch | Kind::TooLong { .. } => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            Kind::NoMatch => f.write_str("invalid header value: no match"),
            Kind::TrailingInput { position } => {
                write!(f, "invalid header value: unexpected input at {position}")
            }
            Kind::TooLong { len, max } => {
                write!(f, "invalid header value: {len} bytes exceeds limit of {max}")
            }
        }
    }
}

impl error::Error for ParseError {}

/// Parse all of `input` with `parser`, using the default [`ParseLimits`].
///
/// Fails when the parser does not match, or matches
/// without consuming the complete input.
///
/// ```
/// use hval_parse::{comma_separator, list, parse_with, token};
///
/// let values = parse_with("gzip, br", list(token, comma_separator)).unwrap();
/// assert_eq!(values.len(), 2);
///
/// let err = parse_with("gzip, br;", list(token, comma_separator)).unwrap_err();
/// assert_eq!(err.position(), Some(8));
/// ```
pub fn parse_with<'a, P>(input: &'a str, parser: P) -> Result<P::Output, ParseError>
where
    P: Parser<'a>,
{
    parse_with_limits(input, parser, ParseLimits::default())
}

/// Parse all of `input` with `parser`, enforcing `limits` first.
pub fn parse_with_limits<'a, P>(
    input: &'a str,
    parser: P,
    limits: ParseLimits,
) -> Result<P::Output, ParseError>
where
    P: Parser<'a>,
{
    if input.len() > limits.max_input_len {
        tracing::trace!(
            len = input.len(),
            max = limits.max_input_len,
            "header value exceeds parse limits",
        );
        return Err(ParseError::too_long(input.len(), limits.max_input_len));
    }

    let mut cursor = Cursor::new(input);
    let Some(output) = parser.parse(&mut cursor) else {
        tracing::trace!(input, "header value did not match grammar");
        return Err(ParseError::no_match());
    };
    if !cursor.is_at_end() {
        tracing::trace!(
            input,
            position = cursor.position(),
            "header value has trailing input",
        );
        return Err(ParseError::trailing_input(cursor.position()));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, token};
    use tracing_test::traced_test;

    #[test]
    fn test_parse_with() {
        assert_eq!(parse_with("42", integer), Ok(42));

        let err = parse_with("", integer).unwrap_err();
        assert!(err.is_no_match());
        assert_eq!(err.position(), None);

        let err = parse_with("42 ", integer).unwrap_err();
        assert!(err.is_trailing_input());
        assert_eq!(err.position(), Some(2));
        assert_eq!(err.to_string(), "invalid header value: unexpected input at 2");
    }

    #[test]
    fn test_parse_with_limits() {
        let long = "a".repeat(DEFAULT_MAX_INPUT_LEN + 1);
        let err = parse_with(&long, token).unwrap_err();
        assert!(err.is_too_long());

        let limits = ParseLimits::new().with_max_input_len(4);
        assert!(parse_with_limits("abcde", token, limits).unwrap_err().is_too_long());
        assert_eq!(parse_with_limits("abcd", token, limits), Ok("abcd"));

        let mut limits = ParseLimits::default();
        limits.set_max_input_len(usize::MAX);
        assert_eq!(limits, ParseLimits::unlimited());
        assert_eq!(parse_with_limits(&long, token, limits).map(str::len), Ok(long.len()));
    }

    #[test]
    #[traced_test]
    fn test_parse_with_logs_trailing_position() {
        assert!(parse_with("no-cache;", token).is_err());
        assert!(logs_contain("header value has trailing input"));
        assert!(logs_contain("position=8"));
    }
}
