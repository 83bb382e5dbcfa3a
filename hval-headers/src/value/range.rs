use hval_parse::{
    Cursor, Parser, ParserExt, Sequence, first_available, http_list, literal_char, literal_str,
    literal_str_ignore_case, long, optional,
};
use hval_utils::collections::NonEmptyVec;
use hval_utils::macros::error::static_str_error;
use std::fmt;
use std::ops::RangeInclusive;

use crate::Grammar;
use crate::util::write_list;

static_str_error! {
    /// A byte range whose last position precedes its first,
    /// or which does not fit the complete length.
    pub struct InvalidByteRange = "invalid byte range";
}

/// A single `int-range` or `suffix-range` of a `Range` header.
///
/// ```text
/// int-range    = first-pos "-" [ last-pos ]
/// suffix-range = "-" suffix-length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteRangeSpec {
    /// `first-last`, both inclusive.
    FromTo(u64, u64),
    /// `first-`, up to the end of the representation.
    From(u64),
    /// `-n`, the last `n` bytes of the representation.
    Last(u64),
}

impl ByteRangeSpec {
    /// Create a `first-last` range.
    pub fn from_to(first: u64, last: u64) -> Result<Self, InvalidByteRange> {
        if first <= last {
            Ok(Self::FromTo(first, last))
        } else {
            Err(InvalidByteRange)
        }
    }

    /// Resolve this range against a representation of `len` bytes.
    ///
    /// Returns `None` when the range is not satisfiable.
    ///
    /// ```
    /// use hval_headers::value::ByteRangeSpec;
    ///
    /// assert_eq!(ByteRangeSpec::FromTo(0, 499).resolve(200), Some(0..=199));
    /// assert_eq!(ByteRangeSpec::From(100).resolve(200), Some(100..=199));
    /// assert_eq!(ByteRangeSpec::Last(500).resolve(200), Some(0..=199));
    /// assert_eq!(ByteRangeSpec::From(200).resolve(200), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, len: u64) -> Option<RangeInclusive<u64>> {
        let end = len.checked_sub(1)?;
        match *self {
            Self::FromTo(first, last) if first <= end => Some(first..=last.min(end)),
            Self::From(first) if first <= end => Some(first..=end),
            Self::Last(n) if n > 0 => Some(len.saturating_sub(n)..=end),
            _ => None,
        }
    }
}

fn int_range(cursor: &mut Cursor<'_>) -> Option<ByteRangeSpec> {
    (long, literal_char('-'), optional(long))
        .map_opt(|(first, _, last)| match last {
            Some(last) => ByteRangeSpec::from_to(first, last).ok(),
            None => Some(ByteRangeSpec::From(first)),
        })
        .parse(cursor)
}

fn suffix_range(cursor: &mut Cursor<'_>) -> Option<ByteRangeSpec> {
    (literal_char('-'), long)
        .map(|(_, n)| ByteRangeSpec::Last(n))
        .parse(cursor)
}

impl Grammar for ByteRangeSpec {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        first_available((int_range, suffix_range)).parse(cursor)
    }
}

impl fmt::Display for ByteRangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromTo(first, last) => write!(f, "{first}-{last}"),
            Self::From(first) => write!(f, "{first}-"),
            Self::Last(n) => write!(f, "-{n}"),
        }
    }
}

impl_str_codec!(ByteRangeSpec);

/// The `bytes` ranges requested by a `Range` header.
///
/// ```text
/// Range = ranges-specifier
/// ranges-specifier = "bytes" "=" 1#range-spec
/// ```
///
/// ```
/// use hval_headers::value::{ByteRangeSpec, Range};
///
/// let range: Range = "bytes=0-499, -500".parse().unwrap();
/// assert_eq!(range.iter().copied().collect::<Vec<_>>(), [
///     ByteRangeSpec::FromTo(0, 499),
///     ByteRangeSpec::Last(500),
/// ]);
/// assert_eq!(range.satisfiable_ranges(800).collect::<Vec<_>>(), [0..=499, 300..=799]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    specs: NonEmptyVec<ByteRangeSpec>,
}

impl Range {
    /// A range over a single [`ByteRangeSpec`].
    #[must_use]
    pub fn new(spec: ByteRangeSpec) -> Self {
        Self {
            specs: NonEmptyVec::new(spec),
        }
    }

    /// A range over multiple [`ByteRangeSpec`] values, in order.
    #[must_use]
    pub fn from_specs(specs: NonEmptyVec<ByteRangeSpec>) -> Self {
        Self { specs }
    }

    /// `bytes=first-last`
    pub fn bytes(first: u64, last: u64) -> Result<Self, InvalidByteRange> {
        ByteRangeSpec::from_to(first, last).map(Self::new)
    }

    /// Iterate over the requested ranges, in order.
    pub fn iter(&self) -> impl Iterator<Item = &ByteRangeSpec> {
        self.specs.iter()
    }

    /// The requested ranges, resolved against a representation of `len`
    /// bytes, skipping the unsatisfiable ones.
    pub fn satisfiable_ranges(&self, len: u64) -> impl Iterator<Item = RangeInclusive<u64>> + '_ {
        self.specs.iter().filter_map(move |spec| spec.resolve(len))
    }
}

impl Grammar for Range {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        (literal_str_ignore_case("bytes="), http_list(ByteRangeSpec::parse_from))
            .map(|(_, specs)| Self { specs })
            .parse(cursor)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bytes=")?;
        write_list(f, &self.specs)
    }
}

impl_str_codec!(Range);

/// The range of a partial response, as sent in a `Content-Range` header.
///
/// ```text
/// Content-Range       = range-unit SP ( range-resp / unsatisfied-range )
/// range-resp          = incl-range "/" ( complete-length / "*" )
/// incl-range          = first-pos "-" last-pos
/// unsatisfied-range   = "*/" complete-length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRange {
    range: Option<(u64, u64)>,
    complete_length: Option<u64>,
}

impl ContentRange {
    /// `bytes first-last/complete_length`, with `*` for an unknown length.
    pub fn bytes(
        range: RangeInclusive<u64>,
        complete_length: Option<u64>,
    ) -> Result<Self, InvalidByteRange> {
        let (first, last) = range.into_inner();
        let value = Self {
            range: Some((first, last)),
            complete_length,
        };
        if value.is_valid() {
            Ok(value)
        } else {
            Err(InvalidByteRange)
        }
    }

    /// `bytes */complete_length`, sent along with `416 Range Not Satisfiable`.
    #[must_use]
    pub const fn unsatisfied_bytes(complete_length: u64) -> Self {
        Self {
            range: None,
            complete_length: Some(complete_length),
        }
    }

    /// The range included in the response, if any.
    #[must_use]
    pub fn bytes_range(&self) -> Option<RangeInclusive<u64>> {
        self.range.map(|(first, last)| first..=last)
    }

    /// The length of the complete representation, if known.
    #[must_use]
    pub const fn complete_length(&self) -> Option<u64> {
        self.complete_length
    }

    fn is_valid(&self) -> bool {
        match (self.range, self.complete_length) {
            (Some((first, last)), Some(len)) => first <= last && last < len,
            (Some((first, last)), None) => first <= last,
            (None, Some(_)) => true,
            (None, None) => false,
        }
    }
}

fn complete_length(cursor: &mut Cursor<'_>) -> Option<Option<u64>> {
    first_available((long.map(Some), literal_char('*').map(|_| None))).parse(cursor)
}

impl Grammar for ContentRange {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        seq.read(literal_str_ignore_case("bytes "))?;
        let range = seq.read(first_available((
            (long, literal_char('-'), long).map(|(first, _, last)| Some((first, last))),
            literal_str("*").map(|_| None),
        )))?;
        seq.read(literal_char('/'))?;
        let complete_length = seq.read(complete_length)?;
        let value = Self {
            range,
            complete_length,
        };
        if !value.is_valid() {
            return None;
        }
        seq.finish();
        Some(value)
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bytes ")?;
        match self.range {
            Some((first, last)) => write!(f, "{first}-{last}/")?,
            None => f.write_str("*/")?,
        }
        match self.complete_length {
            Some(len) => write!(f, "{len}"),
            None => f.write_str("*"),
        }
    }
}

impl_str_codec!(ContentRange);
