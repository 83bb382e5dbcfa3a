use hval_parse::{Cursor, Parser, ParserExt, first_available, literal_str_ignore_case};
use hval_utils::macros::error::static_str_error;
use std::fmt;

static_str_error! {
    /// The quality factor is not within `0..=1000` thousandths.
    pub struct InvalidQuality = "quality factor out of range";
}

/// A quality factor (`q`) in thousandths: `0` to `1000`.
///
/// The default is [`Quality::MAX`], the implied quality of a
/// preference without a `q` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
    /// `q=1`
    pub const MAX: Self = Self(1000);
    /// `q=0`, meaning "not acceptable".
    pub const MIN: Self = Self(0);

    /// Create a [`Quality`] from thousandths.
    pub const fn try_new(thousandths: u16) -> Result<Self, InvalidQuality> {
        if thousandths > 1000 {
            Err(InvalidQuality)
        } else {
            Ok(Self(thousandths))
        }
    }

    /// The quality in thousandths.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u16> for Quality {
    type Error = InvalidQuality;

    fn try_from(thousandths: u16) -> Result<Self, Self::Error> {
        Self::try_new(thousandths)
    }
}

impl From<Quality> for u16 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1000 => f.write_str("1"),
            0 => f.write_str("0"),
            mut value => {
                let mut width = 3;
                while value % 10 == 0 {
                    value /= 10;
                    width -= 1;
                }
                write!(f, "0.{value:0width$}")
            }
        }
    }
}

/// `qvalue = DIGIT [ "." 1*3DIGIT ]`, at most `1`.
pub fn qvalue(cursor: &mut Cursor<'_>) -> Option<Quality> {
    let start = cursor.position();
    let quality = read_qvalue(cursor);
    if quality.is_none() {
        cursor.set_position(start);
    }
    quality
}

fn read_qvalue(cursor: &mut Cursor<'_>) -> Option<Quality> {
    let mut thousandths = digit(cursor)? * 1000;
    if cursor.advance_if(|c| c == '.').is_some() {
        // a fraction has at least one digit
        let Some(first) = digit(cursor) else {
            cursor.pushback();
            return Quality::try_new(thousandths).ok();
        };
        thousandths += first * 100;
        let mut scale = 10;
        while scale > 0 {
            let Some(d) = digit(cursor) else {
                break;
            };
            thousandths += d * scale;
            scale /= 10;
        }
    }
    Quality::try_new(thousandths).ok()
}

fn digit(cursor: &mut Cursor<'_>) -> Option<u16> {
    let c = cursor.advance_if(|c| c.is_ascii_digit())?;
    c.to_digit(10).and_then(|d| u16::try_from(d).ok())
}

/// `weight = "q=" qvalue`, with a case-insensitive `q`.
pub fn q_param(cursor: &mut Cursor<'_>) -> Option<Quality> {
    (literal_str_ignore_case("q="), qvalue)
        .map(|(_, quality)| quality)
        .parse(cursor)
}

impl crate::Grammar for Quality {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        first_available((q_param, qvalue)).parse(cursor)
    }
}

impl_str_codec!(Quality);
