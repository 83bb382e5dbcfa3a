use hval_parse::char_class::{DIGIT, TCHAR};
use hval_parse::{
    CharClass, Cursor, Parser, ParserExt, Sequence, literal_char, quoted_string, while_matches1,
};
use hval_utils::macros::error::static_str_error;
use smol_str::SmolStr;
use std::fmt;

use super::HttpDate;
use crate::Grammar;
use crate::util::{is_quotable, write_quoted};

static_str_error! {
    /// The warn-code is not three digits, or the agent or text cannot be written.
    pub struct InvalidWarning = "invalid warning value";
}

const WARN_AGENT: CharClass = TCHAR.union(CharClass::set(b":[]"));

/// A single value of the (obsoleted, but still seen) `Warning` header.
///
/// ```text
/// Warning       = 1#warning-value
/// warning-value = warn-code SP warn-agent SP warn-text [ SP warn-date ]
/// warn-code     = 3DIGIT
/// warn-agent    = ( uri-host [ ":" port ] ) / pseudonym
/// warn-text     = quoted-string
/// warn-date     = DQUOTE HTTP-date DQUOTE
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarningValue {
    code: u16,
    agent: SmolStr,
    text: SmolStr,
    date: Option<HttpDate>,
}

impl WarningValue {
    /// `110 Response is Stale`
    pub const RESPONSE_IS_STALE: u16 = 110;
    /// `111 Revalidation Failed`
    pub const REVALIDATION_FAILED: u16 = 111;
    /// `112 Disconnected Operation`
    pub const DISCONNECTED_OPERATION: u16 = 112;
    /// `113 Heuristic Expiration`
    pub const HEURISTIC_EXPIRATION: u16 = 113;
    /// `199 Miscellaneous Warning`
    pub const MISCELLANEOUS_WARNING: u16 = 199;
    /// `214 Transformation Applied`
    pub const TRANSFORMATION_APPLIED: u16 = 214;
    /// `299 Miscellaneous Persistent Warning`
    pub const MISCELLANEOUS_PERSISTENT_WARNING: u16 = 299;

    /// Create a warning value without a date.
    pub fn new(code: u16, agent: &str, text: &str) -> Result<Self, InvalidWarning> {
        let valid = (100..=999).contains(&code)
            && !agent.is_empty()
            && agent.chars().all(|c| WARN_AGENT.contains(c))
            && is_quotable(text);
        if !valid {
            return Err(InvalidWarning);
        }
        Ok(Self {
            code,
            agent: SmolStr::new(agent),
            text: SmolStr::new(text),
            date: None,
        })
    }

    /// Set the date of this warning.
    #[must_use]
    pub fn with_date(mut self, date: HttpDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The three digit warn-code.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The host or pseudonym that added the warning.
    #[must_use]
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// The warning text, unquoted.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The warning date, if any.
    #[must_use]
    pub fn date(&self) -> Option<HttpDate> {
        self.date
    }
}

fn warn_code(cursor: &mut Cursor<'_>) -> Option<u16> {
    while_matches1(DIGIT)
        .map_opt(|digits: &str| {
            if digits.len() == 3 {
                digits.parse().ok()
            } else {
                None
            }
        })
        .parse(cursor)
}

fn warn_date(cursor: &mut Cursor<'_>) -> Option<HttpDate> {
    (literal_char('"'), HttpDate::parse_from, literal_char('"'))
        .map(|(_, date, _)| date)
        .parse(cursor)
}

impl Grammar for WarningValue {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let code = seq.read(warn_code)?;
        seq.read(literal_char(' '))?;
        let agent = seq.read(while_matches1(WARN_AGENT))?;
        seq.read(literal_char(' '))?;
        let text = seq.read(quoted_string)?;
        let date = seq.read_optional((literal_char(' '), warn_date).map(|(_, date)| date));
        seq.finish();
        Some(Self {
            code,
            agent: SmolStr::new(agent),
            text: SmolStr::new(text),
            date,
        })
    }
}

impl fmt::Display for WarningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.code, self.agent)?;
        write_quoted(f, &self.text)?;
        if let Some(date) = &self.date {
            write!(f, " \"{date}\"")?;
        }
        Ok(())
    }
}

impl_str_codec!(WarningValue);
