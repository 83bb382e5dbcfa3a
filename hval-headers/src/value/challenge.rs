use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hval_parse::char_class::TOKEN68;
use hval_parse::{
    Cursor, Parser, ParserExt, Sequence, comma_separator, eof, first_available, list, literal_char,
    ows, token, while_matches, while_matches1, word,
};
use hval_utils::macros::error::static_str_error;
use smol_str::SmolStr;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Parameters;
use crate::Grammar;
use crate::util::{is_token, write_quoted};

static_str_error! {
    /// The scheme is not a token, or the token68 is malformed.
    pub struct InvalidChallenge = "invalid authentication challenge or credentials";
}

/// What follows the scheme of a [`ChallengeMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChallengeContent {
    /// Nothing but the scheme.
    None,
    /// A single `token68` blob, such as base64 encoded credentials.
    Token68(SmolStr),
    /// A non-empty list of `name=value` auth-params.
    Params(Parameters),
}

/// An authentication challenge (`WWW-Authenticate`) or
/// credentials (`Authorization`): both share one grammar.
///
/// ```text
/// challenge   = auth-scheme [ 1*SP ( token68 / #auth-param ) ]
/// auth-param  = token BWS "=" BWS ( token / quoted-string )
/// token68     = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
/// ```
///
/// A `token68` is tried first, and only accepted when nothing but
/// whitespace separates it from the end of the input or a `,`.
/// The scheme is compared case-insensitively.
#[derive(Debug, Clone)]
pub struct ChallengeMessage {
    scheme: SmolStr,
    content: ChallengeContent,
}

impl ChallengeMessage {
    /// Create a message with only a scheme.
    pub fn new(scheme: &str) -> Result<Self, InvalidChallenge> {
        if !is_token(scheme) {
            return Err(InvalidChallenge);
        }
        Ok(Self {
            scheme: SmolStr::new(scheme),
            content: ChallengeContent::None,
        })
    }

    /// Create a message carrying a `token68`.
    pub fn with_token68(scheme: &str, token68: &str) -> Result<Self, InvalidChallenge> {
        let mut message = Self::new(scheme)?;
        if !is_token68(token68) {
            return Err(InvalidChallenge);
        }
        message.content = ChallengeContent::Token68(SmolStr::new(token68));
        Ok(message)
    }

    /// Create a message carrying auth-params.
    ///
    /// Empty parameters create a message with only a scheme.
    pub fn with_params(scheme: &str, params: Parameters) -> Result<Self, InvalidChallenge> {
        let mut message = Self::new(scheme)?;
        if !params.is_empty() {
            message.content = ChallengeContent::Params(params);
        }
        Ok(message)
    }

    /// `Basic` credentials for the given user and password.
    #[must_use]
    pub fn basic_credentials(username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        Self {
            scheme: SmolStr::new_inline("Basic"),
            content: ChallengeContent::Token68(SmolStr::from(encoded)),
        }
    }

    /// A `Basic` challenge for the given realm.
    #[must_use]
    pub fn basic_challenge(realm: &str) -> Self {
        let mut params = Parameters::new();
        params.push_parsed("realm", realm);
        Self {
            scheme: SmolStr::new_inline("Basic"),
            content: ChallengeContent::Params(params),
        }
    }

    /// `Bearer` credentials for the given token.
    pub fn bearer(token: &str) -> Result<Self, InvalidChallenge> {
        Self::with_token68("Bearer", token)
    }

    /// The authentication scheme, as written.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns true if the scheme matches, ignoring ASCII case.
    #[must_use]
    pub fn is_scheme(&self, scheme: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(scheme)
    }

    /// What follows the scheme.
    #[must_use]
    pub fn content(&self) -> &ChallengeContent {
        &self.content
    }

    /// The `token68`, if this message carries one.
    #[must_use]
    pub fn token68(&self) -> Option<&str> {
        match &self.content {
            ChallengeContent::Token68(token68) => Some(token68),
            ChallengeContent::None | ChallengeContent::Params(_) => None,
        }
    }

    /// The value of an auth-param, if this message carries auth-params.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        match &self.content {
            ChallengeContent::Params(params) => params.get(name),
            ChallengeContent::None | ChallengeContent::Token68(_) => None,
        }
    }

    /// Decode `Basic` credentials into user and password.
    ///
    /// Returns `None` for other schemes, or when the token68
    /// is not base64 encoded utf-8 containing a `:`.
    #[must_use]
    pub fn decode_basic(&self) -> Option<(String, String)> {
        if !self.is_scheme("Basic") {
            return None;
        }
        let decoded = STANDARD.decode(self.token68()?).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some((username.to_owned(), password.to_owned()))
    }
}

impl PartialEq for ChallengeMessage {
    fn eq(&self, other: &Self) -> bool {
        self.scheme.eq_ignore_ascii_case(&other.scheme) && self.content == other.content
    }
}

impl Eq for ChallengeMessage {}

impl Hash for ChallengeMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.scheme.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        self.content.hash(state);
    }
}

fn is_token68(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    !body.is_empty() && body.chars().all(|c| TOKEN68.contains(c))
}

fn end_of_element(cursor: &mut Cursor<'_>) -> Option<()> {
    (ows, first_available((eof, literal_char(',').map(|_| ()))))
        .map(|_| ())
        .parse(cursor)
}

fn token68<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    (
        while_matches1(TOKEN68),
        while_matches('='),
        end_of_element.peek(),
    )
        .recognize()
        .parse(cursor)
}

fn auth_param<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, std::borrow::Cow<'a, str>)> {
    (token, ows, literal_char('='), ows, word)
        .map(|(name, _, _, _, value)| (name, value))
        .parse(cursor)
}

fn content(cursor: &mut Cursor<'_>) -> Option<ChallengeContent> {
    first_available((
        token68.map(|t: &str| ChallengeContent::Token68(SmolStr::new(t))),
        list(auth_param, comma_separator).map(|params| {
            let mut parameters = Parameters::new();
            for (name, value) in params {
                parameters.push_parsed(name, &value);
            }
            ChallengeContent::Params(parameters)
        }),
    ))
    .parse(cursor)
}

impl Grammar for ChallengeMessage {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let scheme = seq.read(token)?;
        let content = seq
            .read_optional((while_matches1(' '), content).map(|(_, content)| content))
            .unwrap_or(ChallengeContent::None);
        seq.finish();
        Some(Self {
            scheme: SmolStr::new(scheme),
            content,
        })
    }
}

impl fmt::Display for ChallengeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scheme)?;
        match &self.content {
            ChallengeContent::None => Ok(()),
            ChallengeContent::Token68(token68) => write!(f, " {token68}"),
            ChallengeContent::Params(params) => {
                for (i, (name, value)) in params.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    write!(f, "{name}=")?;
                    write_quoted(f, value)?;
                }
                Ok(())
            }
        }
    }
}

impl_str_codec!(ChallengeMessage);
