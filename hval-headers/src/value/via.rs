use hval_parse::char_class::TCHAR;
use hval_parse::{
    CharClass, Cursor, ParserExt, Sequence, literal_char, rws, token, while_matches1,
};
use smol_str::SmolStr;
use std::fmt;

use super::Comment;
use crate::Grammar;

/// `received-by = pseudonym / uri-host [ ":" port ]`, loosely:
/// tokens, host names, ports and bracketed IPv6 literals.
const RECEIVED_BY: CharClass = TCHAR.union(CharClass::set(b":[]"));

/// A single hop of a `Via` header.
///
/// ```text
/// Via = 1#( received-protocol RWS received-by [ RWS comment ] )
/// received-protocol = [ protocol-name "/" ] protocol-version
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViaElement {
    protocol_name: Option<SmolStr>,
    protocol_version: SmolStr,
    received_by: SmolStr,
    comment: Option<Comment>,
}

impl ViaElement {
    /// Create a hop for the given protocol version (e.g. `1.1`)
    /// and pseudonym or host.
    ///
    /// Returns `None` if either is not a valid token or host.
    #[must_use]
    pub fn new(protocol_version: &str, received_by: &str) -> Option<Self> {
        let valid = crate::util::is_token(protocol_version)
            && !received_by.is_empty()
            && received_by.chars().all(|c| RECEIVED_BY.contains(c));
        valid.then(|| Self {
            protocol_name: None,
            protocol_version: SmolStr::new(protocol_version),
            received_by: SmolStr::new(received_by),
            comment: None,
        })
    }

    /// Set the protocol name, omitted by convention for HTTP.
    ///
    /// Returns `None` if the name is not a token.
    #[must_use]
    pub fn with_protocol_name(mut self, name: &str) -> Option<Self> {
        if !crate::util::is_token(name) {
            return None;
        }
        self.protocol_name = Some(SmolStr::new(name));
        Some(self)
    }

    /// Attach a comment to this hop.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    /// The protocol name, `None` meaning HTTP.
    #[must_use]
    pub fn protocol_name(&self) -> Option<&str> {
        self.protocol_name.as_deref()
    }

    /// The protocol version.
    #[must_use]
    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    /// The host or pseudonym of the recipient.
    #[must_use]
    pub fn received_by(&self) -> &str {
        &self.received_by
    }

    /// The comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }
}

impl Grammar for ViaElement {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let first = seq.read(token)?;
        let second = seq.read_optional((literal_char('/'), token).map(|(_, version)| version));
        seq.read(rws)?;
        let received_by = seq.read(while_matches1(RECEIVED_BY))?;
        let comment = seq.read_optional((rws, Comment::parse_from).map(|(_, comment)| comment));
        seq.finish();

        let (protocol_name, protocol_version) = match second {
            Some(version) => (Some(SmolStr::new(first)), version),
            None => (None, first),
        };
        Some(Self {
            protocol_name,
            protocol_version: SmolStr::new(protocol_version),
            received_by: SmolStr::new(received_by),
            comment,
        })
    }
}

impl fmt::Display for ViaElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.protocol_name {
            write!(f, "{name}/")?;
        }
        write!(f, "{} {}", self.protocol_version, self.received_by)?;
        if let Some(comment) = &self.comment {
            write!(f, " {comment}")?;
        }
        Ok(())
    }
}

impl_str_codec!(ViaElement);
