use hval_parse::char_class::ETAGC;
use hval_parse::{
    Cursor, Parser, ParserExt, first_available, http_list, literal_char, literal_str, optional,
    while_matches,
};
use hval_utils::collections::NonEmptyVec;
use hval_utils::macros::error::static_str_error;
use smol_str::SmolStr;
use std::fmt;

use crate::Grammar;
use crate::util::write_list;

static_str_error! {
    /// The opaque tag contains a character outside of `etagc`.
    pub struct InvalidEntityTag = "invalid entity tag";
}

/// An entity tag, defined in [RFC 9110](https://www.rfc-editor.org/rfc/rfc9110#section-8.8.3)
///
/// An entity tag consists of a string enclosed by two literal double quotes.
/// Preceding the first double quote is an optional weakness indicator,
/// which always looks like `W/`. Examples for valid tags are `"xyzzy"` and `W/"xyzzy"`.
///
/// # ABNF
///
/// ```text
/// entity-tag = [ weak ] opaque-tag
/// weak       = %x57.2F ; "W/", case-sensitive
/// opaque-tag = DQUOTE *etagc DQUOTE
/// etagc      = %x21 / %x23-7E / obs-text
///            ; VCHAR except double quotes, plus obs-text
/// ```
///
/// # Comparison
/// To check if two entity tags are equivalent in an application always use the `strong_eq` or
/// `weak_eq` methods based on the context of the Tag. Only use `==` to check if two tags are
/// identical.
///
/// | ETag 1  | ETag 2  | Strong Comparison | Weak Comparison |
/// |---------|---------|-------------------|-----------------|
/// | `W/"1"` | `W/"1"` | no match          | match           |
/// | `W/"1"` | `W/"2"` | no match          | no match        |
/// | `W/"1"` | `"1"`   | no match          | match           |
/// | `"1"`   | `"1"`   | match             | match           |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTag {
    weak: bool,
    tag: SmolStr,
}

impl EntityTag {
    /// Create a strong entity tag.
    pub fn strong(tag: &str) -> Result<Self, InvalidEntityTag> {
        Self::new(false, tag)
    }

    /// Create a weak entity tag.
    pub fn weak(tag: &str) -> Result<Self, InvalidEntityTag> {
        Self::new(true, tag)
    }

    fn new(weak: bool, tag: &str) -> Result<Self, InvalidEntityTag> {
        if !tag.chars().all(|c| ETAGC.contains(c)) {
            return Err(InvalidEntityTag);
        }
        Ok(Self {
            weak,
            tag: SmolStr::new(tag),
        })
    }

    /// Get the opaque tag, without quotes.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return if this is a "weak" tag.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// For strong comparison two entity-tags are equivalent if both are not weak and their
    /// opaque-tags match character-by-character.
    #[must_use]
    pub fn strong_eq(&self, other: &Self) -> bool {
        !self.weak && !other.weak && self.tag == other.tag
    }

    /// For weak comparison two entity-tags are equivalent if their
    /// opaque-tags match character-by-character, regardless of either or
    /// both being tagged as "weak".
    #[must_use]
    pub fn weak_eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Grammar for EntityTag {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        (
            optional(literal_str("W/")),
            literal_char('"'),
            while_matches(ETAGC),
            literal_char('"'),
        )
            .map(|(weak, _, tag, _)| Self {
                weak: weak.is_some(),
                tag: SmolStr::new(tag),
            })
            .parse(cursor)
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            f.write_str("W/")?;
        }
        write!(f, "\"{}\"", self.tag)
    }
}

impl_str_codec!(EntityTag);

/// The value of `If-Match` and `If-None-Match`: `"*" / 1#entity-tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityTagMatch {
    /// `*`, any current representation.
    Any,
    /// The listed entity tags.
    Tags(NonEmptyVec<EntityTag>),
}

impl EntityTagMatch {
    /// Returns true if `entity` matches using the strong comparison.
    #[must_use]
    pub fn matches_strong(&self, entity: &EntityTag) -> bool {
        self.matches_if(entity, EntityTag::strong_eq)
    }

    /// Returns true if `entity` matches using the weak comparison.
    #[must_use]
    pub fn matches_weak(&self, entity: &EntityTag) -> bool {
        self.matches_if(entity, EntityTag::weak_eq)
    }

    fn matches_if<F>(&self, entity: &EntityTag, func: F) -> bool
    where
        F: Fn(&EntityTag, &EntityTag) -> bool,
    {
        match self {
            Self::Any => true,
            Self::Tags(tags) => tags.iter().any(|tag| func(tag, entity)),
        }
    }
}

impl Grammar for EntityTagMatch {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        first_available((
            literal_char('*').map(|_| Self::Any),
            http_list(EntityTag::parse_from).map(Self::Tags),
        ))
        .parse(cursor)
    }
}

impl fmt::Display for EntityTagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Tags(tags) => write_list(f, tags),
        }
    }
}

impl_str_codec!(EntityTagMatch);
