use hval_parse::{Cursor, ParserExt, Sequence, literal_char, ows, semicolon_separator};
use std::cmp::Reverse;
use std::fmt;

use super::{InvalidQuality, Quality, q_param};
use crate::Grammar;
use crate::value::Parameters;
use crate::value::parameters::optional_parameter;

/// Scores how well a concrete candidate satisfies a preference pattern.
///
/// The score is directional: `self` is the pattern a client asked for
/// and `candidate` is what a server can offer. `0` means no match and
/// `1000` an exact match.
pub trait Matcheable<Rhs: ?Sized = Self> {
    /// Score `candidate` against this pattern, in `0..=1000`.
    fn match_score(&self, candidate: &Rhs) -> u16;
}

/// A value with a [`Quality`] and optional extension parameters,
/// as found in the `Accept*` family of headers.
///
/// ```text
/// preference = value [ weight *( OWS ";" OWS token [ "=" ( token / quoted-string ) ] ) ]
/// weight     = OWS ";" OWS "q=" qvalue
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preference<T> {
    value: T,
    quality: Quality,
    extensions: Parameters,
}

impl<T> Preference<T> {
    /// Create a new [`Preference`] with the default quality (`q=1`).
    pub fn new(value: T) -> Self {
        Self {
            value,
            quality: Quality::default(),
            extensions: Parameters::new(),
        }
    }

    /// Create a new [`Preference`], validating the quality in thousandths.
    pub fn try_new(
        value: T,
        quality: u16,
        extensions: Parameters,
    ) -> Result<Self, InvalidQuality> {
        Ok(Self {
            value,
            quality: Quality::try_new(quality)?,
            extensions,
        })
    }

    /// Set the quality of this preference.
    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Set the extension parameters of this preference.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Parameters) -> Self {
        self.extensions = extensions;
        self
    }

    /// The preferred value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The quality of this preference.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Extension parameters found after the quality.
    pub fn extensions(&self) -> &Parameters {
        &self.extensions
    }

    /// Consume the preference, returning the preferred value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// See [`best_match`].
    pub fn best_match<'p, 'v, V, P, I>(preferences: P, available: I) -> Option<&'v V>
    where
        T: Matcheable<V> + 'p,
        V: ?Sized + 'v,
        P: IntoIterator<Item = &'p Self>,
        I: IntoIterator<Item = &'v V>,
        I::IntoIter: Clone,
    {
        best_match(preferences, available)
    }
}

impl<T> From<T> for Preference<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Grammar> Grammar for Preference<T> {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let value = seq.read(T::parse_from)?;
        let mut preference = Self::new(value);
        if let Some(quality) = seq.read_optional(
            (ows, literal_char(';'), ows, q_param).map(|(_, _, _, quality)| quality),
        ) {
            preference.quality = quality;
            for (name, value) in seq.read_while_available(semicolon_separator, optional_parameter) {
                preference.extensions.push_parsed(name, &value);
            }
        }
        seq.finish();
        Some(preference)
    }
}

impl<T: fmt::Display> fmt::Display for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        if self.quality != Quality::MAX || !self.extensions.is_empty() {
            write!(f, ";q={}{}", self.quality, self.extensions)?;
        }
        Ok(())
    }
}

impl<T: Grammar> std::str::FromStr for Preference<T> {
    type Err = hval_parse::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hval_parse::parse_with(s, Self::parse_from)
    }
}

#[cfg(feature = "serde")]
impl<T: fmt::Display> serde::Serialize for Preference<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Grammar> serde::Deserialize<'de> for Preference<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Pick the available candidate that best satisfies the preferences.
///
/// Every preference is scored against every candidate as
/// `match_score * quality / 1000`. The highest score wins; on a tie the
/// pairing seen first (earliest preference, then earliest candidate) is
/// kept. Returns `None` when nothing scores above zero.
///
/// ```
/// use hval_headers::{Language, Preference, best_match};
///
/// let preferences: Vec<Preference<Language>> = ["en-us;q=0.8", "fr;q=0.9", "*;q=0.1"]
///     .into_iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let available: [Language; 2] = ["fr".parse().unwrap(), "de".parse().unwrap()];
///
/// assert_eq!(best_match(&preferences, &available), Some(&available[0]));
/// ```
pub fn best_match<'p, 'v, T, V, P, I>(preferences: P, available: I) -> Option<&'v V>
where
    T: Matcheable<V> + 'p,
    V: ?Sized + 'v,
    P: IntoIterator<Item = &'p Preference<T>>,
    I: IntoIterator<Item = &'v V>,
    I::IntoIter: Clone,
{
    let available = available.into_iter();
    let mut best: Option<(u32, &'v V)> = None;
    for (index, preference) in preferences.into_iter().enumerate() {
        for candidate in available.clone() {
            let score = u32::from(preference.value.match_score(candidate))
                * u32::from(preference.quality.as_u16())
                / 1000;
            if score > best.map_or(0, |(best_score, _)| best_score) {
                tracing::trace!(preference = index, score, "new best negotiation candidate");
                best = Some((score, candidate));
            }
        }
    }
    if best.is_none() {
        tracing::trace!("no acceptable negotiation candidate");
    }
    best.map(|(_, candidate)| candidate)
}

/// Sort preferences by descending quality, keeping the
/// relative order of preferences with equal quality.
pub fn sort_by_quality<T>(preferences: &mut [Preference<T>]) {
    preferences.sort_by_key(|preference| Reverse(preference.quality));
}
