use hval_parse::{Cursor, Sequence, token};
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::fmt;

use super::Parameters;
use super::parameters::parse_parameters;
use crate::Grammar;
use crate::negotiation::Matcheable;
use crate::util::is_token;

/// A transfer coding with its parameters.
///
/// ```text
/// transfer-coding = token *( OWS ";" OWS transfer-parameter )
/// ```
///
/// As for media ranges, a parameter named `q` ends the coding,
/// so it can be used as the value of a `TE` preference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferCoding {
    name: SmolStr,
    parameters: Parameters,
}

impl TransferCoding {
    /// `chunked`
    pub const CHUNKED: Self = Self::from_static("chunked");
    /// `gzip`
    pub const GZIP: Self = Self::from_static("gzip");
    /// `deflate`
    pub const DEFLATE: Self = Self::from_static("deflate");
    /// `compress`
    pub const COMPRESS: Self = Self::from_static("compress");
    /// `trailers`, only meaningful in `TE`.
    pub const TRAILERS: Self = Self::from_static("trailers");

    const fn from_static(name: &'static str) -> Self {
        Self {
            name: SmolStr::new_inline(name),
            parameters: Parameters::new(),
        }
    }

    /// Create a [`TransferCoding`] without parameters.
    ///
    /// Returns `None` if the name is not a token.
    #[must_use]
    pub fn new(name: &str) -> Option<Self> {
        is_token(name).then(|| Self {
            name: ascii_lowercase_smolstr(name),
            parameters: Parameters::new(),
        })
    }

    /// Replace the parameters of this coding.
    ///
    /// A parameter named `q` would be read back as a weight,
    /// and is therefore dropped.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters.without_weight();
        self
    }

    /// The coding name, lowercased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The coding parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns true for `chunked`.
    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.name == "chunked"
    }
}

impl Grammar for TransferCoding {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let name = seq.read(token)?;
        let parameters = parse_parameters(seq.cursor(), true);
        seq.finish();
        Some(Self {
            name: ascii_lowercase_smolstr(name),
            parameters,
        })
    }
}

impl fmt::Display for TransferCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.parameters)
    }
}

impl_str_codec!(TransferCoding);

impl Matcheable for TransferCoding {
    fn match_score(&self, candidate: &Self) -> u16 {
        if self.name != candidate.name {
            0
        } else if self.parameters.is_equivalent(&candidate.parameters) {
            1000
        } else if self.parameters.is_subset_of(&candidate.parameters) {
            900
        } else {
            0
        }
    }
}
