use hval_parse::{Cursor, Parser, ParserExt, Sequence, literal_char, semicolon_separator, token, word};
use hval_utils::macros::error::static_str_error;
use hval_utils::str::ascii_lowercase_smolstr;
use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;

use crate::util::{is_quotable, is_token, write_word};

static_str_error! {
    /// The name is not a token, or the value cannot be written
    /// as a token or quoted-string.
    pub struct InvalidParameter = "invalid parameter name or value";
}

/// Ordered `name=value` parameters, as they follow a media type or a
/// weight: `*( OWS ";" OWS parameter )`.
///
/// Names are case-insensitive and stored lowercased. Values are kept as
/// written (after unquoting) and quoted on output when not a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameters {
    entries: Vec<(SmolStr, SmolStr)>,
}

impl Parameters {
    /// Create an empty set of parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a parameter, validating name and value.
    pub fn try_push(&mut self, name: &str, value: &str) -> Result<(), InvalidParameter> {
        if !is_token(name) || !is_quotable(value) {
            return Err(InvalidParameter);
        }
        self.push_parsed(name, value);
        Ok(())
    }

    /// Append a parameter, validating name and value.
    pub fn try_with(mut self, name: &str, value: &str) -> Result<Self, InvalidParameter> {
        self.try_push(name, value)?;
        Ok(self)
    }

    pub(crate) fn push_parsed(&mut self, name: &str, value: &str) {
        self.entries
            .push((ascii_lowercase_smolstr(name), SmolStr::new(value)));
    }

    /// Drop every parameter named `q`, which would be read back
    /// as the weight of a preference.
    pub(crate) fn without_weight(mut self) -> Self {
        self.entries.retain(|(name, _)| name != "q");
        self
    }

    /// The value of the first parameter with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find_map(|(n, v)| n.eq_ignore_ascii_case(name).then_some(v))
    }

    /// Iterate over the `(name, value)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when every parameter of `self` is also in `other`.
    ///
    /// Values are compared case-insensitively.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|(name, value)| {
            other
                .iter()
                .any(|(n, v)| n == name && v.eq_ignore_ascii_case(value))
        })
    }

    /// Returns true when both hold the same parameters, in any order.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

/// `parameter = token "=" ( token / quoted-string )`
pub fn parameter<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, Cow<'a, str>)> {
    (token, literal_char('='), word)
        .map(|(name, _, value)| (name, value))
        .parse(cursor)
}

/// `token [ "=" ( token / quoted-string ) ]`, a missing value being empty.
pub(crate) fn optional_parameter<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, Cow<'a, str>)> {
    let mut seq = Sequence::new(cursor);
    let name = seq.read(token)?;
    let value = seq.read_optional((literal_char('='), word).map(|(_, value)| value));
    seq.finish();
    Some((name, value.unwrap_or_default()))
}

fn not_weight<'a>(param: (&'a str, Cow<'a, str>)) -> Option<(&'a str, Cow<'a, str>)> {
    (!param.0.eq_ignore_ascii_case("q")).then_some(param)
}

/// Read `*( OWS ";" OWS parameter )`.
///
/// With `stop_at_weight` a parameter named `q` is left unread,
/// as it starts the accept-params of a preference.
pub(crate) fn parse_parameters(cursor: &mut Cursor<'_>, stop_at_weight: bool) -> Parameters {
    let mut seq = Sequence::new(cursor);
    let entries = if stop_at_weight {
        seq.read_while_available(semicolon_separator, parameter.map_opt(not_weight))
    } else {
        seq.read_while_available(semicolon_separator, parameter)
    };
    seq.finish();

    let mut parameters = Parameters::new();
    for (name, value) in entries {
        parameters.push_parsed(name, &value);
    }
    parameters
}

impl crate::Grammar for Parameters {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        Some(parse_parameters(cursor, false))
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, ";{name}=")?;
            write_word(f, value)?;
        }
        Ok(())
    }
}

impl_str_codec!(Parameters);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arbitrary_text::parameters;
    use quickcheck::quickcheck;

    #[test]
    fn test_parse_parameters() {
        let parameters: Parameters = r#" ; Charset=UTF-8 ;format="a \"b\""; q=1"#.parse().unwrap();
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters.get("charset"), Some("UTF-8"));
        assert_eq!(parameters.get("FORMAT"), Some(r#"a "b""#));
        assert_eq!(parameters.get("q"), Some("1"));
        assert_eq!(parameters.get("level"), None);
        assert_eq!(
            parameters.to_string(),
            r#";charset=UTF-8;format="a \"b\"";q=1"#
        );

        assert!("".parse::<Parameters>().unwrap().is_empty());
        assert!(";charset".parse::<Parameters>().is_err());
        assert!(";charset=".parse::<Parameters>().is_err());
    }

    #[test]
    fn test_stop_at_weight() {
        let mut cursor = Cursor::new(";level=1;Q=0.5;x=y");
        let parameters = parse_parameters(&mut cursor, true);
        assert_eq!(parameters.len(), 1);
        assert_eq!(cursor.remaining(), ";Q=0.5;x=y");
    }

    #[test]
    fn test_try_push() {
        let mut parameters = Parameters::new();
        assert!(parameters.try_push("Level", "1").is_ok());
        assert_eq!(parameters.try_push("bad name", "1"), Err(InvalidParameter));
        assert_eq!(parameters.try_push("name", "line\nbreak"), Err(InvalidParameter));
        assert_eq!(parameters.iter().collect::<Vec<_>>(), [("level", "1")]);
    }

    #[test]
    fn test_subset_and_equivalence() {
        let a = Parameters::new().try_with("charset", "utf-8").unwrap();
        let b = Parameters::new()
            .try_with("level", "1")
            .unwrap()
            .try_with("charset", "UTF-8")
            .unwrap();
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert!(Parameters::new().is_subset_of(&a));
        assert!(!a.is_equivalent(&b));
        let c = Parameters::new()
            .try_with("charset", "UTF-8")
            .unwrap()
            .try_with("level", "1")
            .unwrap();
        assert!(b.is_equivalent(&c));
    }

    quickcheck! {
        fn display_roundtrip(pairs: Vec<(String, String)>) -> bool {
            let parameters = parameters(&pairs);
            parameters.to_string().parse().ok() == Some(parameters)
        }
    }
}
