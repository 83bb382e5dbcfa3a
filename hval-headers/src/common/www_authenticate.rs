use crate::value::ChallengeMessage;

derive_non_empty_list_header! {
    #[header(name = WWW_AUTHENTICATE)]
    /// `WWW-Authenticate` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-11.6.1)
    ///
    /// Indicates the authentication scheme(s) and parameters
    /// applicable to the target resource.
    ///
    /// # ABNF
    ///
    /// ```text
    /// WWW-Authenticate = #challenge
    /// challenge        = auth-scheme [ 1*SP ( token68 / #auth-param ) ]
    /// ```
    ///
    /// # Example values
    /// * `Basic realm="simple"`
    /// * `Newauth realm="apps", type=1, title="Login to \"apps\"", Basic realm="simple"`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct WwwAuthenticate(pub NonEmptyVec<ChallengeMessage>);
}

impl WwwAuthenticate {
    /// `WWW-Authenticate: Basic realm="..."`
    #[must_use]
    pub fn basic(realm: &str) -> Self {
        Self::new(ChallengeMessage::basic_challenge(realm))
    }

    /// The first challenge for the given (case-insensitive) scheme.
    #[must_use]
    pub fn challenge(&self, scheme: &str) -> Option<&ChallengeMessage> {
        self.iter().find(|challenge| challenge.is_scheme(scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_multiple_challenges() {
        let header: WwwAuthenticate = test_decode(&[
            r#"Newauth realm="apps", type=1, title="Login to \"apps\"", Basic realm="simple""#,
        ])
        .unwrap();
        assert_eq!(header.iter().count(), 2);

        let newauth = header.challenge("newauth").unwrap();
        assert_eq!(newauth.param("realm"), Some("apps"));
        assert_eq!(newauth.param("type"), Some("1"));
        assert_eq!(newauth.param("title"), Some(r#"Login to "apps""#));
        assert_eq!(
            header.challenge("BASIC").and_then(|c| c.param("realm")),
            Some("simple")
        );
    }

    #[test]
    fn test_challenges_over_lines() {
        let header: WwwAuthenticate =
            test_decode(&["Bearer", r#"Basic realm="simple", charset="UTF-8""#]).unwrap();
        assert_eq!(header.iter().count(), 2);
        assert_eq!(
            header.challenge("basic").and_then(|c| c.param("charset")),
            Some("UTF-8")
        );
    }

    #[test]
    fn test_encode_basic() {
        let map = test_encode(WwwAuthenticate::basic("simple"));
        assert_eq!(map["www-authenticate"], r#"Basic realm="simple""#);
    }
}
