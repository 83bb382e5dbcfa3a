use hval_parse::char_class::{QUOTED_PAIR, TCHAR};
use std::fmt::{self, Write as _};

#[cfg(feature = "http")]
mod values;
#[cfg(feature = "http")]
pub(crate) use values::{decode_list, decode_single, encode_display};

/// Returns true if `s` is a valid (non-empty) HTTP token.
pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| TCHAR.contains(c))
}

/// Returns true if `s` can be written as the content of a quoted-string.
pub(crate) fn is_quotable(s: &str) -> bool {
    s.chars().all(|c| QUOTED_PAIR.contains(c))
}

/// Write `s` as a quoted-string, escaping `"` and `\`.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

/// Write `s` as a token when it is one, as a quoted-string otherwise.
pub(crate) fn write_word(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if is_token(s) {
        f.write_str(s)
    } else {
        write_quoted(f, s)
    }
}

/// Write the values separated by `", "`.
pub(crate) fn write_list<'a, T, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(value, f)?;
    }
    Ok(())
}

/// Derive the typed header traits for a newtype over a single value.
macro_rules! derive_value_header {
    (
        #[header(name = $name:ident)]
        $(#[$m:meta])*
        pub struct $type:ident(pub $t:ty);
    ) => {
        $(#[$m])*
        pub struct $type(pub $t);

        impl $crate::TypedHeader for $type {
            fn name() -> &'static ::http::header::HeaderName {
                &::http::header::$name
            }
        }

        impl $crate::HeaderDecode for $type {
            fn decode<'i, I>(values: &mut I) -> Result<Self, $crate::Error>
            where
                I: Iterator<Item = &'i ::http::HeaderValue>,
            {
                $crate::util::decode_single(values).map($type)
            }
        }

        impl $crate::HeaderEncode for $type {
            fn encode<E: Extend<::http::HeaderValue>>(&self, values: &mut E) {
                values.extend($crate::util::encode_display(&self.0));
            }
        }

        impl From<$t> for $type {
            fn from(value: $t) -> Self {
                Self(value)
            }
        }
    };
}

/// Derive the typed header traits for a `1#element` list header.
///
/// Multiple field lines are combined in order, as if they were a single
/// comma separated line.
macro_rules! derive_non_empty_list_header {
    (
        #[header(name = $name:ident)]
        $(#[$m:meta])*
        pub struct $type:ident(pub NonEmptyVec<$t:ty>);
    ) => {
        $(#[$m])*
        pub struct $type(pub ::hval_utils::collections::NonEmptyVec<$t>);

        impl $type {
            #[doc = concat!("Create a new [`", stringify!($type), "`] header with a single element.")]
            #[must_use]
            pub fn new(value: $t) -> Self {
                Self(::hval_utils::collections::NonEmptyVec::new(value))
            }

            /// Iterate over the elements of this header, in order.
            pub fn iter(&self) -> ::hval_utils::collections::NonEmptyVecIter<'_, $t> {
                self.0.iter()
            }
        }

        impl $crate::TypedHeader for $type {
            fn name() -> &'static ::http::header::HeaderName {
                &::http::header::$name
            }
        }

        impl $crate::HeaderDecode for $type {
            fn decode<'i, I>(values: &mut I) -> Result<Self, $crate::Error>
            where
                I: Iterator<Item = &'i ::http::HeaderValue>,
            {
                $crate::util::decode_list(values).map($type)
            }
        }

        impl $crate::HeaderEncode for $type {
            fn encode<E: Extend<::http::HeaderValue>>(&self, values: &mut E) {
                values.extend($crate::util::encode_display(self));
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::util::write_list(f, &self.0)
            }
        }

        impl From<::hval_utils::collections::NonEmptyVec<$t>> for $type {
            fn from(values: ::hval_utils::collections::NonEmptyVec<$t>) -> Self {
                Self(values)
            }
        }
    };
}

/// Shape arbitrary quickcheck input into valid grammar pieces.
#[cfg(test)]
pub(crate) mod arbitrary_text {
    const TCHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&'*+-.^_`|~";

    /// A non-empty token with the same length as `s`.
    pub(crate) fn token(s: &str) -> String {
        let token: String = s
            .chars()
            .map(|c| char::from(TCHARS[c as usize % TCHARS.len()]))
            .collect();
        if token.is_empty() {
            String::from("x")
        } else {
            token
        }
    }

    /// Text that fits in a quoted-string: `HTAB / SP / VCHAR / obs-text`.
    pub(crate) fn quotable(s: &str) -> String {
        s.chars()
            .map(|c| match u32::from(c) % 224 {
                0 => '\t',
                n @ 1..=95 => char::from_u32(0x1F + n).unwrap(),
                n => char::from_u32(0x80 + n - 96).unwrap(),
            })
            .collect()
    }

    /// Valid parameters from arbitrary pairs, in order.
    pub(crate) fn parameters(pairs: &[(String, String)]) -> crate::value::Parameters {
        let mut parameters = crate::value::Parameters::new();
        for (name, value) in pairs {
            parameters.try_push(&token(name), &quotable(value)).unwrap();
        }
        parameters
    }

    #[test]
    fn test_shapes_are_valid() {
        for s in ["", "a b", "\u{0}\u{7f}\u{20ac}", "\"\\()"] {
            assert!(super::is_token(&token(s)), "input: {s:?}");
            assert!(super::is_quotable(&quotable(s)), "input: {s:?}");
            assert_eq!(quotable(s).chars().count(), s.chars().count());
        }
    }
}
