/// Define a case-insensitive `token / "*"` value type,
/// scoring 1000 for an exact match and 100 for the wildcard.
macro_rules! token_value {
    (
        $(#[$m:meta])*
        pub struct $type:ident;
        error = $err:ident: $desc:literal;
        consts = { $($(#[$cm:meta])* $const_name:ident => $const_value:literal,)* }
    ) => {
        ::hval_utils::macros::error::static_str_error! {
            #[doc = concat!("Not a valid [`", stringify!($type), "`].")]
            pub struct $err = $desc;
        }

        $(#[$m])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $type(::smol_str::SmolStr);

        impl $type {
            /// The `*` wildcard.
            pub const ANY: Self = Self(::smol_str::SmolStr::new_inline("*"));

            $(
                $(#[$cm])*
                pub const $const_name: Self = Self(::smol_str::SmolStr::new_inline($const_value));
            )*

            #[doc = concat!("Create a [`", stringify!($type), "`] from a token or `*`.")]
            pub fn try_new(value: &str) -> Result<Self, $err> {
                if $crate::util::is_token(value) {
                    Ok(Self(::hval_utils::str::ascii_lowercase_smolstr(value)))
                } else {
                    Err($err)
                }
            }

            /// The value, lowercased.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true for the `*` wildcard.
            #[must_use]
            pub fn is_any(&self) -> bool {
                self.0 == "*"
            }
        }

        impl $crate::Grammar for $type {
            fn parse_from(cursor: &mut ::hval_parse::Cursor<'_>) -> Option<Self> {
                ::hval_parse::token(cursor)
                    .map(|value| Self(::hval_utils::str::ascii_lowercase_smolstr(value)))
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl_str_codec!($type);

        impl $crate::negotiation::Matcheable for $type {
            fn match_score(&self, candidate: &Self) -> u16 {
                if self.is_any() {
                    100
                } else if self == candidate {
                    1000
                } else {
                    0
                }
            }
        }
    };
}
