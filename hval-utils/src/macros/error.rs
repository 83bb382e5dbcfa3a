/// Private API.
#[doc(hidden)]
#[macro_export]
macro_rules! __static_str_error {
    (
        $(#[$m:meta])*
        pub struct $name:ident = $desc:literal;
    ) => {
        $(#[$m])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        #[doc = $desc]
        pub struct $name;

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), ".")]
            #[must_use]
            pub fn new() -> Self {
                Self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($desc)
            }
        }

        impl std::error::Error for $name {}
    };
}
#[doc(inline)]
pub use crate::__static_str_error as static_str_error;

#[cfg(test)]
#[expect(unreachable_pub, reason = "macro emits pub items inside private test module")]
mod tests {
    crate::macros::error::static_str_error! {
        pub struct EmptyList = "empty http list";
    }

    #[test]
    fn static_str_error_display() {
        let err = EmptyList::new();
        assert_eq!(err.to_string(), "empty http list");
        assert_eq!(err, EmptyList);
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.is::<EmptyList>());
    }
}
