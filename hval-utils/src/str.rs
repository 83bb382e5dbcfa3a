//! String utilities.

use smol_str::SmolStr;

/// Returns the input as a [`SmolStr`] with every ASCII
/// uppercase letter mapped to lowercase.
///
/// Non-ASCII characters are kept as-is, which is what HTTP
/// wants for case-insensitive tokens.
#[must_use]
pub fn ascii_lowercase_smolstr(s: &str) -> SmolStr {
    if !s.bytes().any(|b| b.is_ascii_uppercase()) {
        return SmolStr::new(s);
    }
    SmolStr::from(s.to_ascii_lowercase())
}
