use std::fmt;

/// A predicate over a single code point.
///
/// Implemented for [`CharClass`], `char` and any `Fn(char) -> bool`,
/// so scanners accept whichever is most convenient.
pub trait CharPredicate {
    /// Returns true if `c` belongs to this class.
    fn matches(&self, c: char) -> bool;

    /// Matches if either predicate matches.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: CharPredicate,
    {
        Or(self, other)
    }

    /// Matches if both predicates match.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: CharPredicate,
    {
        And(self, other)
    }

    /// Matches if this predicate does not.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> CharPredicate for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn matches(&self, c: char) -> bool {
        self(c)
    }
}

impl CharPredicate for char {
    #[inline]
    fn matches(&self, c: char) -> bool {
        *self == c
    }
}

/// Union of two [`CharPredicate`]s, see [`CharPredicate::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for Or<A, B> {
    #[inline]
    fn matches(&self, c: char) -> bool {
        self.0.matches(c) || self.1.matches(c)
    }
}

/// Intersection of two [`CharPredicate`]s, see [`CharPredicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for And<A, B> {
    #[inline]
    fn matches(&self, c: char) -> bool {
        self.0.matches(c) && self.1.matches(c)
    }
}

/// Negation of a [`CharPredicate`], see [`CharPredicate::not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(A);

impl<A: CharPredicate> CharPredicate for Not<A> {
    #[inline]
    fn matches(&self, c: char) -> bool {
        !self.0.matches(c)
    }
}

/// A `const` character class.
///
/// Membership is exact for U+0000 to U+00FF, the range the HTTP grammar
/// is defined over (ASCII plus the `obs-text` octets). Code points above
/// U+00FF are either all in the class or none are: the constructors only
/// add code points up to U+00FF, and [`CharClass::NON_LATIN1`] (or a
/// [`CharClass::negate`]) stands for all of the others at once. Use a
/// closure as [`CharPredicate`] to match individual code points above
/// U+00FF.
///
/// Classes are closed under [`CharClass::union`], [`CharClass::intersection`]
/// and [`CharClass::negate`], with [`CharClass::ANY`] and [`CharClass::NONE`]
/// as identities.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass {
    low: u128,
    high: u128,
    beyond: bool,
}

impl CharClass {
    /// The class that matches nothing.
    pub const NONE: Self = Self {
        low: 0,
        high: 0,
        beyond: false,
    };

    /// The class that matches every code point.
    pub const ANY: Self = Self {
        low: u128::MAX,
        high: u128::MAX,
        beyond: true,
    };

    /// The class of all code points above U+00FF.
    pub const NON_LATIN1: Self = Self {
        low: 0,
        high: 0,
        beyond: true,
    };

    /// A class containing a single code point.
    ///
    /// A code point above U+00FF yields the empty class.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::NONE.with(c as u32)
    }

    /// A class containing the code points in `start..=end`,
    /// up to U+00FF.
    #[must_use]
    pub const fn range(start: char, end: char) -> Self {
        let mut class = Self::NONE;
        let mut cp = start as u32;
        let end = end as u32;
        while cp <= end && cp <= 0xFF {
            class = class.with(cp);
            cp += 1;
        }
        class
    }

    /// A class containing each of the given ASCII characters.
    ///
    /// Bytes `0x80` and up stand for the code points U+0080 to U+00FF.
    #[must_use]
    pub const fn set(chars: &[u8]) -> Self {
        let mut class = Self::NONE;
        let mut i = 0;
        while i < chars.len() {
            class = class.with(chars[i] as u32);
            i += 1;
        }
        class
    }

    /// Code points in either class.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            low: self.low | other.low,
            high: self.high | other.high,
            beyond: self.beyond || other.beyond,
        }
    }

    /// Code points in both classes.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            low: self.low & other.low,
            high: self.high & other.high,
            beyond: self.beyond && other.beyond,
        }
    }

    /// Code points not in this class.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            low: !self.low,
            high: !self.high,
            beyond: !self.beyond,
        }
    }

    /// Returns true if `c` belongs to this class.
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        let cp = c as u32;
        if cp < 0x80 {
            self.low & (1 << cp) != 0
        } else if cp <= 0xFF {
            self.high & (1 << (cp - 0x80)) != 0
        } else {
            self.beyond
        }
    }

    const fn with(mut self, cp: u32) -> Self {
        if cp < 0x80 {
            self.low |= 1 << cp;
        } else if cp <= 0xFF {
            self.high |= 1 << (cp - 0x80);
        }
        self
    }
}

impl CharPredicate for CharClass {
    #[inline]
    fn matches(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for cp in 0u8..=0xFF {
            let c = char::from(cp);
            if self.contains(c) {
                set.entry(&c);
            }
        }
        if self.beyond {
            set.entry(&"U+0100..");
        }
        set.finish()
    }
}

/// `DIGIT = %x30-39`
pub const DIGIT: CharClass = CharClass::range('0', '9');

/// `HEXDIG = DIGIT / "A"-"F"`, both cases.
pub const HEXDIG: CharClass = DIGIT
    .union(CharClass::range('a', 'f'))
    .union(CharClass::range('A', 'F'));

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: CharClass = CharClass::range('a', 'z').union(CharClass::range('A', 'Z'));

/// `ALPHA / DIGIT`
pub const ALPHANUM: CharClass = ALPHA.union(DIGIT);

/// `SP / HTAB`
pub const WSP: CharClass = CharClass::set(b" \t");

/// `VCHAR = %x21-7E`
pub const VCHAR: CharClass = CharClass::range('!', '~');

/// `obs-text = %x80-FF`
pub const OBS_TEXT: CharClass = CharClass::range('\u{80}', '\u{FF}');

/// `tchar`: the characters of an HTTP token.
pub const TCHAR: CharClass = ALPHANUM.union(CharClass::set(b"!#$%&'*+-.^_`|~"));

/// `qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text`
pub const QDTEXT: CharClass = WSP
    .union(CharClass::char('!'))
    .union(CharClass::range('#', '['))
    .union(CharClass::range(']', '~'))
    .union(OBS_TEXT);

/// The characters allowed after a `\` in a quoted-pair:
/// `HTAB / SP / VCHAR / obs-text`.
pub const QUOTED_PAIR: CharClass = WSP.union(VCHAR).union(OBS_TEXT);

/// `ctext = HTAB / SP / %x21-27 / %x2A-5B / %x5D-7E / obs-text`
pub const CTEXT: CharClass = WSP
    .union(CharClass::range('!', '\''))
    .union(CharClass::range('*', '['))
    .union(CharClass::range(']', '~'))
    .union(OBS_TEXT);

/// `token68` characters, without the trailing `=` padding:
/// `ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/"`
pub const TOKEN68: CharClass = ALPHANUM.union(CharClass::set(b"-._~+/"));

/// `etagc = %x21 / %x23-7E / obs-text`
pub const ETAGC: CharClass = CharClass::char('!')
    .union(CharClass::range('#', '~'))
    .union(OBS_TEXT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        for c in ['a', '\0', '\u{FF}', '€', '\u{10FFFF}'] {
            assert!(CharClass::ANY.contains(c));
            assert!(!CharClass::NONE.contains(c));
            assert_eq!(TCHAR.union(CharClass::NONE).contains(c), TCHAR.contains(c));
            assert_eq!(
                TCHAR.intersection(CharClass::ANY).contains(c),
                TCHAR.contains(c)
            );
        }
        assert_eq!(CharClass::NONE.negate(), CharClass::ANY);
        assert_eq!(CharClass::ANY.negate(), CharClass::NONE);
    }

    #[test]
    fn test_tchar() {
        for c in "abcXYZ019!#$%&'*+-.^_`|~".chars() {
            assert!(TCHAR.contains(c), "{c:?} should be a tchar");
        }
        for c in " \t\"(),/:;<=>?@[\\]{}\u{7F}é€".chars() {
            assert!(!TCHAR.contains(c), "{c:?} should not be a tchar");
        }
    }

    #[test]
    fn test_qdtext_and_quoted_pair() {
        assert!(!QDTEXT.contains('"'));
        assert!(!QDTEXT.contains('\\'));
        assert!(QDTEXT.contains(' '));
        assert!(QDTEXT.contains('é'));
        assert!(!QDTEXT.contains('€'));
        assert!(QUOTED_PAIR.contains('"'));
        assert!(QUOTED_PAIR.contains('\\'));
        assert!(!QUOTED_PAIR.contains('\n'));
    }

    #[test]
    fn test_ctext() {
        assert!(!CTEXT.contains('('));
        assert!(!CTEXT.contains(')'));
        assert!(!CTEXT.contains('\\'));
        assert!(CTEXT.contains('"'));
        assert!(CTEXT.contains(' '));
    }

    #[test]
    fn test_constructors_stop_at_latin1() {
        assert_eq!(CharClass::char('€'), CharClass::NONE);

        let class = CharClass::range('a', '\u{200}');
        assert!(class.contains('a'));
        assert!(class.contains('\u{FF}'));
        assert!(!class.contains('\u{100}'));
        assert!(!class.contains('\u{5000}'));

        assert!(CharClass::NON_LATIN1.contains('\u{100}'));
        assert!(CharClass::NON_LATIN1.contains('😀'));
        assert!(!CharClass::NON_LATIN1.contains('\u{FF}'));
        assert_eq!(CharClass::range('\0', '\u{FF}').negate(), CharClass::NON_LATIN1);

        assert!(!VCHAR.negate().contains('a'));
        assert!(VCHAR.negate().contains('€'));
    }

    #[test]
    fn test_predicate_adapters() {
        let p = DIGIT.or('.');
        assert!(p.matches('7'));
        assert!(p.matches('.'));
        assert!(!p.matches('a'));

        let p = TCHAR.and(|c: char| c != '*');
        assert!(p.matches('a'));
        assert!(!p.matches('*'));

        let p = WSP.not();
        assert!(p.matches('x'));
        assert!(!p.matches('\t'));
    }
}
