// > Trimmed fork of <https://github.com/cloudhead/non_empty_vec>.

use std::iter;
use std::vec;

/// Like the `vec!` macro, but enforces at least one argument. A nice short-hand
/// for constructing [`NonEmptyVec`] values.
///
/// ```
/// use hval_utils::collections::{NonEmptyVec, non_empty_vec};
///
/// let v = non_empty_vec![1, 2, 3];
/// assert_eq!(v, NonEmptyVec { head: 1, tail: vec![2, 3]});
///
/// let v = non_empty_vec![1];
/// assert_eq!(v, NonEmptyVec::new(1));
///
/// // Doesn't compile!
/// // let v = non_empty_vec![];
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __non_empty_vec {
    ($h:expr, $( $x:expr ),* $(,)?) => {{
        let tail = $crate::collections::__macro_support::vec![$($x),*];
        $crate::collections::NonEmptyVec { head: $h, tail }
    }};
    ($h:expr) => {
        $crate::collections::NonEmptyVec {
            head: $h,
            tail: $crate::collections::__macro_support::vec![],
        }
    };
}

/// A Non-empty growable vector.
///
/// HTTP list headers (`1#element`) are never empty once parsed:
/// the list combinator of `hval-parse` fails rather than producing
/// an empty result, and this type carries that guarantee along.
///
/// Consider that unlike `Vec`, [`NonEmptyVec::first`] and [`NonEmptyVec::last`] don't
/// return in `Option`, they always succeed.
///
/// # Caveats
///
/// Since `NonEmptyVec` must have a least one element, it is not possible to
/// implement the [`FromIterator`] trait for it. Use [`NonEmptyVec::collect`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    pub head: T,
    pub tail: Vec<T>,
}

/// Iterator for [`NonEmptyVec`].
#[derive(Debug)]
pub struct NonEmptyVecIter<'a, T> {
    head: Option<&'a T>,
    tail: &'a [T],
}

impl<'a, T> Iterator for NonEmptyVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.head.take() {
            Some(value)
        } else if let Some((first, rest)) = self.tail.split_first() {
            self.tail = rest;
            Some(first)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for NonEmptyVecIter<'_, T> {
    fn len(&self) -> usize {
        self.tail.len() + usize::from(self.head.is_some())
    }
}

impl<T> iter::FusedIterator for NonEmptyVecIter<'_, T> {}

impl<T> Clone for NonEmptyVecIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty list with an initial element.
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Attempt to convert an iterator into a `NonEmptyVec` vector.
    /// Returns `None` if the iterator was empty.
    pub fn collect<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(Self {
            head,
            tail: iter.collect(),
        })
    }

    /// Always returns false.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get the length of the list.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Get the first element. Never fails.
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Get the last element. Never fails.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Push an element to the end of the list.
    pub fn push(&mut self, e: T) {
        self.tail.push(e)
    }

    /// Get an element by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index.checked_sub(1) {
            None => Some(&self.head),
            Some(index) => self.tail.get(index),
        }
    }

    /// Check whether an element is contained in the list.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Iterate over the elements, head first.
    ///
    /// ```
    /// use hval_utils::collections::non_empty_vec;
    ///
    /// let l = non_empty_vec![42, 36, 58];
    /// let mut l_iter = l.iter();
    ///
    /// assert_eq!(l_iter.len(), 3);
    /// assert_eq!(l_iter.next(), Some(&42));
    /// assert_eq!(l_iter.next(), Some(&36));
    /// assert_eq!(l_iter.next(), Some(&58));
    /// assert_eq!(l_iter.next(), None);
    /// ```
    pub fn iter(&self) -> NonEmptyVecIter<'_, T> {
        NonEmptyVecIter {
            head: Some(&self.head),
            tail: &self.tail,
        }
    }

    /// Extend the list with all elements of the given iterator.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tail.extend(iter)
    }

    /// Apply a function to every element, keeping the non-empty guarantee.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Sort the elements with a key extraction function, keeping the
    /// relative order of equal elements.
    #[must_use]
    pub fn sorted_by_key<K, F>(self, f: F) -> Self
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        let mut values = self.into_vec();
        values.sort_by_key(f);
        // never empty: into_vec yields at least the head
        let head = values.remove(0);
        Self { head, tail: values }
    }

    /// A structure preserving, fallible mapping function.
    pub fn try_map<E, U, F>(self, mut f: F) -> Result<NonEmptyVec<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(NonEmptyVec {
            head: f(self.head)?,
            tail: self.tail.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }

    /// Turn the list into a regular (non-empty) [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        let mut v = Vec::with_capacity(self.len());
        v.push(self.head);
        v.extend(self.tail);
        v
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(value: NonEmptyVec<T>) -> Self {
        value.into_vec()
    }
}

/// Error returned when trying to convert an empty [`Vec`] into a [`NonEmptyVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonEmptyVecEmptyError;

impl std::fmt::Display for NonEmptyVecEmptyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NonEmptyVec: empty vec")
    }
}

impl std::error::Error for NonEmptyVecEmptyError {}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = NonEmptyVecEmptyError;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Self::collect(value).ok_or(NonEmptyVecEmptyError)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::non_empty_vec;

    #[test]
    fn test_collect_and_len() {
        assert!(NonEmptyVec::<u8>::collect(Vec::new()).is_none());

        let v = NonEmptyVec::collect([1, 2, 3]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(*v.first(), 1);
        assert_eq!(*v.last(), 3);
        assert!(!v.is_empty());
    }

    #[test]
    fn test_get() {
        let v = non_empty_vec!["gzip", "br"];
        assert_eq!(v.get(0), Some(&"gzip"));
        assert_eq!(v.get(1), Some(&"br"));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(
            NonEmptyVec::<u8>::try_from(vec![]),
            Err(NonEmptyVecEmptyError)
        );
        assert_eq!(
            NonEmptyVec::try_from(vec![7, 8]).unwrap(),
            non_empty_vec![7, 8]
        );
    }

    #[test]
    fn test_sorted_by_key_is_stable() {
        let v = non_empty_vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = v.sorted_by_key(|(k, _)| *k);
        assert_eq!(
            sorted.into_vec(),
            vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]
        );
    }

    #[test]
    fn test_iter_owned_and_borrowed() {
        let v = non_empty_vec![1, 2, 3];
        let borrowed: Vec<_> = (&v).into_iter().copied().collect();
        let owned: Vec<_> = v.into_iter().collect();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_try_map() {
        let v = non_empty_vec!["1", "2"];
        let parsed = v.clone().try_map(str::parse::<u8>).unwrap();
        assert_eq!(parsed, non_empty_vec![1, 2]);

        let bad = non_empty_vec!["1", "x"];
        assert!(bad.try_map(str::parse::<u8>).is_err());
    }
}
