use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A thread-safe, append-only set of canonical values.
///
/// [`Interner::get_or_insert`] returns the shared instance equal to the
/// given value, inserting it first when there is none yet. Interning the
/// same value twice hands out pointer-equal [`Arc`]s, which lets
/// frequently repeated values (header names, common media ranges)
/// be compared and stored cheaply.
///
/// There is no global instance: whoever wants canonical values
/// owns an interner and passes it along.
///
/// ```
/// use hval_utils::collections::Interner;
/// use std::sync::Arc;
///
/// let interner: Interner<str> = Interner::new();
/// let a = interner.get_or_insert("accept");
/// let b = interner.get_or_insert("accept");
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(interner.len(), 1);
/// ```
pub struct Interner<T: ?Sized> {
    values: RwLock<HashSet<Arc<T>, ahash::RandomState>>,
}

impl<T: ?Sized> Interner<T> {
    /// Create a new empty [`Interner`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashSet::with_hasher(ahash::RandomState::new())),
        }
    }

    /// Number of distinct values interned so far.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Returns true if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl<T> Interner<T>
where
    T: ?Sized + Hash + Eq,
{
    /// Return the canonical instance of `value`, if it was interned before.
    pub fn get(&self, value: &T) -> Option<Arc<T>> {
        self.values.read().get(value).cloned()
    }

    /// Returns true if an equal value was interned before.
    pub fn contains(&self, value: &T) -> bool {
        self.values.read().contains(value)
    }

    /// Return the canonical instance of `value`,
    /// inserting a new one if it is not yet known.
    pub fn get_or_insert(&self, value: &T) -> Arc<T>
    where
        for<'a> Arc<T>: From<&'a T>,
    {
        if let Some(canonical) = self.get(value) {
            return canonical;
        }
        let mut values = self.values.write();
        // another writer may have inserted it in the meantime
        if let Some(canonical) = values.get(value) {
            return canonical.clone();
        }
        let canonical = Arc::from(value);
        values.insert(canonical.clone());
        canonical
    }

    /// Return the canonical instance equal to the given [`Arc`],
    /// keeping the given one as canonical when it is new.
    pub fn intern_arc(&self, value: Arc<T>) -> Arc<T> {
        if let Some(canonical) = self.get(&value) {
            return canonical;
        }
        let mut values = self.values.write();
        if let Some(canonical) = values.get(&*value) {
            return canonical.clone();
        }
        values.insert(value.clone());
        value
    }
}

impl<T: ?Sized> Default for Interner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Interner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interner")
            .field("len", &self.len())
            .finish()
    }
}
