use serde::{Deserialize, Serialize};

/// How [`Sequence::pop_with`] picks the elements it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopStrategy {
    /// Remove the trailing elements by position.
    #[default]
    Positional,
    /// Read the trailing value, then delete its first occurrence.
    ///
    /// Kept for callers relying on the older behavior: when the trailing value also appears
    /// earlier, the earlier copy is the one removed.
    ByValue,
}

/// An ordered, caller-owned list of elements of a single type.
///
/// Mutating helpers work in place; derived helpers (`map`, `select`, conversions) allocate a new
/// sequence and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    inner: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    /// Drops every element while keeping the allocation.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Appends the elements of every sequence in `others`, in argument order.
    pub fn concat<I>(&mut self, others: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        for other in others {
            self.inner.extend(other);
        }
    }

    /// Builds a new sequence of the same length from the results of `f`.
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence {
            inner: self.inner.iter().map(f).collect(),
        }
    }

    /// Returns the elements for which `predicate` holds, in their original order.
    pub fn select<F>(&self, mut predicate: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.inner
            .iter()
            .filter(|el| predicate(el))
            .cloned()
            .collect()
    }

    /// Removes the last element and returns it.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_n(1)
    }

    /// Removes the last `n` elements and returns the earliest of them, i.e. the last one removed.
    ///
    /// Nothing is removed when `n` is zero or larger than the sequence.
    pub fn pop_n(&mut self, n: usize) -> Option<T> {
        if !self.can_pop(n) {
            return None;
        }

        let tail = self.inner.split_off(self.inner.len() - n);
        tail.into_iter().next()
    }

    fn can_pop(&self, n: usize) -> bool {
        if n == 0 || self.inner.is_empty() {
            return false;
        }
        if n > self.inner.len() {
            tracing::trace!(requested = n, len = self.inner.len(), "pop past start of sequence");
            return false;
        }
        true
    }
}

impl<T: PartialEq> Sequence<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.iter().any(|el| el == value)
    }

    /// Position of the first element equal to `value`.
    pub fn index(&self, value: &T) -> Option<usize> {
        self.inner.iter().position(|el| el == value)
    }

    /// Removes the first element equal to `value`; order of the rest is kept.
    pub fn delete(&mut self, value: &T) {
        if let Some(pos) = self.index(value) {
            self.inner.remove(pos);
        }
    }

    /// Removes every element equal to `value`.
    pub fn delete_all(&mut self, value: &T) {
        self.inner.retain(|el| el != value);
    }
}

impl<T: PartialEq + Clone> Sequence<T> {
    /// [`pop_n`](Self::pop_n) with an explicit removal strategy.
    pub fn pop_with(&mut self, n: usize, strategy: PopStrategy) -> Option<T> {
        match strategy {
            PopStrategy::Positional => self.pop_n(n),
            PopStrategy::ByValue => {
                if !self.can_pop(n) {
                    return None;
                }

                let mut last = None;
                for _ in 0..n {
                    // n <= len, so every round still has a trailing element
                    if let Some(value) = self.inner.last().cloned() {
                        self.delete(&value);
                        last = Some(value);
                    }
                }
                last
            }
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(inner: Vec<T>) -> Self {
        Sequence { inner }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Sequence {
            inner: Vec::from(values),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.inner
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}
