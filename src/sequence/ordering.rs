use std::collections::HashSet;
use std::hash::Hash;

use super::sequence::Sequence;

/// Ordering used by [`Sequence::min`] and [`Sequence::max`].
pub trait Ranked {
    /// Whether `self` ranks strictly below `other`.
    fn ranks_below(&self, other: &Self) -> bool;
}

macro_rules! impl_ranked_numeric {
    ($($t:ty),*) => {
        $(
            impl Ranked for $t {
                fn ranks_below(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_ranked_numeric!(i32, i64, u32, u64, f32, f64);

/// Text ranks by length first; equal lengths fall back to [`weight`].
impl Ranked for String {
    fn ranks_below(&self, other: &Self) -> bool {
        (self.len(), weight(self)) < (other.len(), weight(other))
    }
}

/// Sum of the code points of every character in `text`.
pub fn weight(text: &str) -> u64 {
    text.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Key used by [`Sequence::uniq`] to decide whether two elements are duplicates.
pub trait UniqueKey {
    type Key: Hash + Eq;

    fn unique_key(&self) -> Self::Key;
}

macro_rules! impl_unique_key_integer {
    ($($t:ty),*) => {
        $(
            impl UniqueKey for $t {
                type Key = $t;

                fn unique_key(&self) -> Self::Key {
                    *self
                }
            }
        )*
    };
}

impl_unique_key_integer!(i32, i64, u32, u64);

// -0.0 and 0.0 compare equal, so they share a key.
impl UniqueKey for f64 {
    type Key = u64;

    fn unique_key(&self) -> Self::Key {
        if *self == 0.0 {
            0.0_f64.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl UniqueKey for f32 {
    type Key = u32;

    fn unique_key(&self) -> Self::Key {
        if *self == 0.0 {
            0.0_f32.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl UniqueKey for String {
    type Key = String;

    fn unique_key(&self) -> Self::Key {
        self.clone()
    }
}

impl<T: Ranked> Sequence<T> {
    /// Lowest ranked element; the earliest one wins a tie.
    pub fn min(&self) -> Option<&T> {
        self.iter()
            .fold(None, |best: Option<&T>, el| match best {
                Some(current) if !el.ranks_below(current) => Some(current),
                _ => Some(el),
            })
    }

    /// Highest ranked element; the earliest one wins a tie.
    pub fn max(&self) -> Option<&T> {
        self.iter()
            .fold(None, |best: Option<&T>, el| match best {
                Some(current) if !current.ranks_below(el) => Some(current),
                _ => Some(el),
            })
    }
}

impl<T: UniqueKey> Sequence<T> {
    /// Removes duplicated elements, keeping the first occurrence of each.
    pub fn uniq(&mut self) {
        if self.is_empty() {
            return;
        }

        let mut seen = HashSet::with_capacity(self.len());
        let kept: Vec<T> = std::mem::take(self)
            .into_iter()
            .filter(|el| seen.insert(el.unique_key()))
            .collect();
        *self = Sequence::from(kept);
    }
}
