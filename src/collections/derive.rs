//! Operations that build a new `Vec` and leave the source untouched.

use rand::Rng;

use super::index::IndexLookup;
use super::pop::Pop;
use super::sequence::Sequence;
use crate::error::{Result, SeqError};
use crate::random;

/// An ordered partition of a sequence, produced by [`Derive::split_where`].
///
/// Every element of the source lands in exactly one half, and each half
/// keeps the relative order the elements had in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Splitted<T> {
    /// Elements that did not satisfy the predicate.
    pub remaining: Vec<T>,
    /// Elements that satisfied the predicate.
    pub excluded: Vec<T>,
}

impl<T> Splitted<T> {
    /// Returns `(remaining, excluded)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.remaining, self.excluded)
    }

    /// Total number of elements across both halves.
    pub fn len(&self) -> usize {
        self.remaining.len() + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty() && self.excluded.is_empty()
    }
}

/// Derived-collection operations, available on every [`Sequence`].
///
/// Apart from [`Derive::swap_checked`], every method clones the source into
/// a fresh `Vec` and returns it.
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// let base = [1, 2, 3];
/// assert_eq!(base.with([4, 5]), vec![1, 2, 3, 4, 5]);
/// assert_eq!(base.with_at(0, [0]), Ok(vec![0, 1, 2, 3]));
/// assert_eq!(base.without_at(1), Ok(vec![1, 3]));
/// assert_eq!(base.with_swapped(0, 2), Ok(vec![3, 2, 1]));
///
/// let parts = base.split_where(|x| x % 2 == 1);
/// assert_eq!(parts.remaining, vec![2]);
/// assert_eq!(parts.excluded, vec![1, 3]);
/// assert_eq!(base, [1, 2, 3]);
/// ```
pub trait Derive: Sequence {
    /// A copy with `items` appended.
    fn with<I>(&self, items: I) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
        Self::Item: Clone,
    {
        let mut out = self.to_items();
        out.extend(items);
        out
    }

    /// A copy with `items` inserted so the first of them sits at `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    /// [`SeqError::InsertionOutOfRange`] if `index > len`.
    fn with_at<I>(&self, index: usize, items: I) -> Result<Vec<Self::Item>>
    where
        I: IntoIterator<Item = Self::Item>,
        Self::Item: Clone,
    {
        let len = self.item_count();
        if index > len {
            return Err(SeqError::InsertionOutOfRange { index, len });
        }
        let mut out = self.to_items();
        out.splice(index..index, items);
        Ok(out)
    }

    /// A copy with every occurrence of each listed item dropped.
    fn without(&self, items: &[Self::Item]) -> Vec<Self::Item>
    where
        Self::Item: Clone + PartialEq,
    {
        self.without_where(|x| items.contains(x))
    }

    /// A copy keeping only the elements that fail `predicate`.
    fn without_where<F>(&self, mut predicate: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        self.items().filter(|x| !predicate(x)).cloned().collect()
    }

    /// A copy with the element at `index` dropped.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfRange`] if `index >= len`.
    fn without_at(&self, index: usize) -> Result<Vec<Self::Item>>
    where
        Self::Item: Clone,
    {
        let mut out = self.to_items();
        out.pop_at(index)?;
        Ok(out)
    }

    /// A copy with the elements at `a` and `b` exchanged.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfRange`] if either index is out of range.
    fn with_swapped(&self, a: usize, b: usize) -> Result<Vec<Self::Item>>
    where
        Self::Item: Clone,
    {
        check_pair(self, a, b)?;
        let mut out = self.to_items();
        out.swap(a, b);
        Ok(out)
    }

    /// Swaps the elements at `a` and `b` in place.
    ///
    /// Works on fixed-size sequences too, since the length is unchanged.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfRange`] if either index is out of range; the
    /// sequence is left as it was.
    fn swap_checked(&mut self, a: usize, b: usize) -> Result<()> {
        check_pair(self, a, b)?;
        self.exchange(a, b);
        Ok(())
    }

    /// A shuffled copy. See [`random::shuffle`].
    fn to_shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut out = self.to_items();
        random::shuffle(&mut out, rng);
        out
    }

    /// Partitions a copy into non-matching (`remaining`) and matching
    /// (`excluded`) elements, both in source order.
    fn split_where<F>(&self, predicate: F) -> Splitted<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        let mut remaining = self.to_items();
        let excluded = remaining.pop_all_where(predicate);
        Splitted {
            remaining,
            excluded,
        }
    }
}

impl<S: Sequence + ?Sized> Derive for S {}

fn check_pair<S: Sequence + ?Sized>(seq: &S, a: usize, b: usize) -> Result<()> {
    let len = seq.item_count();
    for index in [a, b] {
        if !seq.is_within_range(index) {
            return Err(SeqError::IndexOutOfRange { index, len });
        }
    }
    Ok(())
}
