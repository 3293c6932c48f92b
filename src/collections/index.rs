//! Position lookups over any [`Sequence`].
//!
//! Positions are `usize`; "not found" is `None` rather than a sentinel.
//! These lookups are the building blocks the pop and remove families use to
//! find what to take out.

use rand::Rng;

use super::sequence::Sequence;
use crate::error::{Result, SeqError};
use crate::random;

/// Index utilities, available on every [`Sequence`].
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// let v = vec![3, 1, 4, 1, 5];
/// assert_eq!(v.first_index_of(&1), Some(1));
/// assert_eq!(v.last_index_of(&1), Some(3));
/// assert_eq!(v.indexes_of(&1), vec![1, 3]);
/// assert_eq!(v.single_index_of(&4), Ok(2));
/// assert!(v.single_index_of(&1).is_err());
/// assert_eq!(v.last_index(), Some(4));
/// ```
pub trait IndexLookup: Sequence {
    fn first_index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.first_index_where(|x| x == item)
    }

    /// Lowest index whose element satisfies `predicate`.
    fn first_index_where<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.items().position(|x| predicate(x))
    }

    fn last_index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.last_index_where(|x| x == item)
    }

    /// Highest index whose element satisfies `predicate`, scanning from the end.
    fn last_index_where<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.items().rposition(|x| predicate(x))
    }

    /// The one index holding `item`.
    ///
    /// # Errors
    /// - [`SeqError::ItemNotFound`] if `item` is absent.
    /// - [`SeqError::NotSingle`] if it occurs more than once.
    fn single_index_of(&self, item: &Self::Item) -> Result<usize>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        match exactly_one(self.indexes_of(item)) {
            Err(SeqError::NotSingle { found: 0 }) => Err(SeqError::item_not_found(item)),
            other => other,
        }
    }

    /// The one index whose element satisfies `predicate`.
    ///
    /// # Errors
    /// - [`SeqError::NoMatch`] if nothing matches.
    /// - [`SeqError::NotSingle`] if several elements match.
    fn single_index_where<F>(&self, predicate: F) -> Result<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        match exactly_one(self.indexes_where(predicate)) {
            Err(SeqError::NotSingle { found: 0 }) => Err(SeqError::NoMatch),
            other => other,
        }
    }

    fn indexes_of(&self, item: &Self::Item) -> Vec<usize>
    where
        Self::Item: PartialEq,
    {
        self.indexes_where(|x| x == item)
    }

    /// Every index whose element satisfies `predicate`, ascending.
    fn indexes_where<F>(&self, mut predicate: F) -> Vec<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.items()
            .enumerate()
            .filter_map(|(i, x)| predicate(x).then_some(i))
            .collect()
    }

    /// A uniformly chosen index, or `None` when empty.
    fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        random::random_index(self.item_count(), rng)
    }

    /// `count` distinct random indexes. See [`random::many_random_indexes`].
    fn many_random_indexes<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        random::many_random_indexes(self.item_count(), count, rng)
    }

    /// See [`random::try_many_random_indexes`].
    fn try_many_random_indexes<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        random::try_many_random_indexes(self.item_count(), count, rng)
    }

    /// `true` iff `index` addresses an existing element.
    #[inline]
    fn is_within_range(&self, index: usize) -> bool {
        index < self.item_count()
    }

    /// Index of the last element, or `None` when empty.
    #[inline]
    fn last_index(&self) -> Option<usize> {
        self.item_count().checked_sub(1)
    }
}

impl<S: Sequence + ?Sized> IndexLookup for S {}

fn exactly_one(indexes: Vec<usize>) -> Result<usize> {
    match indexes.as_slice() {
        [single] => Ok(*single),
        _ => Err(SeqError::NotSingle {
            found: indexes.len(),
        }),
    }
}
