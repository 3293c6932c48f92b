//! Remove-and-return operations over any [`Resizable`] sequence.
//!
//! [`Pop::try_pop_at`] is the single bounds-checked removal every other
//! operation here funnels into. Each lookup-then-pop comes in three shapes:
//!
//! - `pop_*` returns `Result<T>` and names the reason on failure.
//! - `try_pop_*` returns [`TryGet<T>`] and never fails.
//! - `pop_*_or_default` returns `T::default()` when nothing was found.
//!
//! In all of them the collection is only modified when a value is returned.

use rand::Rng;

use super::index::IndexLookup;
use super::sequence::Resizable;
use crate::error::{Result, SeqError};
use crate::outcome::TryGet;

/// Pop operations, available on every [`Resizable`] sequence.
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// assert_eq!(v.pop_many_at(&[1, 3]), Ok(vec![2, 4]));
/// assert_eq!(v, vec![1, 3, 5]);
///
/// assert_eq!(v.pop_first_where(|x| *x > 1), Ok(3));
/// assert_eq!(v.try_pop_at(9), TryGet::Failure);
/// assert_eq!(v, vec![1, 5]);
/// ```
pub trait Pop: Resizable {
    /// Removes and returns the element at `index`.
    ///
    /// Leaves the collection untouched when `index` is out of range.
    fn try_pop_at(&mut self, index: usize) -> TryGet<Self::Item> {
        if !self.is_within_range(index) {
            return TryGet::Failure;
        }
        TryGet::Success(self.remove_item(index))
    }

    /// # Errors
    /// [`SeqError::IndexOutOfRange`] if `index >= len`.
    fn pop_at(&mut self, index: usize) -> Result<Self::Item> {
        let len = self.item_count();
        self.try_pop_at(index)
            .ok_or(SeqError::IndexOutOfRange { index, len })
    }

    /// Removes the elements at several original positions at once.
    ///
    /// Every index refers to the collection as it was before the call; the
    /// removal runs from the highest position down so earlier removals never
    /// shift a pending one. Popped items are returned in ascending positional
    /// order, whatever order `indexes` lists them in.
    ///
    /// All indexes are validated first; on any error nothing is removed.
    ///
    /// # Errors
    /// - [`SeqError::IndexOutOfRange`] for the first out-of-range index.
    /// - [`SeqError::DuplicateIndex`] if a position is listed twice.
    fn pop_many_at(&mut self, indexes: &[usize]) -> Result<Vec<Self::Item>> {
        let len = self.item_count();
        if let Some(&index) = indexes.iter().find(|&&i| i >= len) {
            return Err(SeqError::IndexOutOfRange { index, len });
        }
        let mut ordered = indexes.to_vec();
        ordered.sort_unstable();
        if let Some(pair) = ordered.windows(2).find(|w| w[0] == w[1]) {
            return Err(SeqError::DuplicateIndex { index: pair[0] });
        }

        let mut popped: Vec<Self::Item> =
            ordered.iter().rev().map(|&i| self.remove_item(i)).collect();
        popped.reverse();
        Ok(popped)
    }

    fn try_pop_many_at(&mut self, indexes: &[usize]) -> TryGet<Vec<Self::Item>> {
        self.pop_many_at(indexes).ok().into()
    }

    // ------------------------------------------------------------------
    // First
    // ------------------------------------------------------------------

    /// # Errors
    /// [`SeqError::Empty`] on an empty collection.
    fn pop_first(&mut self) -> Result<Self::Item> {
        self.try_pop_first().ok_or(SeqError::Empty {
            operation: "pop_first",
        })
    }

    /// # Errors
    /// [`SeqError::ItemNotFound`] if `item` is absent.
    fn pop_first_of(&mut self, item: &Self::Item) -> Result<Self::Item>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        match self.first_index_of(item) {
            Some(index) => self.pop_at(index),
            None => Err(SeqError::item_not_found(item)),
        }
    }

    /// # Errors
    /// [`SeqError::NoMatch`] if nothing satisfies `predicate`.
    fn pop_first_where<F>(&mut self, predicate: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_pop_first_where(predicate).ok_or(SeqError::NoMatch)
    }

    fn try_pop_first(&mut self) -> TryGet<Self::Item> {
        self.try_pop_at(0)
    }

    fn try_pop_first_of(&mut self, item: &Self::Item) -> TryGet<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.try_pop_first_where(|x| x == item)
    }

    fn try_pop_first_where<F>(&mut self, predicate: F) -> TryGet<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        match self.first_index_where(predicate) {
            Some(index) => self.try_pop_at(index),
            None => TryGet::Failure,
        }
    }

    fn pop_first_or_default(&mut self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.try_pop_first().unwrap_or_default()
    }

    fn pop_first_or_default_where<F>(&mut self, predicate: F) -> Self::Item
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Default,
    {
        self.try_pop_first_where(predicate).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Last
    // ------------------------------------------------------------------

    /// # Errors
    /// [`SeqError::Empty`] on an empty collection.
    fn pop_last(&mut self) -> Result<Self::Item> {
        self.try_pop_last().ok_or(SeqError::Empty {
            operation: "pop_last",
        })
    }

    /// # Errors
    /// [`SeqError::ItemNotFound`] if `item` is absent.
    fn pop_last_of(&mut self, item: &Self::Item) -> Result<Self::Item>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        match self.last_index_of(item) {
            Some(index) => self.pop_at(index),
            None => Err(SeqError::item_not_found(item)),
        }
    }

    /// # Errors
    /// [`SeqError::NoMatch`] if nothing satisfies `predicate`.
    fn pop_last_where<F>(&mut self, predicate: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_pop_last_where(predicate).ok_or(SeqError::NoMatch)
    }

    fn try_pop_last(&mut self) -> TryGet<Self::Item> {
        match self.last_index() {
            Some(index) => self.try_pop_at(index),
            None => TryGet::Failure,
        }
    }

    fn try_pop_last_of(&mut self, item: &Self::Item) -> TryGet<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.try_pop_last_where(|x| x == item)
    }

    fn try_pop_last_where<F>(&mut self, predicate: F) -> TryGet<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        match self.last_index_where(predicate) {
            Some(index) => self.try_pop_at(index),
            None => TryGet::Failure,
        }
    }

    fn pop_last_or_default(&mut self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.try_pop_last().unwrap_or_default()
    }

    fn pop_last_or_default_where<F>(&mut self, predicate: F) -> Self::Item
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Default,
    {
        self.try_pop_last_where(predicate).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Random
    // ------------------------------------------------------------------

    /// Removes a uniformly chosen element.
    ///
    /// # Errors
    /// [`SeqError::Empty`] on an empty collection.
    fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Self::Item> {
        self.try_pop_random(rng).ok_or(SeqError::Empty {
            operation: "pop_random",
        })
    }

    fn try_pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TryGet<Self::Item> {
        match self.random_index(rng) {
            Some(index) => self.try_pop_at(index),
            None => TryGet::Failure,
        }
    }

    /// Removes `count` elements from distinct random positions.
    ///
    /// The popped items are exactly those that occupied the chosen original
    /// positions, returned in ascending positional order.
    ///
    /// # Errors
    /// [`SeqError::CountOutOfRange`] if `count` exceeds the length.
    fn pop_many_randoms<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Item>> {
        let indexes = self.many_random_indexes(count, rng)?;
        self.pop_many_at(&indexes)
    }

    // ------------------------------------------------------------------
    // Single
    // ------------------------------------------------------------------

    /// Removes the only element.
    ///
    /// # Errors
    /// - [`SeqError::Empty`] on an empty collection.
    /// - [`SeqError::NotSingle`] if there is more than one element.
    fn pop_single(&mut self) -> Result<Self::Item> {
        match self.item_count() {
            0 => Err(SeqError::Empty {
                operation: "pop_single",
            }),
            1 => self.pop_at(0),
            found => Err(SeqError::NotSingle { found }),
        }
    }

    /// # Errors
    /// Same as [`IndexLookup::single_index_of`].
    fn pop_single_of(&mut self, item: &Self::Item) -> Result<Self::Item>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        let index = self.single_index_of(item)?;
        self.pop_at(index)
    }

    /// # Errors
    /// Same as [`IndexLookup::single_index_where`].
    fn pop_single_where<F>(&mut self, predicate: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let index = self.single_index_where(predicate)?;
        self.pop_at(index)
    }

    /// Like [`Pop::pop_single`], but an empty collection yields `T::default()`.
    ///
    /// # Errors
    /// [`SeqError::NotSingle`] if there is more than one element.
    fn pop_single_or_default(&mut self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        match self.pop_single() {
            Err(SeqError::Empty { .. }) => Ok(Default::default()),
            other => other,
        }
    }

    /// Like [`Pop::pop_single_where`], but no match yields `T::default()`.
    ///
    /// # Errors
    /// [`SeqError::NotSingle`] if several elements match.
    fn pop_single_or_default_where<F>(&mut self, predicate: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        Self::Item: Default,
    {
        match self.pop_single_where(predicate) {
            Err(SeqError::NoMatch) => Ok(Default::default()),
            other => other,
        }
    }

    // ------------------------------------------------------------------
    // All
    // ------------------------------------------------------------------

    /// Empties the collection, returning everything in order.
    fn pop_all(&mut self) -> Vec<Self::Item> {
        self.take_items()
    }

    fn pop_all_of(&mut self, item: &Self::Item) -> Vec<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.pop_all_where(|x| x == item)
    }

    /// Removes every element satisfying `predicate`.
    ///
    /// The returned items keep the relative order they had in the collection.
    fn pop_all_where<F>(&mut self, predicate: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let indexes = self.indexes_where(predicate);
        let mut popped: Vec<Self::Item> =
            indexes.iter().rev().map(|&i| self.remove_item(i)).collect();
        popped.reverse();
        popped
    }
}

impl<S: Resizable + ?Sized> Pop for S {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(250))]

        #[test]
        fn pop_at_removes_exactly_one(
            data in proptest::collection::vec(0_i32..100, 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(data.len());
            let mut v = data.clone();
            let popped = v.pop_at(index).unwrap();
            prop_assert_eq!(popped, data[index]);
            prop_assert_eq!(v.len(), data.len() - 1);
            let mut expected = data.clone();
            expected.remove(index);
            prop_assert_eq!(v, expected);
        }

        #[test]
        fn pop_at_out_of_range_is_noop(
            data in proptest::collection::vec(0_i32..100, 0..30),
            extra in 0_usize..10,
        ) {
            let mut v = data.clone();
            let index = data.len() + extra;
            prop_assert!(v.pop_at(index).is_err());
            prop_assert_eq!(v, data);
        }

        #[test]
        fn pop_many_at_matches_original_positions(
            data in proptest::collection::vec(0_i32..1000, 0..30),
            seed in 0_u64..10000,
            frac in 0.0_f64..=1.0,
        ) {
            let count = ((data.len() as f64) * frac).floor() as usize;
            let mut rng = crate::random::create_rng(seed);
            let indexes = data.many_random_indexes(count, &mut rng).unwrap();
            let mut sorted = indexes.clone();
            sorted.sort_unstable();
            let expected: Vec<i32> = sorted.iter().map(|&i| data[i]).collect();

            let mut v = data.clone();
            prop_assert_eq!(v.pop_many_at(&indexes).unwrap(), expected);
            prop_assert_eq!(v.len(), data.len() - count);
        }
    }
}
