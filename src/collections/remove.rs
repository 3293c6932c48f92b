//! In-place removal without returning the removed values.

use super::index::IndexLookup;
use super::pop::Pop;
use super::sequence::Resizable;
use crate::error::{Result, SeqError};

/// Remove operations, available on every [`Resizable`] sequence.
///
/// Fixed-size sequences (`[T; N]`, `[T]`) do not implement [`Resizable`],
/// so these methods are not callable on them.
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// let mut v = vec!["x", "y", "x", "z"];
/// v.remove_last(&"x").unwrap();
/// assert_eq!(v, vec!["x", "y", "z"]);
/// assert!(!v.try_remove_first(&"w"));
/// assert_eq!(v.remove_all_where(|s| *s != "y"), 2);
/// assert_eq!(v, vec!["y"]);
/// ```
pub trait Remove: Resizable {
    /// Removes the first occurrence of `item`.
    ///
    /// # Errors
    /// [`SeqError::ItemNotFound`] if `item` is absent.
    fn remove_first(&mut self, item: &Self::Item) -> Result<()>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        self.pop_first_of(item).map(drop)
    }

    /// # Errors
    /// [`SeqError::NoMatch`] if nothing satisfies `predicate`.
    fn remove_first_where<F>(&mut self, predicate: F) -> Result<()>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        if self.try_remove_first_where(predicate) {
            Ok(())
        } else {
            Err(SeqError::NoMatch)
        }
    }

    /// Removes the last occurrence of `item`.
    ///
    /// # Errors
    /// [`SeqError::ItemNotFound`] if `item` is absent.
    fn remove_last(&mut self, item: &Self::Item) -> Result<()>
    where
        Self::Item: PartialEq + std::fmt::Debug,
    {
        self.pop_last_of(item).map(drop)
    }

    /// # Errors
    /// [`SeqError::NoMatch`] if nothing satisfies `predicate`.
    fn remove_last_where<F>(&mut self, predicate: F) -> Result<()>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        if self.try_remove_last_where(predicate) {
            Ok(())
        } else {
            Err(SeqError::NoMatch)
        }
    }

    /// Returns whether anything was removed.
    fn try_remove_first(&mut self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.try_remove_first_where(|x| x == item)
    }

    fn try_remove_first_where<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_pop_first_where(predicate).is_success()
    }

    /// Returns whether anything was removed.
    fn try_remove_last(&mut self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.try_remove_last_where(|x| x == item)
    }

    fn try_remove_last_where<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_pop_last_where(predicate).is_success()
    }

    /// Removes every occurrence of `item`, returning how many were removed.
    fn remove_all(&mut self, item: &Self::Item) -> usize
    where
        Self::Item: PartialEq,
    {
        self.remove_all_where(|x| x == item)
    }

    /// Removes every element satisfying `predicate`, returning how many were
    /// removed.
    ///
    /// The number of matches is fixed before anything is removed; each round
    /// then removes the first remaining match. `predicate` is therefore
    /// called more than once per element.
    fn remove_all_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let matches = self.items().filter(|x| predicate(x)).count();
        let mut removed = 0;
        while removed < matches {
            match self.first_index_where(&mut predicate) {
                Some(index) => {
                    self.remove_item(index);
                    removed += 1;
                }
                None => break,
            }
        }
        removed
    }
}

impl<S: Resizable + ?Sized> Remove for S {}
