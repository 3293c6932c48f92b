//! First/last/single lookups that return the element itself.
//!
//! The `_or` variants take a caller message that replaces the default
//! error, surfacing as [`SeqError::Custom`].

use super::index::IndexLookup;
use super::sequence::Sequence;
use crate::error::{Result, SeqError};

/// Cardinality queries, available on every [`Sequence`].
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// let v = vec![2, 4, 5, 6];
/// assert_eq!(v.single_where(|x| x % 2 == 1), Ok(&5));
/// assert_eq!(
///     v.first_where_or(|x| *x > 10, "nothing above ten").unwrap_err().to_string(),
///     "nothing above ten"
/// );
/// assert_eq!(v.single_or_none_where(|x| *x > 10), Ok(None));
/// ```
pub trait Query: Sequence {
    /// First element satisfying `predicate`.
    ///
    /// # Errors
    /// [`SeqError::Custom`] with `message` if nothing matches.
    fn first_where_or<F, M>(&self, predicate: F, message: M) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        M: Into<String>,
    {
        self.first_index_where(predicate)
            .and_then(|i| self.item_at(i))
            .ok_or_else(|| SeqError::Custom(message.into()))
    }

    /// Last element satisfying `predicate`.
    ///
    /// # Errors
    /// [`SeqError::Custom`] with `message` if nothing matches.
    fn last_where_or<F, M>(&self, predicate: F, message: M) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        M: Into<String>,
    {
        self.last_index_where(predicate)
            .and_then(|i| self.item_at(i))
            .ok_or_else(|| SeqError::Custom(message.into()))
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    /// - [`SeqError::NoMatch`] if nothing matches.
    /// - [`SeqError::NotSingle`] if several elements match.
    fn single_where<F>(&self, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let index = self.single_index_where(predicate)?;
        self.item_at(index).ok_or(SeqError::NoMatch)
    }

    /// Like [`Query::single_where`], with every failure reported as `message`.
    ///
    /// # Errors
    /// [`SeqError::Custom`] if zero or several elements match.
    fn single_where_or<F, M>(&self, predicate: F, message: M) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
        M: Into<String>,
    {
        self.single_where(predicate)
            .map_err(|_| SeqError::Custom(message.into()))
    }

    /// `None` if nothing matches, the element if exactly one does.
    ///
    /// # Errors
    /// [`SeqError::NotSingle`] if several elements match.
    fn single_or_none_where<F>(&self, predicate: F) -> Result<Option<&Self::Item>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        match self.single_where(predicate) {
            Ok(item) => Ok(Some(item)),
            Err(SeqError::NoMatch) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Like [`Query::single_or_none_where`], reporting several matches as
    /// `message`.
    ///
    /// # Errors
    /// [`SeqError::Custom`] if several elements match.
    fn single_or_none_where_or<F, M>(
        &self,
        predicate: F,
        message: M,
    ) -> Result<Option<&Self::Item>>
    where
        F: FnMut(&Self::Item) -> bool,
        M: Into<String>,
    {
        self.single_or_none_where(predicate)
            .map_err(|_| SeqError::Custom(message.into()))
    }
}

impl<S: Sequence + ?Sized> Query for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_where_or() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(v.first_where_or(|x| x % 2 == 0, "none"), Ok(&2));
        assert_eq!(v.last_where_or(|x| x % 2 == 0, "none"), Ok(&4));
        assert_eq!(
            v.last_where_or(|x| *x > 4, String::from("no large values")),
            Err(SeqError::Custom("no large values".into()))
        );
    }

    #[test]
    fn test_single_where_default_errors() {
        let v = [1, 2, 2];
        assert_eq!(v.single_where(|x| *x == 1), Ok(&1));
        assert_eq!(v.single_where(|x| *x == 3), Err(SeqError::NoMatch));
        assert_eq!(
            v.single_where(|x| *x == 2),
            Err(SeqError::NotSingle { found: 2 })
        );
    }

    #[test]
    fn test_single_where_or_replaces_message() {
        let v = [1, 2, 2];
        let expected = Err(SeqError::Custom("need one".into()));
        assert_eq!(v.single_where_or(|x| *x == 3, "need one"), expected);
        assert_eq!(v.single_where_or(|x| *x == 2, "need one"), expected);
    }

    #[test]
    fn test_single_or_none() {
        let v = [1, 2, 2];
        assert_eq!(v.single_or_none_where(|x| *x == 9), Ok(None));
        assert_eq!(v.single_or_none_where(|x| *x == 1), Ok(Some(&1)));
        assert_eq!(
            v.single_or_none_where(|x| *x == 2),
            Err(SeqError::NotSingle { found: 2 })
        );
        assert_eq!(
            v.single_or_none_where_or(|x| *x == 2, "ambiguous"),
            Err(SeqError::Custom("ambiguous".into()))
        );
        assert_eq!(
            v.single_or_none_where_or(|x| *x == 9, "ambiguous"),
            Ok(None)
        );
    }
}
