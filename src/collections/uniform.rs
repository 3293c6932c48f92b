//! Checks that every element (or a selected key of every element) agrees.
//!
//! A single element is trivially uniform. Any disagreement is an error in
//! every variant, including the `_or_default` / `_or_none` ones, which only
//! relax the empty case.

use super::sequence::Sequence;
use crate::error::{Result, SeqError};

/// Uniformity checks, available on every [`Sequence`].
///
/// # Examples
/// ```
/// use u_seqx::prelude::*;
///
/// assert_eq!([7, 7, 7].uniform(), Ok(&7));
/// assert!([7, 8].uniform().is_err());
///
/// let words = ["tab", "cat", "hat"];
/// assert_eq!(words.uniform_key(|w| w.len()), Ok(3));
/// assert_eq!(words.uniform_by(|w| w.len()), Ok(&"tab"));
/// ```
pub trait Uniform: Sequence {
    /// The value every element shares.
    ///
    /// # Errors
    /// - [`SeqError::Empty`] on an empty collection.
    /// - [`SeqError::NotUniform`] if two elements differ.
    fn uniform(&self) -> Result<&Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.uniform_or_none()?.ok_or(SeqError::Empty {
            operation: "uniform",
        })
    }

    /// Like [`Uniform::uniform`], but an empty collection yields `None`.
    ///
    /// # Errors
    /// [`SeqError::NotUniform`] if two elements differ.
    fn uniform_or_none(&self) -> Result<Option<&Self::Item>>
    where
        Self::Item: PartialEq,
    {
        let mut items = self.items();
        let Some(first) = items.next() else {
            return Ok(None);
        };
        if items.all(|item| item == first) {
            Ok(Some(first))
        } else {
            Err(SeqError::NotUniform)
        }
    }

    /// Like [`Uniform::uniform`], but an empty collection yields `T::default()`.
    ///
    /// # Errors
    /// [`SeqError::NotUniform`] if two elements differ.
    fn uniform_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: PartialEq + Clone + Default,
    {
        Ok(self.uniform_or_none()?.cloned().unwrap_or_default())
    }

    /// The key every element maps to under `selector`.
    ///
    /// # Errors
    /// - [`SeqError::Empty`] on an empty collection.
    /// - [`SeqError::NotUniform`] if two keys differ.
    fn uniform_key<K, F>(&self, selector: F) -> Result<K>
    where
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        self.uniform_key_with(selector, |a, b| a == b)
    }

    /// # Errors
    /// [`SeqError::NotUniform`] if two keys differ.
    fn uniform_key_or_default<K, F>(&self, selector: F) -> Result<K>
    where
        K: PartialEq + Default,
        F: FnMut(&Self::Item) -> K,
    {
        match self.uniform_key(selector) {
            Err(SeqError::Empty { .. }) => Ok(K::default()),
            other => other,
        }
    }

    /// Like [`Uniform::uniform_key`], comparing keys with `eq` instead of
    /// `PartialEq`.
    ///
    /// Every key is compared against the first one, so `eq` is expected to
    /// be an equivalence relation.
    ///
    /// # Errors
    /// - [`SeqError::Empty`] on an empty collection.
    /// - [`SeqError::NotUniform`] if `eq` rejects a pair.
    fn uniform_key_with<K, F, E>(&self, mut selector: F, mut eq: E) -> Result<K>
    where
        F: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        let mut items = self.items();
        let first = match items.next() {
            Some(item) => selector(item),
            None => {
                return Err(SeqError::Empty {
                    operation: "uniform_key",
                })
            }
        };
        for item in items {
            if !eq(&first, &selector(item)) {
                return Err(SeqError::NotUniform);
            }
        }
        Ok(first)
    }

    /// The first element, provided every element maps to the same key.
    ///
    /// # Errors
    /// - [`SeqError::Empty`] on an empty collection.
    /// - [`SeqError::NotUniform`] if two keys differ.
    fn uniform_by<K, F>(&self, selector: F) -> Result<&Self::Item>
    where
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        match self.uniform_by_or_none(selector)? {
            Some(item) => Ok(item),
            None => Err(SeqError::Empty {
                operation: "uniform_by",
            }),
        }
    }

    /// Like [`Uniform::uniform_by`], but an empty collection yields `None`.
    ///
    /// # Errors
    /// [`SeqError::NotUniform`] if two keys differ.
    fn uniform_by_or_none<K, F>(&self, mut selector: F) -> Result<Option<&Self::Item>>
    where
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items = self.items();
        let Some(first) = items.next() else {
            return Ok(None);
        };
        let key = selector(first);
        if items.all(|item| selector(item) == key) {
            Ok(Some(first))
        } else {
            Err(SeqError::NotUniform)
        }
    }
}

impl<S: Sequence + ?Sized> Uniform for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Berth {
        name: &'static str,
        quay: u8,
    }

    fn berths() -> Vec<Berth> {
        vec![
            Berth {
                name: "north",
                quay: 2,
            },
            Berth {
                name: "south",
                quay: 2,
            },
            Berth {
                name: "east",
                quay: 2,
            },
        ]
    }

    #[test]
    fn test_uniform_values() {
        assert_eq!(vec!["v", "v", "v"].uniform(), Ok(&"v"));
        assert_eq!([1].uniform(), Ok(&1));
        assert_eq!([1, 1, 2].uniform(), Err(SeqError::NotUniform));
    }

    #[test]
    fn test_uniform_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(
            empty.uniform(),
            Err(SeqError::Empty {
                operation: "uniform"
            })
        );
        assert_eq!(empty.uniform_or_none(), Ok(None));
        assert_eq!(empty.uniform_or_default(), Ok(0));
    }

    #[test]
    fn test_uniform_or_default_still_rejects_mixed() {
        assert_eq!([3, 4].uniform_or_default(), Err(SeqError::NotUniform));
        assert_eq!([4, 4].uniform_or_default(), Ok(4));
    }

    #[test]
    fn test_uniform_key() {
        let b = berths();
        assert_eq!(b.uniform_key(|b| b.quay), Ok(2));
        assert_eq!(b.uniform_key(|b| b.name), Err(SeqError::NotUniform));

        let empty: Vec<Berth> = vec![];
        assert_eq!(
            empty.uniform_key(|b| b.quay),
            Err(SeqError::Empty {
                operation: "uniform_key"
            })
        );
        assert_eq!(empty.uniform_key_or_default(|b| b.quay), Ok(0));
        assert_eq!(
            b.uniform_key_or_default(|b| b.name.len()),
            Err(SeqError::NotUniform)
        );
    }

    #[test]
    fn test_uniform_key_with_comparer() {
        let words = ["Alpha", "ALPHA", "alpha"];
        assert_eq!(
            words.uniform_key_with(|w| w.to_string(), |a, b| a.eq_ignore_ascii_case(b)),
            Ok("Alpha".to_string())
        );
        assert_eq!(
            words.uniform_key_with(|w| w.to_string(), |a, b| a == b),
            Err(SeqError::NotUniform)
        );
    }

    #[test]
    fn test_uniform_by_returns_first_item() {
        let b = berths();
        assert_eq!(b.uniform_by(|b| b.quay), Ok(&b[0]));
        assert_eq!(b.uniform_by(|b| b.name), Err(SeqError::NotUniform));
        assert_eq!(b.uniform_by_or_none(|b| b.quay), Ok(Some(&b[0])));

        let empty: Vec<Berth> = vec![];
        assert_eq!(empty.uniform_by_or_none(|b| b.quay), Ok(None));
        assert_eq!(
            empty.uniform_by(|b| b.quay),
            Err(SeqError::Empty {
                operation: "uniform_by"
            })
        );
    }
}
