//! Capability traits the extension traits are written against.
//!
//! Two capabilities are kept apart:
//!
//! - [`Sequence`]: ordered, positionally indexable, fixed length from the
//!   caller's point of view. Implemented for `[T]`, `[T; N]`, `Vec<T>` and
//!   `VecDeque<T>`.
//! - [`Resizable`]: a [`Sequence`] that can also grow and shrink.
//!   Implemented for `Vec<T>` and `VecDeque<T>` only.
//!
//! Operations that insert or remove are only offered through [`Resizable`],
//! so calling `pop_first` or `remove_all` on an array fails to compile
//! instead of failing at run time.
//!
//! Method names are prefixed (`item_*`) so that bringing these traits into
//! scope never shadows the inherent `len`/`get`/`remove` of the std
//! containers.

use std::collections::VecDeque;

/// An ordered collection with positional access.
pub trait Sequence {
    type Item;

    /// Number of elements.
    fn item_count(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable element at `index`, or `None` past the end.
    fn item_at_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Swaps two positions.
    ///
    /// # Panics
    /// Panics if either index is out of bounds. Bounds-checked callers live
    /// in [`Derive::swap_checked`](crate::collections::Derive::swap_checked).
    fn exchange(&mut self, a: usize, b: usize);

    /// Iterates the elements in index order.
    fn items(&self) -> Items<'_, Self> {
        Items {
            seq: self,
            front: 0,
            back: self.item_count(),
        }
    }

    /// Clones every element into a new `Vec`, preserving order.
    fn to_items(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.items().cloned().collect()
    }
}

/// A [`Sequence`] whose length can change.
pub trait Resizable: Sequence {
    /// Inserts `item` so that it ends up at `index`.
    ///
    /// # Panics
    /// Panics if `index > item_count()`.
    fn insert_item(&mut self, index: usize, item: Self::Item);

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one.
    ///
    /// # Panics
    /// Panics if `index >= item_count()`.
    fn remove_item(&mut self, index: usize) -> Self::Item;

    fn push_item(&mut self, item: Self::Item) {
        let end = self.item_count();
        self.insert_item(end, item);
    }

    /// Empties the collection, returning every element in order.
    fn take_items(&mut self) -> Vec<Self::Item>;
}

/// Borrowing iterator over a [`Sequence`], created by [`Sequence::items`].
pub struct Items<'a, S: Sequence + ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iterator for Items<'a, S> {
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let seq: &'a S = self.seq;
        let item = seq.item_at(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, S: Sequence + ?Sized> DoubleEndedIterator for Items<'a, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let seq: &'a S = self.seq;
        seq.item_at(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Items<'_, S> {}

impl<S: Sequence + ?Sized> std::iter::FusedIterator for Items<'_, S> {}

impl<S: Sequence + ?Sized> Clone for Items<'_, S> {
    fn clone(&self) -> Self {
        Items {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn item_count(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn item_at_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn item_count(&self) -> usize {
        N
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<&T> {
        self.as_slice().item_at(index)
    }

    #[inline]
    fn item_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().item_at_mut(index)
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.as_mut_slice().exchange(a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn item_count(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<&T> {
        self.as_slice().item_at(index)
    }

    #[inline]
    fn item_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().item_at_mut(index)
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.as_mut_slice().exchange(a, b);
    }
}

impl<T> Resizable for Vec<T> {
    #[inline]
    fn insert_item(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item);
    }

    #[inline]
    fn remove_item(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn take_items(&mut self) -> Vec<T> {
        std::mem::take(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn item_count(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn item_at_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> Resizable for VecDeque<T> {
    #[inline]
    fn insert_item(&mut self, index: usize, item: T) {
        VecDeque::insert(self, index, item);
    }

    fn remove_item(&mut self, index: usize) -> T {
        match VecDeque::remove(self, index) {
            Some(item) => item,
            None => panic!(
                "removal index (is {index}) should be < len (is {})",
                VecDeque::len(self)
            ),
        }
    }

    #[inline]
    fn push_item(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    fn take_items(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_array_access() {
        let arr = [10, 20, 30];
        assert_eq!(arr.item_count(), 3);
        assert_eq!(arr.item_at(1), Some(&20));
        assert_eq!(arr.item_at(3), None);

        let slice: &[i32] = &arr[1..];
        assert_eq!(slice.item_count(), 2);
        assert_eq!(slice.item_at(0), Some(&20));
    }

    #[test]
    fn test_items_iterates_both_ends() {
        let v = vec!['a', 'b', 'c', 'd'];
        let mut it = v.items();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&'a'));
        assert_eq!(it.next_back(), Some(&'d'));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![&'b', &'c']);
    }

    #[test]
    fn test_exchange() {
        let mut arr = [1, 2, 3];
        arr.exchange(0, 2);
        assert_eq!(arr, [3, 2, 1]);

        let mut dq: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
        dq.exchange(0, 1);
        assert_eq!(dq, VecDeque::from(vec![2, 1, 3]));
    }

    #[test]
    fn test_vec_resizable() {
        let mut v = vec![1, 3];
        v.insert_item(1, 2);
        v.push_item(4);
        assert_eq!(v, vec![1, 2, 3, 4]);
        assert_eq!(v.remove_item(0), 1);
        assert_eq!(v.take_items(), vec![2, 3, 4]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_vec_deque_resizable() {
        let mut dq: VecDeque<i32> = VecDeque::new();
        dq.push_item(2);
        dq.insert_item(0, 1);
        dq.push_item(3);
        assert_eq!(dq.to_items(), vec![1, 2, 3]);
        assert_eq!(dq.remove_item(1), 2);
        assert_eq!(dq.take_items(), vec![1, 3]);
        assert!(dq.is_empty());
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_vec_deque_remove_out_of_bounds_panics() {
        let mut dq: VecDeque<i32> = VecDeque::new();
        dq.remove_item(0);
    }
}
