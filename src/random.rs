//! Random number generation, shuffling, and random index selection.
//!
//! Every function takes the random source as an argument so callers choose
//! between a seeded generator ([`create_rng`]) for reproducible runs and
//! `rand::rng()` for ad-hoc sampling. None of these sources are
//! cryptographically secure.
//!
//! # Reproducibility
//!
//! The underlying algorithm of [`create_rng`] (SmallRng) is deterministic
//! for a given seed on the same platform.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Result, SeqError};

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_seqx::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Iterates backwards, swapping each element with a uniformly chosen
/// earlier (or same) position, so each of the n! permutations is equally
/// likely.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_seqx::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle(&mut v, &mut create_rng(42));
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Picks a uniformly random index in `[0, len)`.
///
/// # Returns
/// - `None` if `len` is zero.
#[inline]
pub fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}

/// Picks `count` distinct indexes in `[0, len)`.
///
/// Draws indexes one at a time and keeps each one only if it has not been
/// drawn before (rejection sampling). Expected draws stay close to `count`
/// while `count` is small relative to `len` and grow as it approaches `len`.
///
/// Indexes come back in the order they were drawn, except when
/// `count == len`, where the result is `0..len` in ascending order.
///
/// # Errors
/// [`SeqError::CountOutOfRange`] if `count > len`.
///
/// # Examples
/// ```
/// use u_seqx::random::{create_rng, many_random_indexes};
/// let mut rng = create_rng(7);
/// let picked = many_random_indexes(10, 3, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|&i| i < 10));
///
/// assert_eq!(many_random_indexes(4, 4, &mut rng).unwrap(), vec![0, 1, 2, 3]);
/// assert!(many_random_indexes(4, 5, &mut rng).is_err());
/// ```
pub fn many_random_indexes<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if count > len {
        return Err(SeqError::CountOutOfRange { count, len });
    }
    if count == len {
        return Ok((0..len).collect());
    }
    Ok(draw_distinct(len, count, rng))
}

/// Non-failing counterpart of [`many_random_indexes`].
///
/// - `count == 0` yields an empty vector.
/// - `count >= len` yields every index, ascending.
pub fn try_many_random_indexes<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    if count >= len {
        return (0..len).collect();
    }
    draw_distinct(len, count, rng)
}

fn draw_distinct<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(count < len);
    let mut seen = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let i = rng.random_range(0..len);
        if seen.insert(i) {
            picked.push(i);
        }
    }
    picked
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<usize> = (0..10).map(|_| rng1.random_range(0..100)).collect();
        let vals2: Vec<usize> = (0..10).map(|_| rng2.random_range(0..100)).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        shuffle(&mut v, &mut create_rng(123));
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        shuffle(&mut empty, &mut create_rng(0));
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut create_rng(0));
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_shuffle_accepts_unsized_rng() {
        let mut rng = create_rng(5);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let mut v = vec![1, 2, 3];
        shuffle(&mut v, dyn_rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_random_index_empty() {
        assert_eq!(random_index(0, &mut create_rng(1)), None);
    }

    #[test]
    fn test_random_index_in_range() {
        let mut rng = create_rng(1);
        for _ in 0..200 {
            let i = random_index(5, &mut rng).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn test_random_index_hits_every_position() {
        let mut rng = create_rng(9);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[random_index(4, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_many_random_indexes_rejects_excess() {
        assert_eq!(
            many_random_indexes(3, 4, &mut create_rng(0)),
            Err(SeqError::CountOutOfRange { count: 4, len: 3 })
        );
    }

    #[test]
    fn test_many_random_indexes_full_range_is_ascending() {
        assert_eq!(
            many_random_indexes(5, 5, &mut create_rng(0)).unwrap(),
            vec![0, 1, 2, 3, 4]
        );
        assert!(many_random_indexes(0, 0, &mut create_rng(0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_many_random_indexes_zero() {
        assert!(many_random_indexes(5, 0, &mut create_rng(0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_try_many_random_indexes_boundaries() {
        let mut rng = create_rng(3);
        assert!(try_many_random_indexes(5, 0, &mut rng).is_empty());
        assert_eq!(try_many_random_indexes(3, 3, &mut rng), vec![0, 1, 2]);
        assert_eq!(try_many_random_indexes(3, 10, &mut rng), vec![0, 1, 2]);
        assert!(try_many_random_indexes(0, 2, &mut rng).is_empty());
    }

    #[test]
    fn test_many_random_indexes_seeded_repeatable() {
        let a = many_random_indexes(50, 10, &mut create_rng(11)).unwrap();
        let b = many_random_indexes(50, 10, &mut create_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_many_random_indexes_keeps_draw_order() {
        let picked = many_random_indexes(50, 10, &mut create_rng(11)).unwrap();
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_ne!(picked, sorted);
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn test_many_random_indexes_few_from_huge_length() {
        let len = 1usize << 40;
        let picked = many_random_indexes(len, 2, &mut create_rng(1)).unwrap();
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
        assert!(picked.iter().all(|&i| i < len));

        let picked = try_many_random_indexes(usize::MAX, 3, &mut create_rng(2));
        assert_eq!(picked.len(), 3);
    }
}
