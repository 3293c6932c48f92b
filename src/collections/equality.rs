//! Equality between sequences that may be absent.
//!
//! "Absent" is `None`. Two absent sequences are equal; an absent and a
//! present one never are, even if the present one is empty.

/// Ordered element-wise equality.
///
/// # Examples
/// ```
/// use u_seqx::collections::sequence_equal_or_none;
///
/// assert!(sequence_equal_or_none::<i32>(None, None));
/// assert!(!sequence_equal_or_none(None, Some(&[1][..])));
/// assert!(!sequence_equal_or_none(Some(&[1, 2][..]), Some(&[2, 1][..])));
/// assert!(sequence_equal_or_none(Some(&[1, 2][..]), Some(&[1, 2][..])));
/// ```
pub fn sequence_equal_or_none<T: PartialEq>(first: Option<&[T]>, second: Option<&[T]>) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Order-insensitive equality, as one-directional containment.
///
/// Returns `true` when every element of `first` occurs somewhere in
/// `second`. Duplicate counts are not compared and extra elements in
/// `second` are ignored, so `[1, 2]` vs `[1, 2, 2, 3]` is `true` while the
/// reverse is `false`.
///
/// # Examples
/// ```
/// use u_seqx::collections::unordered_equal_or_none;
///
/// assert!(unordered_equal_or_none(Some(&[2, 1][..]), Some(&[1, 2][..])));
/// assert!(unordered_equal_or_none(Some(&[1, 2][..]), Some(&[1, 2, 2][..])));
/// assert!(!unordered_equal_or_none(Some(&[1, 3][..]), Some(&[1, 2][..])));
/// ```
pub fn unordered_equal_or_none<T: PartialEq>(first: Option<&[T]>, second: Option<&[T]>) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(a), Some(b)) => a.iter().all(|x| b.contains(x)),
        _ => false,
    }
}
