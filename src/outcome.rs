//! Success/failure wrapper returned by the non-throwing `try_*` operations.
//!
//! A successful pop of `0` or `""` is `Success(0)` / `Success("")`, never
//! confused with "nothing". Converts to and from `Option`.

use crate::error::SeqError;

/// Outcome of a `try_*` operation.
///
/// # Examples
/// ```
/// use u_seqx::TryGet;
/// assert_eq!(TryGet::success(0).into_option(), Some(0));
/// assert_eq!(TryGet::<i32>::failure(), TryGet::Failure);
/// assert!(TryGet::success("").is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum TryGet<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation had nothing to produce.
    Failure,
}

impl<T> TryGet<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        TryGet::Success(value)
    }

    #[inline]
    pub fn failure() -> Self {
        TryGet::Failure
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, TryGet::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            TryGet::Success(value) => Some(value),
            TryGet::Failure => None,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            TryGet::Success(value) => Some(value),
            TryGet::Failure => None,
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> TryGet<U> {
        match self {
            TryGet::Success(value) => TryGet::Success(f(value)),
            TryGet::Failure => TryGet::Failure,
        }
    }

    /// Converts into a `Result`, using `err` for the failure case.
    #[inline]
    pub fn ok_or(self, err: SeqError) -> crate::Result<T> {
        self.into_option().ok_or(err)
    }
}

impl<T> Default for TryGet<T> {
    fn default() -> Self {
        TryGet::Failure
    }
}

impl<T> From<Option<T>> for TryGet<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => TryGet::Success(value),
            None => TryGet::Failure,
        }
    }
}

impl<T> From<TryGet<T>> for Option<T> {
    fn from(value: TryGet<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_equal() {
        assert_eq!(TryGet::<String>::failure(), TryGet::<String>::Failure);
        assert_eq!(TryGet::<i32>::default(), TryGet::failure());
    }

    #[test]
    fn test_successes_compare_values() {
        assert_eq!(TryGet::success(3), TryGet::success(3));
        assert_ne!(TryGet::success(3), TryGet::success(4));
        assert_ne!(TryGet::success(0), TryGet::failure());
    }

    #[test]
    fn test_default_value_is_still_success() {
        let t = TryGet::success(0_u8);
        assert!(t.is_success());
        assert_eq!(t.value(), Some(&0));
    }

    #[test]
    fn test_unwrap_helpers() {
        assert_eq!(TryGet::<i32>::failure().unwrap_or_default(), 0);
        assert_eq!(TryGet::<i32>::failure().unwrap_or(7), 7);
        assert_eq!(TryGet::success(2).map(|x| x * 10).unwrap_or(0), 20);
    }

    #[test]
    fn test_ok_or() {
        assert_eq!(TryGet::success(1).ok_or(SeqError::NoMatch), Ok(1));
        assert_eq!(
            TryGet::<i32>::failure().ok_or(SeqError::NoMatch),
            Err(SeqError::NoMatch)
        );
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(TryGet::from(Some(5)), TryGet::success(5));
        assert_eq!(TryGet::<i32>::from(None), TryGet::failure());
        let back: Option<i32> = TryGet::success(9).into();
        assert_eq!(back, Some(9));
    }
}
