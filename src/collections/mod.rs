//! Extension traits over ordered, indexable collections.
//!
//! - [`sequence`]: the [`Sequence`] / [`Resizable`] capability split.
//! - [`index`]: position lookups and random index selection.
//! - [`pop`]: remove-and-return, built on [`Pop::try_pop_at`].
//! - [`remove`]: in-place removal.
//! - [`derive`]: non-mutating copies (`with`, `without`, `split_where`, ...).
//! - [`uniform`]: "all elements agree" checks.
//! - [`query`]: first/last/single lookups with caller-supplied messages.
//! - [`equality`]: equality of optional sequences.

pub mod derive;
pub mod equality;
pub mod index;
pub mod pop;
pub mod query;
pub mod remove;
pub mod sequence;
pub mod uniform;

pub use derive::{Derive, Splitted};
pub use equality::{sequence_equal_or_none, unordered_equal_or_none};
pub use index::IndexLookup;
pub use pop::Pop;
pub use query::Query;
pub use remove::Remove;
pub use sequence::{Items, Resizable, Sequence};
pub use uniform::Uniform;
