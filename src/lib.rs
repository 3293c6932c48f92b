//! # u-seqx
//!
//! Extension helpers for ordered in-memory collections.
//!
//! This crate layers small, predictable operations on top of `Vec`,
//! `VecDeque`, arrays and slices: random sampling, pop/remove variants,
//! stable splitting, swaps, uniform-value checks, optional-sequence
//! equality and index lookups.
//!
//! ## Modules
//!
//! - [`collections`] — Extension traits, split by capability
//! - [`random`] — Seeded RNG construction, shuffling, random index selection
//! - [`outcome`] — [`TryGet`], the result of non-failing `try_*` operations
//! - [`error`] — [`SeqError`], the single error type
//!
//! ## Design Philosophy
//!
//! - **Capabilities at compile time**: growing/shrinking is only offered on
//!   [`collections::Resizable`], so arrays cannot be popped from
//! - **No partial mutation**: every argument is validated before the first
//!   element moves
//! - **Injected randomness**: every random operation takes a `rand::Rng`,
//!   so tests run against [`random::create_rng`] with a fixed seed
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_seqx::prelude::*;
//! use u_seqx::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let mut queue = vec!["a", "b", "c", "d", "e"];
//!
//! let sampled = queue.pop_many_randoms(2, &mut rng).unwrap();
//! assert_eq!(sampled.len(), 2);
//! assert_eq!(queue.len(), 3);
//!
//! let parts = queue.split_where(|s| *s < "c");
//! assert_eq!(parts.len(), 3);
//! ```

pub mod collections;
pub mod error;
pub mod outcome;
pub mod random;

pub use error::{Result, SeqError};
pub use outcome::TryGet;

/// Glob-importable extension traits and the types they return.
pub mod prelude {
    pub use crate::collections::{
        Derive, IndexLookup, Pop, Query, Remove, Resizable, Sequence, Splitted, Uniform,
    };
    pub use crate::error::SeqError;
    pub use crate::outcome::TryGet;
}
