//! Core data types for MEM enumeration and validation.
//!
//! - [`Sequence`]: an immutable in-memory symbol sequence (reference or query)
//! - [`Match`]: a maximal exact match `(length, query offset, reference offset)`
//! - [`MatchSet`]: the matches for one query, compared as a multiset
//! - [`Verdict`]: per-query outcome of cross-validation
//! - [`MinLength`]: validated minimum match length
//!
//! ## Canonical Order
//!
//! Matches sort by length, then query offset, then reference offset. Both sides
//! of a comparison are put in this order before being compared element by element,
//! so a triple reported twice must be reported twice on the other side as well.

pub mod sequence;
pub mod types;

pub use sequence::Sequence;
pub use types::{Match, MatchSet, MinLength, ThresholdError, Verdict};
