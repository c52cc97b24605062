//! Maximal exact match enumeration and cross-validation.
//!
//! - [`find_mems`]: brute-force enumeration of every maximal exact match
//! - [`Validator`]: re-derives matches per query and compares them with a result stream
//! - [`MatchSetDiff`]: which triples are missing or unexpected when a query is `WRONG`
//! - [`find_occurrences`]: exact occurrences of a whole query in the reference
//!
//! ## Enumeration Algorithm
//!
//! For every query offset `i` and reference offset `j`:
//!
//! 1. **Seed**: skip the pair unless `i == 0`, `j == 0`, or `Q[i-1] != S[j-1]`
//! 2. **Extend**: count matching symbols until a mismatch or either sequence ends
//! 3. **Filter**: keep the run if it is at least `L` symbols long
//!
//! The search is quadratic in the number of start pairs. It exists to check
//! indexed MEM finders, not to compete with them.
//!
//! ## Example
//!
//! ```rust
//! use mem_oracle::{find_mems, Match, MinLength, Sequence};
//!
//! let reference = Sequence::from("ACGTACGT");
//! let query = Sequence::from("ACGT");
//!
//! let mems = find_mems(&reference, &query, MinLength::new(4).unwrap()).into_canonical();
//! assert_eq!(mems.as_slice(), &[Match::new(4, 0, 0), Match::new(4, 0, 4)]);
//! ```

pub mod bruteforce;
pub mod diagnosis;
pub mod occurrences;
pub mod validator;

pub use bruteforce::find_mems;
pub use diagnosis::MatchSetDiff;
pub use occurrences::find_occurrences;
pub use validator::Validator;
