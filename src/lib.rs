//! halfopen - set algebra over half-open ranges
//!
//! [`Range<T>`] is an immutable half-open interval `[start, end)` over any
//! ordered value type, with pairwise predicates (`overlaps`, `touches`,
//! `includes`) and operations (`gap`, `merge`, `split`, `intersection`,
//! `exclusive`). The [`operations`] module lifts these to whole sequences of
//! ranges: reduction to canonical form, union, intersection, symmetric
//! difference and complement. [`RangeCollection`] is a mutable list of ranges
//! exposing the same operators as methods.
//!
//! ```
//! use halfopen::{operations, Range};
//!
//! let r = |start, end| Range::new(start, end).unwrap();
//!
//! let busy = vec![r(9, 12), r(11, 13), r(14, 17)];
//! assert_eq!(operations::reduce(busy.clone()), vec![r(9, 13), r(14, 17)]);
//! assert_eq!(operations::inverse(busy, 8, 18).unwrap(), vec![r(8, 9), r(13, 14), r(17, 18)]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Range`] and [`RangeCollection`].

pub mod bounds;
pub mod collection;
pub mod error;
pub mod interop;
pub mod operations;
mod range;

pub use bounds::{bounds_of, BoundsProvider};
pub use collection::RangeCollection;
pub use error::{ErrorKind, RangeError};
pub use interop::{Index, IndexRange};
pub use range::{Range, Steps};
