//! Set operations over sequences of ranges.
//!
//! Every operator accepts any finite, unsorted sequence of ranges and first
//! brings it into canonical form with [`reduce`]: sorted, without empty ranges,
//! and with overlapping or touching ranges merged.

mod aggregate;
mod assertions;
mod complement;
mod difference;
mod intersection;
mod reduce;
mod union;

pub use aggregate::{highest, is_contiguous, is_single, lowest};
pub use assertions::is_canonical;
pub use complement::{inverse, inverse_bounded};
pub use difference::{difference, exclusive};
pub use intersection::{intersect, overlaps};
pub use reduce::reduce;
pub use union::union;
