//! # Scanning Primitives
//!
//! The low-level machinery every higher-level parser is built on.
//!
//! ## Modules
//!
//! - **`span`**: `Span`, a byte range into the scanned text
//! - **`markers`**: `MarkerSet`, earliest-occurrence search over literal markers
//! - **`balance`**: `Delimiters` and `match_balanced`, nested open/close matching
//!
//! ## Key Invariants
//!
//! - Markers are literals; nothing in a marker is interpreted as a pattern
//! - Unbalanced openers never fail: the span runs to the end of the text

pub mod balance;
pub mod markers;
pub mod span;

pub use balance::{Balanced, DelimitedSpan, Delimiters, LINK, TEMPLATE, find_spans, match_balanced};
pub use markers::{MarkerMatch, MarkerSet};
pub use span::Span;
