//! Quantity detection and proportional rescaling for free-form text.
//!
//! The crate scans a fragment of text for quantities written in any of the
//! common ways people write them (vulgar fractions, slash fractions,
//! decimals with either separator convention, the word "half"), normalizes
//! each to a numeric value, and, when one occurrence is edited, rescales
//! every other occurrence by the same ratio.

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod regex;
pub mod scaling;
