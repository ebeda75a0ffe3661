//! Pure article decoding (no IO).
//!
//! Input: an article code and a reference table constructed elsewhere.
//! Output: a decoded record with per-field soft-fail semantics.

#![forbid(unsafe_code)]

pub mod model;
pub mod shape;

mod decode;

pub use decode::{article_info, decode, DecodeError};
pub use shape::validate_article_format;

#[cfg(test)]
mod proptest;
