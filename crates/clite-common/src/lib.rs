//! Common utilities and data structures for CLite.
//!
//! This crate provides the foundational types used across the CLite
//! front end:
//! - `Span`: Source code location tracking

mod span;

pub use span::{BytePos, Span};
