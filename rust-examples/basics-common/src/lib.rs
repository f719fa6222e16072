//! # Basics Common
//!
//! Shared pieces for the basics tour crates.
//!
//! ## Modules
//!
//! - [`error`]: The domain error raised by guarded arithmetic
//! - [`list`]: Sequence transforms (`apply`, `filter_seq`, `reduce_seq`) and `compose`
//! - [`telemetry`]: Tracing subscriber installation for binaries
//!
//! ## Design Principles
//!
//! 1. **Recoverable failures**: Out-of-domain input is a typed `Err`, never a sentinel value
//! 2. **No mutation of inputs**: Sequence transforms borrow and return new `Vec`s
//! 3. **Iterator-centric**: Transforms are thin wrappers over iterator combinators

pub mod error;
pub mod list;
pub mod telemetry;

// Re-export main types for convenience
pub use error::{DomainError, Result};
pub use list::{apply, compose, filter_seq, reduce_seq};
