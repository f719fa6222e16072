//! Basics: a guided tour of everyday Rust.
//!
//! Each section is a small, self-contained set of functions:
//! - Guarded arithmetic returning `Result` (factorial, primality, power)
//! - Closures carrying private state (counter, multiplier, accumulator, memo)
//! - Higher-order functions (map, filter, fold, compose)
//! - Process identity
//! - Values, references and boxes

// Modules
pub mod section_1; // Math Operations
pub mod section_2; // Closures
pub mod section_3; // Higher-Order Functions
pub mod section_4; // Process Explorer
pub mod section_5; // Pointers and Storage

pub use basics_common::{DomainError, Result};
