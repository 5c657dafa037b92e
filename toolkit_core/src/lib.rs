//! # toolkit_core - Shared Utilities and Calculator
//!
//! `toolkit_core` is a small function library consumed by downstream
//! applications: sequence chunking, string capitalization, date formatting,
//! and a four-operation calculator.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, no shared state, no I/O
//! - **Explicit failures**: Invalid input surfaces as a [`ToolkitError`], never a sentinel value
//! - **Deterministic**: Date output does not depend on the host locale or time zone
//!
//! ## Quick Start
//!
//! ```rust
//! use toolkit_core::calculator::CALCULATOR;
//! use toolkit_core::utils::{capitalize, chunk};
//!
//! assert_eq!(capitalize("click me"), "Click me");
//!
//! let data: Vec<i32> = (1..=10).collect();
//! assert_eq!(chunk(&data, 3).unwrap().len(), 4);
//!
//! assert_eq!((CALCULATOR.divide)(7.0, 2.0).unwrap(), 3.5);
//! ```
//!
//! ## Modules
//!
//! - [`utils`] - Chunking, capitalization, date formatting
//! - [`calculator`] - Arithmetic functions and the calculator record
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root for convenience
pub use calculator::{add, divide, multiply, subtract, Calculator, Operation, CALCULATOR};
pub use errors::{ToolkitError, ToolkitResult};
pub use utils::{capitalize, chunk, format_date};
