//! # Shared Utilities
//!
//! Small, pure helpers used across downstream applications:
//!
//! - [`collections`] - Splitting sequences into fixed-size chunks
//! - [`text`] - String casing helpers
//! - [`dates`] - Fixed-format date rendering
//!
//! Nothing in this module holds state or performs I/O.

pub mod collections;
pub mod dates;
pub mod text;

// Re-export commonly used functions
pub use collections::{chunk, chunk_signed};
pub use dates::{format_date, parse_instant, DATE_FORMAT};
pub use text::capitalize;
