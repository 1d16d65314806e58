//! # Prefixd Core
//!
//! Core types for the prefixd service.
//!
//! This crate provides the foundational abstractions shared across the prefixd
//! components:
//! - Common error types
//! - The address-family selector
//! - Prefix collections returned by the routing registry
//! - The numeric-aware prefix ordering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod family;
pub mod sort;
pub mod types;

pub use error::{Error, Result};
pub use family::AddressFamily;
pub use sort::{natural_cmp, sort_prefixes};
pub use types::{PrefixSet, Resource};
