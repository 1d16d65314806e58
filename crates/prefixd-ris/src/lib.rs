//! # Prefixd RIS
//!
//! Client for the RIPE RIS `ris-prefixes` endpoint.
//!
//! The [`PrefixSource`] trait is the seam the server depends on; [`RisClient`]
//! is its production implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod response;
pub mod source;

pub use client::{RisClient, RisConfig, DEFAULT_ENDPOINT};
pub use source::PrefixSource;
