//! # Prefixd Server
//!
//! HTTP front end for originated-prefix lookups against RIPE RIS.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod server;

pub use server::{Server, ServerConfig};
