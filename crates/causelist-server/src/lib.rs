//! # Causelist Server
//!
//! HTTP server for the case-status demo: the embedded search form, the
//! case-lookup API, and the placeholder order-document download.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod server;
pub mod ui;

pub use server::{Server, ServerConfig};
