//! # Causelist Core
//!
//! Core types for the causelist case-status service.
//!
//! This crate provides the shapes shared by every other component:
//! - Common error types
//! - Case and query identifiers
//! - The synthetic case record model
//! - Validated lookup queries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod query;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use query::{CaseQuery, MIN_FILING_YEAR};
pub use record::{CaseRecord, OrderEntry, COURT_DATE_FORMAT};
pub use types::{CaseId, CaseStatus, CaseType, Parties, QueryId};
