//! # Causelist Court
//!
//! Court data sources for the causelist service.
//!
//! The only shipping source is [`DelhiHighCourt`], a simulator that stands
//! in for a real scraper: lookups wait a realistic delay and then return a
//! case record synthesized from fixed pools, and order-document downloads
//! return a placeholder PDF. Party selection is deterministic in the case
//! number so repeated lookups of the same case stay coherent.
//!
//! ## Example
//!
//! ```ignore
//! use causelist_core::{CaseQuery, CaseType};
//! use causelist_court::{CourtSource, DelhiHighCourt};
//!
//! #[tokio::main]
//! async fn main() -> causelist_core::Result<()> {
//!     let court = DelhiHighCourt::new();
//!     let query = CaseQuery::new(CaseType::Writ, "12345", "2024")?;
//!     let record = court.fetch_case(&query).await?;
//!     println!("{}: {}", record.case_number, record.status);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod delhi;
pub mod document;
pub mod source;

pub use delhi::{DelhiHighCourt, COURT_BASE_URL, COURT_NAME};
pub use document::ORDER_PDF_FILENAME;
pub use source::CourtSource;
