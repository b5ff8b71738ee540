//! Tier list ingestion.
//!
//! This crate turns the published spreadsheet's HTML export into
//! [`ProductRecord`]s.
//!
//! # Features
//!
//! - **Grid reconstruction**: expand `rowspan`/`colspan` merges into a dense grid
//! - **Record extraction**: read typed records from fixed column offsets
//! - **Record files**: read and write the intermediate JSON record list
//!
//! # Example
//!
//! ```ignore
//! use tier_ingest::{ParseOptions, parse_html, write_records};
//!
//! let html = std::fs::read_to_string("psu_tier.html")?;
//! let outcome = parse_html(&html, &ParseOptions::default())?;
//! write_records("psu_data.json".as_ref(), &outcome.records)?;
//! ```

mod error;
mod extract;
mod grid;
mod html;
mod options;
mod parser;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === Grid ===
pub use grid::{Cell, Grid, MAX_COL_SPAN, MAX_ROW_SPAN};

// === Parsing ===
pub use extract::{Extraction, clean_series, extract_records};
pub use html::{collect_cells, find_table};
pub use options::ParseOptions;
pub use parser::{ParseOutcome, parse_document, parse_html};

// === Record Files ===
pub use records::{read_records, write_records};

pub use tier_model::ProductRecord;
