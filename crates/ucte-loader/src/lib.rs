//! # ucte-loader
//!
//! Parser for UCTE-DEF power grid exchange files.
//!
//! A UCTE file is a fixed-column text format: each record is one line and
//! each field sits at a fixed character range. Blocks of records are
//! delimited by marker lines (`##Z<cc>`, `##ZXX`, `##L`, `##T`, `##R`,
//! `##TT`, `##E`). This crate reads a file once, splits it into its record
//! blocks and decodes every line into the typed records of [`ucte_types`].
//!
//! Field decoding never fails: a blank, truncated or malformed field becomes
//! `None` on its record and the rest of the record is still decoded.
//!
//! ## Features
//!
//! - `parallel`: Decodes the lines of each block on the rayon thread pool.
//!
//! ## Usage
//!
//! ```no_run
//! use ucte_loader::{UcteConfig, UcteDocument};
//!
//! let doc = UcteDocument::from_path_with_config(
//!     "20200418_0930_FO6_HR1.uct",
//!     &UcteConfig::strict(),
//! )?;
//!
//! println!("{} ({})", doc.country_name().unwrap_or("?"), doc.date_iso());
//! for line in doc.lines() {
//!     println!("{:?} -> {:?}: X = {:?}", line.node1, line.node2, line.reactance);
//! }
//! # Ok::<(), ucte_loader::UcteError>(())
//! ```

#![warn(missing_docs)]

mod document;
mod line;
mod metadata;
mod node;
pub mod parser;
mod regulation;
pub mod section;
mod spec_param;
mod transformer;
mod types;

pub use document::UcteDocument;
pub use metadata::FileMetadata;
pub use parser::UcteRecord;
pub use types::{LoadStats, UcteConfig, UcteError, UcteResult};

// Re-export ucte-types for convenience
pub use ucte_types;
