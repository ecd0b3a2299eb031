//! # sawtable - a compact, compressed, column-oriented storage engine
//!
//! `sawtable` writes a named, ordered collection of typed columns to a
//! directory on disk, and reads it back. Each column is its own
//! Snappy-framed file; a `Metadata.json` document alongside them records the
//! table's name, row count, and the id/type/name (plus, for dictionary-encoded
//! `STRING` columns, the `keyWidth`/`uniqueCount`) of every column.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sawtable::{ColumnData, StringDictionary, Table, WriterConfig};
//! use std::path::Path;
//!
//! let table = Table::new(
//!     "events",
//!     vec![
//!         ColumnData::integer("id", vec![1, 2, 3]),
//!         ColumnData::string(
//!             "category",
//!             StringDictionary::from_values(&["a".to_string(), "b".to_string(), "a".to_string()]),
//!         ),
//!     ],
//! )?;
//!
//! let table_dir = sawtable::save_table(Path::new("/tmp/out"), &table, &WriterConfig::default())?;
//! let loaded = sawtable::read_table(&table_dir)?;
//! assert_eq!(loaded.row_count(), 3);
//! # Ok::<(), sawtable::SawError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types`]: the closed registry of column type tags and dictionary key widths
//! - [`frame`]: the Snappy-framed byte codec underlying every column file
//! - [`modified_utf8`]: Java `DataOutput.writeUTF`-compatible string encoding
//! - [`column`]: per-column codecs (fixed-width scalars, free text, dictionary strings)
//! - [`metadata`]: the `Metadata.json` document
//! - [`table`]: the external table/column capability traits and the owned [`Table`]
//! - [`writer`] / [`reader`]: table-level orchestration with a bounded worker pool
//!
//! On-disk column and table data structures beyond [`Table`]/[`ColumnData`] —
//! joins, filters, sorting, mutation — are out of scope for this crate.

pub mod column;
pub mod error;
pub mod frame;
pub mod metadata;
pub mod modified_utf8;
pub mod reader;
pub mod table;
pub mod temporal;
pub mod types;
pub mod writer;

pub use column::{ColumnData, ColumnSource, ColumnView, StringDictionary};
pub use error::{Result, SawError};
pub use reader::{read_table, read_table_with_config, ReaderConfig};
pub use table::{Table, TableSource};
pub use types::{ColumnType, KeyWidth};
pub use writer::{save_table, WriterConfig};
