//! The table metadata document: name, row count, and per-column id/type/name
//! (plus, for `STRING` columns, the explicit `keyWidth`/`uniqueCount` this
//! implementation adds — see the design notes' resolved open question).
//!
//! Written uncompressed as UTF-8 JSON to a fixed `Metadata.json` filename.
//! The `columnMetadata` array order is the canonical column order and must
//! be preserved on read.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::ColumnSource;
use crate::error::{Result, SawError};
use crate::table::TableSource;
use crate::types::{ColumnType, KeyWidth};

pub const METADATA_FILE_NAME: &str = "Metadata.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub name: String,
    #[serde(rename = "keyWidth", skip_serializing_if = "Option::is_none", default)]
    pub key_width: Option<String>,
    #[serde(rename = "uniqueCount", skip_serializing_if = "Option::is_none", default)]
    pub unique_count: Option<usize>,
}

impl ColumnMetadata {
    pub fn column_type(&self) -> Result<ColumnType> {
        self.type_tag.parse()
    }

    pub fn parsed_key_width(&self) -> Result<Option<KeyWidth>> {
        self.key_width.as_deref().map(str::parse).transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    pub name: String,
    #[serde(rename = "rowCount")]
    pub row_count: usize,
    #[serde(rename = "columnMetadata")]
    pub column_metadata: Vec<ColumnMetadata>,
}

impl TableMetadata {
    /// Builds the metadata document for a table, assigning each column a
    /// stable id: a monotonic index concatenated with a sanitized form of
    /// the column's display name.
    pub fn from_table(table: &dyn TableSource) -> Self {
        let columns = table.columns();
        let row_count = table.row_count();
        let column_metadata = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let type_tag = column.column_type().name().to_string();
                let id = format!("{index}_{}", sanitize_id(column.name()));
                let (key_width, unique_count) = match column.view() {
                    crate::column::ColumnView::String(dict) => (
                        Some(dict.key_width.name().to_string()),
                        Some(dict.unique_count()),
                    ),
                    _ => (None, None),
                };
                ColumnMetadata {
                    id,
                    type_tag,
                    name: column.name().to_string(),
                    key_width,
                    unique_count,
                }
            })
            .collect();

        TableMetadata {
            name: table.name().to_string(),
            row_count,
            column_metadata,
        }
    }

    pub fn write(&self, dir: &Path) -> Result<()> {
        let path = dir.join(METADATA_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| SawError::io(path, e))
    }

    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(METADATA_FILE_NAME);
        let json = std::fs::read_to_string(&path).map_err(|e| SawError::io(path, e))?;
        let metadata: TableMetadata = serde_json::from_str(&json)?;
        Ok(metadata)
    }
}

/// Sanitizes a display name into a string that is a legal filename on both
/// POSIX and Windows: only ASCII alphanumerics and `_`/`-` survive, every
/// other character is replaced with `_`.
pub fn sanitize_id(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "_".to_string()
    } else {
        sanitized
    }
}
