//! Reads a table back from a directory written by [`crate::writer::save_table`]
//! (§4.5 of the design notes).
//!
//! `read_table` parses `Metadata.json`, then decodes each column file on a
//! bounded worker pool, dispatching on the column's recorded type tag.
//! Columns are reassembled in `columnMetadata` order regardless of which
//! worker finished first.

use std::path::Path;
use std::sync::Mutex;

use log::info;

use crate::column::{scalar, string, text, ColumnData};
use crate::error::{Result, SawError};
use crate::frame::FrameReader;
use crate::metadata::{ColumnMetadata, TableMetadata};
use crate::table::Table;
use crate::types::ColumnType;

/// Default number of columns decoded concurrently when a caller doesn't
/// override [`ReaderConfig::worker_pool_size`].
pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;

/// Knobs that affect how a table is read back, never what it decodes to.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Upper bound on columns decoded concurrently.
    pub worker_pool_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
        }
    }
}

/// Reads the table stored at `table_dir` back into memory.
pub fn read_table(table_dir: &Path) -> Result<Table> {
    read_table_with_config(table_dir, &ReaderConfig::default())
}

pub fn read_table_with_config(table_dir: &Path, config: &ReaderConfig) -> Result<Table> {
    let metadata = TableMetadata::read(table_dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_pool_size.max(1))
        .build()
        .map_err(|e| SawError::Internal(e.to_string()))?;

    let slots: Vec<Mutex<Option<Result<ColumnData>>>> =
        metadata.column_metadata.iter().map(|_| Mutex::new(None)).collect();

    pool.scope(|scope| {
        for (index, column_meta) in metadata.column_metadata.iter().enumerate() {
            let slot = &slots[index];
            let table_dir = table_dir;
            let row_count = metadata.row_count;
            scope.spawn(move |_| {
                let result = read_column(table_dir, column_meta, row_count);
                *slot.lock().unwrap() = Some(result);
            });
        }
    });

    let mut columns = Vec::with_capacity(slots.len());
    for slot in slots {
        columns.push(slot.into_inner().unwrap().expect("every slot is filled")?);
    }

    info!(
        "read table '{}' ({} rows, {} columns) from {}",
        metadata.name,
        metadata.row_count,
        columns.len(),
        table_dir.display()
    );
    Table::new(metadata.name, columns)
}

fn read_column(table_dir: &Path, column_meta: &ColumnMetadata, row_count: usize) -> Result<ColumnData> {
    let path = table_dir.join(&column_meta.id);
    let file = crate::frame::open_read(&path)?;
    let mut r = FrameReader::new(file, &path);
    let name = column_meta.name.clone();
    let column_type = column_meta.column_type()?;

    let data = match column_type {
        ColumnType::Float => ColumnData::float(name, scalar::read_float(&mut r, row_count)?),
        ColumnType::Double => ColumnData::double(name, scalar::read_double(&mut r, row_count)?),
        ColumnType::Integer => ColumnData::integer(name, scalar::read_integer(&mut r, row_count)?),
        ColumnType::Short => ColumnData::short(name, scalar::read_short(&mut r, row_count)?),
        ColumnType::Long => ColumnData::long(name, scalar::read_long(&mut r, row_count)?),
        ColumnType::Boolean => ColumnData::boolean(name, scalar::read_boolean(&mut r, row_count)?),
        ColumnType::LocalDate => ColumnData::local_date(name, scalar::read_local_date(&mut r, row_count)?),
        ColumnType::LocalTime => ColumnData::local_time(name, scalar::read_local_time(&mut r, row_count)?),
        ColumnType::LocalDateTime => {
            ColumnData::local_date_time(name, scalar::read_local_date_time(&mut r, row_count)?)
        }
        ColumnType::Instant => ColumnData::instant(name, scalar::read_instant(&mut r, row_count)?),
        ColumnType::Text => ColumnData::text(name, text::read(&mut r, row_count)?),
        ColumnType::String => {
            let key_width = column_meta.parsed_key_width()?.ok_or_else(|| {
                SawError::Corrupt(format!("STRING column '{}' is missing keyWidth", column_meta.name))
            })?;
            let unique_count = column_meta.unique_count.ok_or_else(|| {
                SawError::Corrupt(format!("STRING column '{}' is missing uniqueCount", column_meta.name))
            })?;
            let dict = string::read(&mut r, key_width, unique_count, row_count)?;
            ColumnData::string(name, dict)
        }
    };
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnSource, ColumnView, StringDictionary};
    use crate::table::TableSource;
    use crate::writer::{save_table, WriterConfig};
    use tempfile::tempdir;

    #[test]
    fn round_trips_a_table_through_disk() {
        let dir = tempdir().unwrap();
        let table = Table::new(
            "events",
            vec![
                ColumnData::integer("id", vec![10, 20, 30]),
                ColumnData::double("value", vec![1.5, -2.25, 0.0]),
                ColumnData::text("note", vec!["a".into(), "b".into(), "c".into()]),
                ColumnData::string(
                    "category",
                    StringDictionary::from_values(&["x".into(), "y".into(), "x".into()]),
                ),
            ],
        )
        .unwrap();

        let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
        let loaded = read_table(&table_dir).unwrap();

        assert_eq!(loaded.row_count(), 3);
        assert_eq!(loaded.column_count(), 4);

        let id = loaded.column(0).unwrap();
        match id.view() {
            ColumnView::Integer(v) => assert_eq!(v, &[10, 20, 30]),
            _ => panic!("expected integer column"),
        }

        let category = loaded.column(3).unwrap();
        match category.view() {
            ColumnView::String(dict) => assert_eq!(dict.to_values().unwrap(), vec!["x", "y", "x"]),
            _ => panic!("expected string column"),
        }
    }

    #[test]
    fn round_trips_an_empty_table() {
        let dir = tempdir().unwrap();
        let table = Table::new("empty", vec![]).unwrap();
        let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
        let loaded = read_table(&table_dir).unwrap();
        assert_eq!(loaded.row_count(), 0);
        assert_eq!(loaded.column_count(), 0);
    }
}
