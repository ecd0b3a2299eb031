//! Writes a table to a directory on disk (§4.4 / §6 of the design notes).
//!
//! `save_table` creates one subdirectory per table, writes `Metadata.json`
//! before any column file so a concurrent reader never observes a
//! column file without the metadata that describes it, then encodes each
//! column's file on a bounded worker pool. The first column failure wins:
//! remaining tasks still run to completion (they are already in flight) but
//! only the first error is returned, and the partial table directory is
//! removed before `save_table` returns it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{info, warn};

use crate::column::{ColumnSource, ColumnView};
use crate::column::{scalar, string, text};
use crate::error::{Result, SawError};
use crate::frame::FrameWriter;
use crate::metadata::{ColumnMetadata, TableMetadata};
use crate::table::TableSource;

/// Default number of columns encoded concurrently when a caller doesn't
/// override [`WriterConfig::worker_pool_size`].
pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;

/// Knobs that affect how a table is written, never what bytes a reader sees.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Upper bound on columns encoded concurrently.
    pub worker_pool_size: usize,
    /// How many elements a column codec writes before flushing the
    /// underlying Snappy frame (see `frame::FLUSH_INTERVAL`).
    pub flush_interval: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
            flush_interval: crate::frame::FLUSH_INTERVAL,
        }
    }
}

/// Writes `table` into a new subdirectory of `parent_dir`, returning the
/// table directory's path.
///
/// If a directory for this table's id already exists under `parent_dir`, its
/// contents are replaced. If any column fails to encode, the table directory
/// is removed and the first error encountered is returned.
pub fn save_table(parent_dir: &Path, table: &dyn TableSource, config: &WriterConfig) -> Result<PathBuf> {
    if parent_dir.as_os_str().is_empty() {
        return Err(SawError::InvalidArgument(
            "parent directory must not be empty".to_string(),
        ));
    }
    fs::create_dir_all(parent_dir).map_err(|e| SawError::io(parent_dir, e))?;

    let table_dir = parent_dir.join(crate::metadata::sanitize_id(table.name()));
    if table_dir.exists() {
        remove_dir_recursively(&table_dir)?;
    }
    fs::create_dir_all(&table_dir).map_err(|e| SawError::io(&table_dir, e))?;

    let metadata = TableMetadata::from_table(table);
    metadata.write(&table_dir)?;

    let columns = table.columns();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_pool_size.max(1))
        .build()
        .map_err(|e| SawError::Internal(e.to_string()))?;

    let first_error: Mutex<Option<SawError>> = Mutex::new(None);
    pool.scope(|scope| {
        for (column, column_meta) in columns.iter().copied().zip(&metadata.column_metadata) {
            let first_error = &first_error;
            let table_dir = &table_dir;
            let flush_interval = config.flush_interval;
            scope.spawn(move |_| {
                if let Err(err) = write_column(table_dir, column_meta, column, flush_interval) {
                    let mut guard = first_error.lock().unwrap();
                    if guard.is_none() {
                        *guard = Some(err);
                    }
                }
            });
        }
    });

    if let Some(err) = first_error.into_inner().unwrap() {
        warn!(
            "save_table: column encode failed, removing partial directory {}",
            table_dir.display()
        );
        let _ = remove_dir_recursively(&table_dir);
        return Err(err);
    }

    info!(
        "saved table '{}' ({} rows, {} columns) to {}",
        table.name(),
        table.row_count(),
        columns.len(),
        table_dir.display()
    );
    Ok(table_dir)
}

fn write_column(
    table_dir: &Path,
    column_meta: &ColumnMetadata,
    column: &dyn ColumnSource,
    flush_interval: usize,
) -> Result<()> {
    let path = table_dir.join(&column_meta.id);
    let file = crate::frame::open_write(&path)?;
    let mut w = FrameWriter::with_flush_interval(file, &path, flush_interval);

    match column.view() {
        ColumnView::Float(v) => scalar::write_float(&mut w, v)?,
        ColumnView::Double(v) => scalar::write_double(&mut w, v)?,
        ColumnView::Integer(v) => scalar::write_integer(&mut w, v)?,
        ColumnView::Short(v) => scalar::write_short(&mut w, v)?,
        ColumnView::Long(v) => scalar::write_long(&mut w, v)?,
        ColumnView::Boolean(v) => scalar::write_boolean(&mut w, v)?,
        ColumnView::LocalDate(v) => scalar::write_local_date(&mut w, v)?,
        ColumnView::LocalTime(v) => scalar::write_local_time(&mut w, v)?,
        ColumnView::LocalDateTime(v) => scalar::write_local_date_time(&mut w, v)?,
        ColumnView::Instant(v) => scalar::write_instant(&mut w, v)?,
        ColumnView::Text(v) => text::write(&mut w, v)?,
        ColumnView::String(dict) => string::write(&mut w, dict)?,
    }

    w.finish()?;
    Ok(())
}

/// Removes a directory and everything under it. Missing-file races with a
/// concurrent cleanup are tolerated; anything else is surfaced.
fn remove_dir_recursively(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SawError::io(dir, e)),
    }
}
