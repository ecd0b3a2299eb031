use anyhow::{Context, Result};
use std::path::PathBuf;

use sawtable::metadata::TableMetadata;

/// Print a saved table's `Metadata.json` in human-readable form.
pub fn run(table_dir: PathBuf) -> Result<()> {
    if !table_dir.exists() {
        anyhow::bail!("table directory does not exist: {}", table_dir.display());
    }

    let metadata = TableMetadata::read(&table_dir)
        .with_context(|| format!("failed to read metadata from {}", table_dir.display()))?;

    println!("sawtable directory: {}", table_dir.display());
    println!("===================");
    println!("Name: {}", metadata.name);
    println!("Rows: {}", metadata.row_count);
    println!("Columns: {}", metadata.column_metadata.len());
    println!();

    for column in &metadata.column_metadata {
        print!("  {:3}. {} ({})", column.id, column.name, column.type_tag);
        if let Some(key_width) = &column.key_width {
            print!(" keyWidth={key_width}");
        }
        if let Some(unique_count) = column.unique_count {
            print!(" uniqueCount={unique_count}");
        }
        println!();
    }

    Ok(())
}
