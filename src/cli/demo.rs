use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use sawtable::{ColumnData, StringDictionary, Table, TableSource};

use super::config::Config;

/// Build a small in-memory table, save it, then read it back end to end.
pub fn run(output: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    info!("sawtable demo");
    info!("=============");

    let writer_config = match config_path {
        Some(path) => Config::from_file(&path)
            .context("failed to load config file")?
            .writer_config(),
        None => sawtable::WriterConfig::default(),
    };

    let table = build_demo_table();
    info!(
        "built demo table '{}' ({} rows, {} columns)",
        table.name(),
        table.row_count(),
        table.column_count()
    );

    info!("saving to {}", output.display());
    let table_dir = sawtable::save_table(&output, &table, &writer_config)
        .context("failed to save demo table")?;
    info!("saved to {}", table_dir.display());

    info!("reading back...");
    let loaded = sawtable::read_table(&table_dir).context("failed to read demo table back")?;
    info!(
        "read back '{}' ({} rows, {} columns)",
        loaded.name(),
        loaded.row_count(),
        loaded.column_count()
    );

    println!("wrote and read back table at {}", table_dir.display());
    Ok(())
}

fn build_demo_table() -> Table {
    let ids: Vec<i32> = (0..10_000).collect();
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.5).collect();
    let categories: Vec<String> = (0..10_000)
        .map(|i| format!("category-{}", i % 7))
        .collect();
    let notes: Vec<String> = (0..10_000)
        .map(|i| format!("free-form note for row {i}"))
        .collect();

    Table::new(
        "events",
        vec![
            ColumnData::integer("id", ids),
            ColumnData::double("value", values),
            ColumnData::string("category", StringDictionary::from_values(&categories)),
            ColumnData::text("note", notes),
        ],
    )
    .expect("demo table columns have matching lengths and unique names")
}
