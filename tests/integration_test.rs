use sawtable::{
    read_table, save_table, ColumnData, ColumnSource, ColumnView, ColumnType, SawError,
    StringDictionary, Table, TableSource, WriterConfig,
};
use tempfile::tempdir;

/// S1: a five-column, five-row table round-trips every cell exactly.
#[test]
fn s1_mixed_columns_round_trip_every_cell() {
    let dir = tempdir().unwrap();

    let floats: Vec<f32> = (0..5).map(|i| i as f32 * 1.5).collect();
    let dates: Vec<i32> = (0..5).map(|i| 19_000 + i).collect();
    let categories: Vec<String> = (0..5).map(|i| format!("Category {i}")).collect();
    let longs: Vec<i64> = (0..5).map(|i| i as i64).collect();
    let bools: Vec<i8> = (0..5).map(|i| if i % 2 == 0 { 1 } else { 0 }).collect();

    let table = Table::new(
        "t",
        vec![
            ColumnData::float("f", floats.clone()),
            ColumnData::local_date("d", dates.clone()),
            ColumnData::string("category", StringDictionary::from_values(&categories)),
            ColumnData::long("l", longs.clone()),
            ColumnData::boolean("b", bools.clone()),
        ],
    )
    .unwrap();

    let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
    let loaded = read_table(&table_dir).unwrap();

    assert_eq!(loaded.row_count(), 5);
    match loaded.column(0).unwrap().view() {
        ColumnView::Float(v) => assert_eq!(v, floats.as_slice()),
        _ => panic!("expected float column"),
    }
    match loaded.column(1).unwrap().view() {
        ColumnView::LocalDate(v) => assert_eq!(v, dates.as_slice()),
        _ => panic!("expected local_date column"),
    }
    match loaded.column(2).unwrap().view() {
        ColumnView::String(dict) => assert_eq!(dict.to_values().unwrap(), categories),
        _ => panic!("expected string column"),
    }
    match loaded.column(3).unwrap().view() {
        ColumnView::Long(v) => assert_eq!(v, longs.as_slice()),
        _ => panic!("expected long column"),
    }
    match loaded.column(4).unwrap().view() {
        ColumnView::Boolean(v) => assert_eq!(v, bools.as_slice()),
        _ => panic!("expected boolean column"),
    }
}

/// S2: an INSTANT column preserves its type tag and an arbitrary element.
#[test]
fn s2_instant_column_preserves_type_and_values() {
    let dir = tempdir().unwrap();

    let index: Vec<i32> = (0..100).collect();
    let now_millis: i64 = 1_700_000_000_000;
    let instants: Vec<i64> = (0..100).map(|i| now_millis + i as i64 * 1000).collect();

    let table = Table::new(
        "Instants",
        vec![
            ColumnData::integer("index", index),
            ColumnData::instant("ts", instants.clone()),
        ],
    )
    .unwrap();

    let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
    let loaded = read_table(&table_dir).unwrap();

    let ts_column = loaded.column(1).unwrap();
    assert_eq!(ts_column.column_type(), ColumnType::Instant);
    match ts_column.view() {
        ColumnView::Instant(v) => assert_eq!(v[20], instants[20]),
        _ => panic!("expected instant column"),
    }
}

/// S3: dictionary entry/count key sets survive a double round-trip
/// (save -> read -> save -> read) for both a high- and low-cardinality
/// string column.
#[test]
fn s3_string_dictionaries_survive_double_round_trip() {
    let dir = tempdir().unwrap();
    let row_count = 20_000;

    let index2: Vec<String> = (0..row_count).map(|i| i.to_string()).collect();
    let index1: Vec<String> = (0..row_count).map(|i| format!("bucket-{}", i % 8)).collect();

    let table = Table::new(
        "million_ints",
        vec![
            ColumnData::integer("id", (0..row_count as i32).collect()),
            ColumnData::string("index1", StringDictionary::from_values(&index1)),
            ColumnData::string("index2", StringDictionary::from_values(&index2)),
        ],
    )
    .unwrap();

    let dir1 = dir.path().join("first");
    let table_dir = save_table(&dir1, &table, &WriterConfig::default()).unwrap();
    let loaded_once = read_table(&table_dir).unwrap();

    let dir2 = dir.path().join("second");
    let table_dir2 = save_table(&dir2, &loaded_once, &WriterConfig::default()).unwrap();
    let loaded_twice = read_table(&table_dir2).unwrap();

    let dict1_before = as_string_dict(loaded_once.column(1).unwrap());
    let dict1_after = as_string_dict(loaded_twice.column(1).unwrap());
    assert_eq!(entries_set(dict1_before), entries_set(dict1_after));
    assert_eq!(counts_set(dict1_before), counts_set(dict1_after));

    let dict2_before = as_string_dict(loaded_once.column(2).unwrap());
    let dict2_after = as_string_dict(loaded_twice.column(2).unwrap());
    assert_eq!(entries_set(dict2_before), entries_set(dict2_after));
    assert_eq!(counts_set(dict2_before), counts_set(dict2_after));
}

fn as_string_dict(column: &ColumnData) -> &StringDictionary {
    match column.view() {
        ColumnView::String(dict) => dict,
        _ => panic!("expected string column"),
    }
}

fn entries_set(dict: &StringDictionary) -> std::collections::HashSet<(i32, String)> {
    dict.entries.iter().cloned().collect()
}

fn counts_set(dict: &StringDictionary) -> std::collections::HashSet<(i32, i32)> {
    dict.counts.iter().cloned().collect()
}

/// S4: saving the same table name twice to the same parent overwrites the
/// first directory; the second read returns the second table's content.
#[test]
fn s4_overwrite_same_parent_directory() {
    let dir = tempdir().unwrap();

    let first = Table::new("t", vec![ColumnData::integer("a", vec![1, 2, 3])]).unwrap();
    let table_dir = save_table(dir.path(), &first, &WriterConfig::default()).unwrap();
    let loaded_first = read_table(&table_dir).unwrap();
    match loaded_first.column(0).unwrap().view() {
        ColumnView::Integer(v) => assert_eq!(v, &[1, 2, 3]),
        _ => panic!("expected integer column"),
    }

    let second = Table::new("t", vec![ColumnData::integer("a", vec![9, 9])]).unwrap();
    let table_dir2 = save_table(dir.path(), &second, &WriterConfig::default()).unwrap();
    assert_eq!(table_dir, table_dir2);

    let loaded_second = read_table(&table_dir2).unwrap();
    assert_eq!(loaded_second.row_count(), 2);
    match loaded_second.column(0).unwrap().view() {
        ColumnView::Integer(v) => assert_eq!(v, &[9, 9]),
        _ => panic!("expected integer column"),
    }
}

/// S5: an empty parent directory argument fails fast with InvalidArgument.
#[test]
fn s5_empty_parent_directory_is_invalid_argument() {
    let table = Table::new("t", vec![ColumnData::integer("a", vec![1])]).unwrap();
    let err = save_table(std::path::Path::new(""), &table, &WriterConfig::default()).unwrap_err();
    assert!(matches!(err, SawError::InvalidArgument(_)));
}

/// S6: a TEXT column keeps its own type tag, distinct from STRING, and its
/// contents survive the round-trip verbatim (no dictionary collapsing).
#[test]
fn s6_text_column_is_not_reinterpreted_as_string() {
    let dir = tempdir().unwrap();

    let notes = vec![
        "first free-form note".to_string(),
        "second, with punctuation!".to_string(),
        "第三行包含非 ASCII 字符".to_string(),
    ];

    let table = Table::new("t", vec![ColumnData::text("notes", notes.clone())]).unwrap();
    let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
    let loaded = read_table(&table_dir).unwrap();

    let notes_column = loaded.column(0).unwrap();
    assert_eq!(notes_column.column_type(), ColumnType::Text);
    match notes_column.view() {
        ColumnView::Text(v) => assert_eq!(v, notes.as_slice()),
        _ => panic!("expected text column"),
    }
}

/// A table with no columns at all still saves and reads back cleanly.
#[test]
fn empty_table_round_trips() {
    let dir = tempdir().unwrap();
    let table = Table::new("empty", vec![]).unwrap();
    let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
    let loaded = read_table(&table_dir).unwrap();
    assert_eq!(loaded.row_count(), 0);
    assert_eq!(loaded.column_count(), 0);
}

/// A table large enough to force several Snappy frame flushes still
/// round-trips correctly at sampled positions.
#[test]
fn large_table_round_trips_at_sampled_positions() {
    let dir = tempdir().unwrap();
    let row_count = sawtable::frame::FLUSH_INTERVAL * 2 + 137;

    let values: Vec<i64> = (0..row_count as i64).collect();
    let table = Table::new("big", vec![ColumnData::long("v", values.clone())]).unwrap();

    let table_dir = save_table(dir.path(), &table, &WriterConfig::default()).unwrap();
    let loaded = read_table(&table_dir).unwrap();

    match loaded.column(0).unwrap().view() {
        ColumnView::Long(v) => {
            assert_eq!(v.len(), row_count);
            for sample in [0, 1, row_count / 2, row_count - 1] {
                assert_eq!(v[sample], values[sample]);
            }
        }
        _ => panic!("expected long column"),
    }
}
