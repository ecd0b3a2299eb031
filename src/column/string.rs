//! The dictionary-encoded `STRING` column codec.
//!
//! On disk, the payload has five sections with no separators: the unique
//! keys, the unique string values (in the same order as the keys), the keys
//! again in (possibly) a different order, their occurrence counts, and
//! finally the per-row key sequence. `uniqueCount` and `keyWidth` — carried
//! explicitly on the column-metadata record, per the resolved open question
//! in the design notes — are what let the reader size sections 1 through 4
//! without a length prefix in the stream itself.

use std::collections::HashMap;

use crate::error::{Result, SawError};
use crate::frame::{FrameReader, FrameWriter};
use crate::types::KeyWidth;
use std::io::{Read, Write};

/// A string column's dictionary: the three co-indexed projections described
/// in the data model (`entries`, `counts`, `values`), plus the key width
/// chosen for this column.
#[derive(Debug, Clone)]
pub struct StringDictionary {
    pub key_width: KeyWidth,
    /// (key, string value), one per unique value.
    pub entries: Vec<(i32, String)>,
    /// (key, occurrence count), same key set as `entries`.
    pub counts: Vec<(i32, i32)>,
    /// The per-row key sequence, length = column length.
    pub values: Vec<i32>,
}

impl StringDictionary {
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Builds a dictionary from a plain per-row sequence of strings,
    /// choosing the smallest key width that fits the resulting cardinality.
    pub fn from_values(rows: &[String]) -> Self {
        let mut key_of: HashMap<&str, i32> = HashMap::new();
        let mut entries = Vec::new();
        let mut counts: HashMap<i32, i32> = HashMap::new();
        let mut values = Vec::with_capacity(rows.len());

        for row in rows {
            let key = *key_of.entry(row.as_str()).or_insert_with(|| {
                let key = entries.len() as i32;
                entries.push((key, row.clone()));
                key
            });
            *counts.entry(key).or_insert(0) += 1;
            values.push(key);
        }

        let counts: Vec<(i32, i32)> = entries.iter().map(|(k, _)| (*k, counts[k])).collect();
        let key_width = KeyWidth::smallest_for(entries.len());
        StringDictionary {
            key_width,
            entries,
            counts,
            values,
        }
    }

    /// Materializes the per-row strings this dictionary represents.
    pub fn to_values(&self) -> Result<Vec<String>> {
        let lookup: HashMap<i32, &str> = self.entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.values
            .iter()
            .map(|k| {
                lookup
                    .get(k)
                    .map(|s| s.to_string())
                    .ok_or_else(|| SawError::Corrupt(format!("row key {k} has no dictionary entry")))
            })
            .collect()
    }
}

fn write_key<W: Write>(w: &mut FrameWriter<W>, width: KeyWidth, key: i32) -> Result<()> {
    match width {
        KeyWidth::Byte => w.write_i8(key as i8),
        KeyWidth::Short => w.write_i16(key as i16),
        KeyWidth::Int => w.write_i32(key),
    }
}

fn read_key<R: Read>(r: &mut FrameReader<R>, width: KeyWidth) -> Result<i32> {
    match width {
        KeyWidth::Byte => r.read_i8().map(|v| v as i32),
        KeyWidth::Short => r.read_i16().map(|v| v as i32),
        KeyWidth::Int => r.read_i32(),
    }
}

pub fn write<W: Write>(w: &mut FrameWriter<W>, dict: &StringDictionary) -> Result<()> {
    for (key, _) in &dict.entries {
        write_key(w, dict.key_width, *key)?;
        w.tick()?;
    }
    for (_, value) in &dict.entries {
        w.write_utf(value)?;
        w.tick()?;
    }
    for (key, _) in &dict.counts {
        write_key(w, dict.key_width, *key)?;
        w.tick()?;
    }
    for (_, count) in &dict.counts {
        w.write_i32(*count)?;
        w.tick()?;
    }
    for key in &dict.values {
        write_key(w, dict.key_width, *key)?;
        w.tick()?;
    }
    Ok(())
}

pub fn read<R: Read>(
    r: &mut FrameReader<R>,
    key_width: KeyWidth,
    unique_count: usize,
    row_count: usize,
) -> Result<StringDictionary> {
    let mut entry_keys = Vec::with_capacity(unique_count);
    for _ in 0..unique_count {
        entry_keys.push(read_key(r, key_width)?);
    }
    let mut entries = Vec::with_capacity(unique_count);
    for key in entry_keys {
        entries.push((key, r.read_utf()?));
    }

    let mut count_keys = Vec::with_capacity(unique_count);
    for _ in 0..unique_count {
        count_keys.push(read_key(r, key_width)?);
    }
    let mut counts = Vec::with_capacity(unique_count);
    for key in count_keys {
        counts.push((key, r.read_i32()?));
    }

    let mut values = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        values.push(read_key(r, key_width)?);
    }

    let dict = StringDictionary {
        key_width,
        entries,
        counts,
        values,
    };

    let entry_keys: std::collections::HashSet<i32> = dict.entries.iter().map(|(k, _)| *k).collect();
    let count_keys: std::collections::HashSet<i32> = dict.counts.iter().map(|(k, _)| *k).collect();
    if entry_keys != count_keys {
        return Err(SawError::Corrupt(
            "string dictionary entries and counts key sets disagree".to_string(),
        ));
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameWriter;
    use std::io::Cursor;

    fn encode_decode(dict: &StringDictionary, row_count: usize) -> StringDictionary {
        let mut buf = Vec::new();
        {
            let mut w = FrameWriter::new(Cursor::new(&mut buf), "col");
            write(&mut w, dict).unwrap();
            buf = w.finish().unwrap().into_inner();
        }
        let mut r = FrameReader::new(Cursor::new(&buf), "col");
        read(&mut r, dict.key_width, dict.unique_count(), row_count).unwrap()
    }

    #[test]
    fn round_trips_entries_counts_and_values() {
        let rows = vec!["a", "b", "a", "c", "a", "b"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let dict = StringDictionary::from_values(&rows);
        let decoded = encode_decode(&dict, rows.len());

        let entries_before: std::collections::HashSet<_> = dict.entries.iter().cloned().collect();
        let entries_after: std::collections::HashSet<_> = decoded.entries.iter().cloned().collect();
        assert_eq!(entries_before, entries_after);

        let counts_before: std::collections::HashSet<_> = dict.counts.iter().cloned().collect();
        let counts_after: std::collections::HashSet<_> = decoded.counts.iter().cloned().collect();
        assert_eq!(counts_before, counts_after);

        assert_eq!(dict.values, decoded.values);
        assert_eq!(decoded.to_values().unwrap(), rows);
    }

    #[test]
    fn preserves_key_width() {
        let rows: Vec<String> = (0..5000).map(|i| format!("v{i}")).collect();
        let dict = StringDictionary::from_values(&rows);
        assert_eq!(dict.key_width, KeyWidth::Short);
        let decoded = encode_decode(&dict, rows.len());
        assert_eq!(decoded.key_width, dict.key_width);
    }

    #[test]
    fn rejects_mismatched_entries_and_counts_key_sets() {
        let mut buf = Vec::new();
        let broken = StringDictionary {
            key_width: KeyWidth::Byte,
            entries: vec![(0, "a".to_string())],
            counts: vec![(1, 1)],
            values: vec![0],
        };
        {
            let mut w = FrameWriter::new(Cursor::new(&mut buf), "col");
            write(&mut w, &broken).unwrap();
            buf = w.finish().unwrap().into_inner();
        }
        let mut r = FrameReader::new(Cursor::new(&buf), "col");
        let result = read(&mut r, KeyWidth::Byte, 1, 1);
        assert!(matches!(result, Err(SawError::Corrupt(_))));
    }
}
