//! The `TEXT` codec: `row_count` consecutive length-prefixed UTF-8 strings,
//! one per row, no dictionary. Used for unbounded free text where
//! dictionary encoding wouldn't pay for itself.

use std::io::{Read, Write};

use crate::error::Result;
use crate::frame::{FrameReader, FrameWriter};

pub fn write<W: Write>(w: &mut FrameWriter<W>, values: &[String]) -> Result<()> {
    for v in values {
        w.write_utf(v)?;
        w.tick()?;
    }
    Ok(())
}

pub fn read<R: Read>(r: &mut FrameReader<R>, row_count: usize) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        out.push(r.read_utf()?);
    }
    Ok(out)
}
