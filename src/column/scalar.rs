//! Fixed-width scalar codecs: `FLOAT, DOUBLE, INTEGER, SHORT, LONG,
//! BOOLEAN, LOCAL_DATE, LOCAL_TIME, LOCAL_DATE_TIME, INSTANT`.
//!
//! Every one of these writes exactly `row_count` elements of the tag's
//! natural big-endian width, in row order, with no length prefix or row
//! count in the stream — the reader already knows both from metadata.

use std::io::{Read, Write};

use crate::error::Result;
use crate::frame::{FrameReader, FrameWriter};

macro_rules! fixed_width_codec {
    ($write_fn:ident, $read_fn:ident, $elem:ty, $write_method:ident, $read_method:ident) => {
        pub fn $write_fn<W: Write>(w: &mut FrameWriter<W>, values: &[$elem]) -> Result<()> {
            for v in values {
                w.$write_method(*v)?;
                w.tick()?;
            }
            Ok(())
        }

        pub fn $read_fn<R: Read>(r: &mut FrameReader<R>, row_count: usize) -> Result<Vec<$elem>> {
            let mut out = Vec::with_capacity(row_count);
            for _ in 0..row_count {
                out.push(r.$read_method()?);
            }
            Ok(out)
        }
    };
}

fixed_width_codec!(write_float, read_float, f32, write_f32, read_f32);
fixed_width_codec!(write_double, read_double, f64, write_f64, read_f64);
fixed_width_codec!(write_integer, read_integer, i32, write_i32, read_i32);
fixed_width_codec!(write_short, read_short, i16, write_i16, read_i16);
fixed_width_codec!(write_long, read_long, i64, write_i64, read_i64);
fixed_width_codec!(write_boolean, read_boolean, i8, write_i8, read_i8);
fixed_width_codec!(write_local_date, read_local_date, i32, write_i32, read_i32);
fixed_width_codec!(write_local_time, read_local_time, i32, write_i32, read_i32);
fixed_width_codec!(write_local_date_time, read_local_date_time, i64, write_i64, read_i64);
fixed_width_codec!(write_instant, read_instant, i64, write_i64, read_i64);
