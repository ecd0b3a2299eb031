//! Frame codec: a Snappy-framed byte stream with fixed-width big-endian
//! scalar encode/decode on top.
//!
//! Every column file is a single Snappy-framed stream (see the `snap` crate's
//! `write::FrameEncoder` / `read::FrameDecoder`, which implement the
//! standard Snappy framing format). On top of that stream, [`FrameWriter`]
//! and [`FrameReader`] provide the big-endian scalar primitives and the
//! length-prefixed modified-UTF-8 string encoding the column codecs need.
//!
//! Large writes flush the compressor periodically (`FLUSH_INTERVAL`
//! elements) so a single compressed chunk never grows unboundedly. The
//! cadence is not wire-visible: a reader just decompresses the frame stream
//! to a contiguous byte sequence and never sees chunk boundaries.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use snap::read::FrameDecoder;
use snap::write::FrameEncoder;

use crate::error::{Result, SawError};
use crate::modified_utf8;

/// Flush the underlying Snappy frame encoder after this many written
/// elements, so no single compressed block grows unboundedly.
pub const FLUSH_INTERVAL: usize = 20_000;

/// Wraps a byte sink with Snappy-framed compression and big-endian writes.
pub struct FrameWriter<W: Write> {
    inner: FrameEncoder<W>,
    path: PathBuf,
    flush_interval: usize,
    written_since_flush: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(sink: W, path: impl Into<PathBuf>) -> Self {
        Self::with_flush_interval(sink, path, FLUSH_INTERVAL)
    }

    /// Like [`FrameWriter::new`], but with an explicit flush cadence (see
    /// `WriterConfig::flush_interval`). The cadence is not wire-visible.
    pub fn with_flush_interval(sink: W, path: impl Into<PathBuf>, flush_interval: usize) -> Self {
        FrameWriter {
            inner: FrameEncoder::new(sink),
            path: path.into(),
            flush_interval: flush_interval.max(1),
            written_since_flush: 0,
        }
    }

    fn io(&self, source: io::Error) -> SawError {
        SawError::io(self.path.clone(), source)
    }

    /// Call after each logical element write; flushes the compressor every
    /// `flush_interval` elements.
    pub fn tick(&mut self) -> Result<()> {
        self.written_since_flush += 1;
        if self.written_since_flush >= self.flush_interval {
            self.written_since_flush = 0;
            self.inner.flush().map_err(|e| self.io(e))?;
        }
        Ok(())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.inner.write_u8(v).map_err(|e| self.io(e))
    }

    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.inner.write_i8(v).map_err(|e| self.io(e))
    }

    pub fn write_i16(&mut self, v: i16) -> Result<()> {
        self.inner.write_i16::<BigEndian>(v).map_err(|e| self.io(e))
    }

    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.inner.write_i32::<BigEndian>(v).map_err(|e| self.io(e))
    }

    pub fn write_i64(&mut self, v: i64) -> Result<()> {
        self.inner.write_i64::<BigEndian>(v).map_err(|e| self.io(e))
    }

    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        self.inner.write_f32::<BigEndian>(v).map_err(|e| self.io(e))
    }

    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        self.inner.write_f64::<BigEndian>(v).map_err(|e| self.io(e))
    }

    /// Writes a 2-byte unsigned big-endian length followed by the string's
    /// modified-UTF-8 bytes (Java `DataOutput.writeUTF` compatible).
    pub fn write_utf(&mut self, s: &str) -> Result<()> {
        let bytes = modified_utf8::encode(s)
            .map_err(|e| SawError::Corrupt(format!("cannot encode {s:?} as modified UTF-8: {e}")))?;
        if bytes.len() > u16::MAX as usize {
            return Err(SawError::InvalidArgument(format!(
                "string of {} encoded bytes exceeds the 65535-byte modified-UTF-8 length prefix",
                bytes.len()
            )));
        }
        self.inner
            .write_u16::<BigEndian>(bytes.len() as u16)
            .map_err(|e| self.io(e))?;
        self.inner.write_all(&bytes).map_err(|e| self.io(e))
    }

    /// Flushes and finalizes the Snappy frame stream, returning the sink.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(|e| self.io(e))?;
        self.inner
            .into_inner()
            .map_err(|e| self.io(e.into_error()))
    }
}

/// Wraps a byte source with Snappy-framed decompression and big-endian reads.
pub struct FrameReader<R: Read> {
    inner: FrameDecoder<R>,
    path: PathBuf,
}

impl<R: Read> FrameReader<R> {
    pub fn new(source: R, path: impl Into<PathBuf>) -> Self {
        FrameReader {
            inner: FrameDecoder::new(source),
            path: path.into(),
        }
    }

    fn io(&self, source: io::Error) -> SawError {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            SawError::Corrupt(format!("truncated stream in {}", self.path.display()))
        } else {
            SawError::io(self.path.clone(), source)
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.inner.read_u8().map_err(|e| self.io(e))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.inner.read_i8().map_err(|e| self.io(e))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.inner.read_i16::<BigEndian>().map_err(|e| self.io(e))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.inner.read_i32::<BigEndian>().map_err(|e| self.io(e))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.inner.read_i64::<BigEndian>().map_err(|e| self.io(e))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.inner.read_f32::<BigEndian>().map_err(|e| self.io(e))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.inner.read_f64::<BigEndian>().map_err(|e| self.io(e))
    }

    /// Reads a 2-byte unsigned big-endian length followed by that many
    /// modified-UTF-8 bytes, decoded to a `String`.
    pub fn read_utf(&mut self) -> Result<String> {
        let len = self.inner.read_u16::<BigEndian>().map_err(|e| self.io(e))? as usize;
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf).map_err(|e| self.io(e))?;
        modified_utf8::decode(&buf)
            .map_err(|e| SawError::Corrupt(format!("invalid modified UTF-8 in {}: {e}", self.path.display())))
    }
}

pub(crate) fn open_write(path: &Path) -> Result<std::fs::File> {
    std::fs::File::create(path).map_err(|e| SawError::io(path, e))
}

pub(crate) fn open_read(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| SawError::io(path, e))
}
