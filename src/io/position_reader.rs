use std::io::{self, Read};

/// A byte stream that tracks its absolute position.
///
/// The JPEG scanner reports segment payloads by their absolute file offset,
/// which it cannot learn from a plain `Read`. Every byte read or skipped
/// through this wrapper advances the position.
pub struct PositionReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> PositionReader<R> {
    /// Wrap a reader whose current position is the start of the stream.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read a single byte, returning `None` at end of stream.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Skip up to `count` bytes, returning how many were actually skipped.
    ///
    /// A result smaller than `count` means the stream ended.
    pub fn skip(&mut self, count: u64) -> io::Result<u64> {
        io::copy(&mut self.by_ref().take(count), &mut io::sink())
    }
}

impl<R: Read> Read for PositionReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}
