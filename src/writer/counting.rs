//! Byte-counting output adapter.

use std::io::{self, Write};

/// Wraps a sink and tracks how many bytes have gone through it.
///
/// Offsets recorded in the cross-reference table are read from
/// [`CountingWriter::position`].
#[derive(Debug)]
pub struct CountingWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Bytes written so far, measured from the start of the file.
    pub fn position(&self) -> u64 {
        self.bytes_written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buffer)?;
        self.bytes_written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_bytes() {
        let mut w = CountingWriter::new(Vec::new());
        assert_eq!(w.position(), 0);
        w.write_all(b"%PDF-1.7\n").unwrap();
        writeln!(w, "{} 0 obj", 12).unwrap();
        assert_eq!(w.position(), 18);
        assert_eq!(w.into_inner().len(), 18);
    }

    #[test]
    fn test_partial_writes_counted_exactly() {
        // A sink that accepts at most 3 bytes per call.
        struct Trickle(Vec<u8>);
        impl Write for Trickle {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                let n = buf.len().min(3);
                self.0.extend_from_slice(&buf[..n]);
                Ok(n)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut w = CountingWriter::new(Trickle(Vec::new()));
        w.write_all(b"startxref\n").unwrap();
        assert_eq!(w.position(), 10);
        assert_eq!(w.into_inner().0, b"startxref\n");
    }
}
