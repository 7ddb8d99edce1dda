//! Raw output streams for offline statistical testing.

use std::io::{self, ErrorKind, Write};

use crate::Source64;

/// Bytes buffered between writes.
pub const BUFFER_SIZE: usize = 0x10000;

/// Writes successive `next_u64` outputs to `sink` as 8-byte Little-Endian blocks.
///
/// Writes `count` words, or runs until the sink goes away if `count` is `None`.
/// A closed pipe ends the stream normally, since test tools stop reading when
/// they are done. Returns the number of words the sink accepted.
pub fn write_stream<S, W>(source: &mut S, sink: &mut W, count: Option<u64>) -> io::Result<u64>
where
    S: Source64 + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer: Vec<u8> = Vec::with_capacity(BUFFER_SIZE);
    let mut written: u64 = 0;

    loop {
        let words = match count {
            Some(n) => (n - written).min((BUFFER_SIZE / 8) as u64),
            None => (BUFFER_SIZE / 8) as u64,
        };
        if words == 0 {
            break;
        }
        for _ in 0 .. words {
            buffer.extend_from_slice(&source.next_u64().to_le_bytes());
        }
        if !write_block(sink, &buffer)? {
            return Ok(written);
        }
        written += words;
        buffer.clear();
    }

    match sink.flush() {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e),
        _ => Ok(written),
    }
}

/// Writes one block. Returns false if the reader has gone away.
fn write_block<W: Write + ?Sized>(sink: &mut W, block: &[u8]) -> io::Result<bool> {
    match sink.write_all(block) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e),
    }
}
