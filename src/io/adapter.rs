use std::io::{self, BufRead, Read, Seek, SeekFrom};

use crate::reader::BinaryReader;

/// Lets a `BinaryReader` stand in wherever a `Read + Seek` stream is
/// expected. Reads are clamped to the buffer; the cursor is shared with the
/// typed read methods.
impl Read for BinaryReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // Clamp read to buffer bounds
        let n = self.remaining().min(buf.len());
        let data = self.read_bytes(n)?;
        buf[..n].copy_from_slice(data);
        Ok(n)
    }
}

impl BufRead for BinaryReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining_slice())
    }

    fn consume(&mut self, amt: usize) {
        let amt = amt.min(self.remaining());
        // Cannot fail: amt is clamped to what remains
        let _ = self.skip(amt);
    }
}

impl Seek for BinaryReader<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let total_len = self.len() as i128;
        let current_pos = self.position() as i128;

        let new_pos = match pos {
            SeekFrom::Start(p) => p as i128,
            SeekFrom::End(p) => total_len + p as i128,
            SeekFrom::Current(p) => current_pos + p as i128,
        };

        self.seek_to(new_pos)?;
        Ok(self.position() as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position() as u64)
    }
}
