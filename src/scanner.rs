use std::io::{ErrorKind, Read};

use crate::alphabet::{classify, NUL};
use crate::error::{Error, Result};
use crate::table::FrequencyTable;

const READ_CHUNK: usize = 64 * 1024;

/// Single forward pass over a byte stream.
///
/// The window keeps the two previous *raw* bytes, whatever they are. An
/// invalid byte still takes a slot, so any pair or triplet that spans it is
/// dropped instead of being stitched across the gap.
#[derive(Debug, Default)]
pub struct StreamScanner {
    table: FrequencyTable,
    prev1: u8,
    prev2: u8,
    bytes_read: u64,
}

/// A finished scan: where the bytes came from, how many, and the counts.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub source: String,
    pub bytes_read: u64,
    pub table: FrequencyTable,
}

impl StreamScanner {
    pub fn new() -> Self {
        StreamScanner { table: FrequencyTable::new(), prev1: NUL, prev2: NUL, bytes_read: 0 }
    }

    pub fn feed(&mut self, c: u8) {
        self.bytes_read += 1;
        let cur = classify(c);
        if let Some(k) = cur {
            self.table.add_letter(k);
        }
        let p1 = classify(self.prev1);
        if let (Some(j), Some(k)) = (p1, cur) {
            self.table.add_pair(j, k);
            if let Some(i) = classify(self.prev2) {
                self.table.add_triplet(i, j, k);
            }
        }
        self.prev2 = self.prev1;
        self.prev1 = c;
    }

    pub fn feed_all(&mut self, bytes: &[u8]) {
        for &b in bytes { self.feed(b) }
    }

    /// Reads `reader` to the end. No partial window is scored at EOF.
    pub fn scan<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = vec![0u8; READ_CHUNK];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Read(e)),
            };
            self.feed_all(&buf[..n]);
        }
        log::debug!(
            "scan done: {} bytes, {} letters, {} pairs, {} triplets",
            self.bytes_read,
            self.table.total_letters(),
            self.table.total_pairs(),
            self.table.total_triplets()
        );
        Ok(())
    }

    pub fn bytes_read(&self) -> u64 { self.bytes_read }

    pub fn table(&self) -> &FrequencyTable { &self.table }

    pub fn finish(self, source: impl Into<String>) -> ScanSummary {
        ScanSummary { source: source.into(), bytes_read: self.bytes_read, table: self.table }
    }
}

/// Scans a whole reader into a summary labelled with `source`.
pub fn scan_reader<R: Read>(reader: R, source: &str) -> Result<ScanSummary> {
    let mut scanner = StreamScanner::new();
    scanner.scan(reader)?;
    Ok(scanner.finish(source))
}
