//! Vault sink
//!
//! Append-only destination for text chunks, one chunk per line. Repeated
//! runs accumulate; nothing already written is ever rewritten or removed.
//! Not safe for concurrent writers.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Writer appending chunks to the vault file
pub struct VaultWriter {
    writer: BufWriter<File>,
    chunks_written: u64,
}

impl VaultWriter {
    /// Open the vault at the given path in append mode, creating it if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            chunks_written: 0,
        })
    }

    /// Append a single chunk as one line, trimmed of surrounding whitespace
    pub fn append_chunk(&mut self, chunk: &str) -> Result<()> {
        writeln!(self.writer, "{}", chunk.trim())?;
        self.chunks_written += 1;
        Ok(())
    }

    /// Get the number of chunks written
    pub fn chunks_written(&self) -> u64 {
        self.chunks_written
    }

    /// Flush and close the vault
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
