//! MBOX archive reading
//!
//! Sequential reader for `From `-delimited mbox archives, as produced by
//! Mail.app's "Export Mailbox..." and most other clients.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{Result, VaultError};

/// Open an mbox archive, mapping open failures to the error taxonomy
pub fn open_archive<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VaultError::ArchiveNotFound(path.display().to_string()),
        ErrorKind::PermissionDenied => VaultError::PermissionDenied(path.display().to_string()),
        _ => VaultError::ArchiveRead(path.display().to_string(), e.to_string()),
    })
}

/// MBOX reader yielding one raw message at a time
pub struct MboxReader<R: Read> {
    reader: BufReader<R>,
    current_line: String,
    message_count: u64,
    eof: bool,
    /// Flag indicating we already have a From_ line in current_line
    has_pending_from: bool,
}

impl<R: Read> MboxReader<R> {
    /// Create a new MBOX reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            current_line: String::new(),
            message_count: 0,
            eof: false,
            has_pending_from: false,
        }
    }

    /// Read the next raw message (headers + body) from the archive
    pub fn read_message(&mut self) -> Result<Option<Vec<u8>>> {
        if self.eof {
            return Ok(None);
        }

        // Check if we already have a From_ line from the previous read
        if !self.has_pending_from {
            // Find the From_ line
            loop {
                self.current_line.clear();
                let bytes_read = self.reader.read_line(&mut self.current_line)?;

                if bytes_read == 0 {
                    self.eof = true;
                    return Ok(None);
                }

                if self.current_line.starts_with("From ") {
                    break;
                }
            }
        }

        self.has_pending_from = false;

        // Read the message content until the next From_ line or EOF
        let mut message_content = Vec::new();

        loop {
            self.current_line.clear();
            let bytes_read = self.reader.read_line(&mut self.current_line)?;

            if bytes_read == 0 {
                self.eof = true;
                break;
            }

            // Check for next message
            if self.current_line.starts_with("From ") {
                // We've hit the next message - preserve this line for the next call
                self.has_pending_from = true;
                break;
            }

            // Unescape >From lines
            let line = if self.current_line.starts_with(">From ") {
                &self.current_line[1..]
            } else {
                &self.current_line
            };

            message_content.extend_from_slice(line.as_bytes());
        }

        // Remove trailing blank lines
        while message_content.ends_with(b"\n\n") {
            message_content.pop();
        }

        self.message_count += 1;

        Ok(Some(message_content))
    }

    /// Get the number of messages read so far
    pub fn message_count(&self) -> u64 {
        self.message_count
    }
}

/// Count messages in an mbox archive without fully parsing
pub fn count_messages<R: Read>(reader: R) -> Result<u64> {
    let mut buf_reader = BufReader::new(reader);
    let mut count = 0u64;
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = buf_reader.read_line(&mut line)?;

        if bytes_read == 0 {
            break;
        }

        if line.starts_with("From ") {
            count += 1;
        }
    }

    Ok(count)
}
