//! Extraction pipeline
//!
//! Sequential single-pass orchestration: open the archive, then for each
//! message decode, filter by date, chunk and append. Archive-level failures
//! are terminal and happen before anything is written; per-message decode
//! problems are recovered locally.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::chunker::TextChunker;
use crate::config::Config;
use crate::error::Result;
use crate::filter::DateRange;
use crate::mbox::{self, MboxReader};
use crate::message;
use crate::vault::VaultWriter;

/// Counters for a single extraction run
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub messages_read: u64,
    pub skipped_no_date: u64,
    pub filtered_out: u64,
    pub messages_processed: u64,
    pub chunks_written: u64,
}

/// Single-run extraction pipeline
pub struct Pipeline {
    mbox_path: PathBuf,
    vault_path: PathBuf,
    chunker: TextChunker,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            mbox_path: PathBuf::from(&config.archive.mbox_path),
            vault_path: PathBuf::from(&config.vault.path),
            chunker: TextChunker::new(config.chunking.max_chunk_chars)?,
        })
    }

    /// Process the archive end to end, appending chunks for every message
    /// inside the date range
    pub fn run(&self, range: &DateRange) -> Result<RunStats> {
        let total = mbox::count_messages(mbox::open_archive(&self.mbox_path)?)?;
        info!("{} messages in {}", total, self.mbox_path.display());

        let mut reader = MboxReader::new(mbox::open_archive(&self.mbox_path)?);
        let mut vault = VaultWriter::open(&self.vault_path)?;
        let mut stats = RunStats::default();

        while let Some(raw) = reader.read_message()? {
            stats.messages_read += 1;

            let extracted = message::extract(&raw);

            // Messages without a date cannot be filtered; skip them entirely
            let Some(date) = extracted.date else {
                stats.skipped_no_date += 1;
                debug!("Skipping message {} without date", stats.messages_read);
                continue;
            };

            if !range.contains(date) {
                stats.filtered_out += 1;
                continue;
            }

            info!("Subject: {}, Date: {}", extracted.subject.to_lowercase(), date);

            // Vault text is stored lowercased
            let chunks = self.chunker.chunk(&extracted.body.to_lowercase());
            for chunk in &chunks {
                vault.append_chunk(chunk)?;
            }
            stats.chunks_written += chunks.len() as u64;
            stats.messages_processed += 1;
        }

        vault.finish()?;

        info!(
            "Processed {} of {} messages ({} outside date range, {} without date), {} chunks appended to {}",
            stats.messages_processed,
            stats.messages_read,
            stats.filtered_out,
            stats.skipped_no_date,
            stats.chunks_written,
            self.vault_path.display()
        );

        Ok(stats)
    }
}
