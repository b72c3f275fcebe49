//! vault-rs: mbox-to-vault text extraction
//!
//! Extracts plain-text content from a local mbox archive, filters messages
//! by date range, and appends normalized, length-bounded text chunks to a
//! flat vault file for downstream retrieval/embedding pipelines.
//!
//! # Processing model
//!
//! Fully sequential: the archive is opened once and iterated once, and each
//! message is decoded, filtered, chunked and appended before the next one is
//! read. The vault is opened in append mode, so repeated runs accumulate.
//!
//! # Example
//!
//! ```no_run
//! use vault_rs::config::Config;
//! use vault_rs::filter::DateRange;
//! use vault_rs::pipeline::Pipeline;
//!
//! fn main() -> vault_rs::Result<()> {
//!     let config = Config::default();
//!     let range = DateRange::from_args(Some("01.01.2024"), Some("31.12.2024"))?;
//!
//!     let stats = Pipeline::new(&config)?.run(&range)?;
//!     println!("{} chunks written", stats.chunks_written);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`chunker`]: Text normalization and greedy sentence packing
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`filter`]: Inclusive UTC date range filtering
//! - [`mbox`]: Sequential mbox archive reading
//! - [`message`]: Subject/date/body extraction from raw messages
//! - [`pipeline`]: End-to-end extraction run
//! - [`vault`]: Append-only chunk sink

pub mod chunker;
pub mod config;
pub mod error;
pub mod filter;
pub mod mbox;
pub mod message;
pub mod pipeline;
pub mod vault;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, VaultError};
