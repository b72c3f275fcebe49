//! CLI entrypoint for vault-rs
//!
//! ```bash
//! # Extract sent mail from 2024 into vault.txt
//! vault-rs --mboxfile ~/MAILDATA/SentItems.mbox/mbox \
//!     --startdate 01.01.2024 --enddate 31.12.2024
//! ```

use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;
use vault_rs::config::Config;
use vault_rs::filter::DateRange;
use vault_rs::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "vault-rs")]
#[command(about = "Extract chunked message text from a local mbox archive", long_about = None)]
struct Cli {
    /// The mbox file to process (in Mail.app: right click a folder > Export Mailbox..).
    /// Defaults to ./mbox
    #[arg(long)]
    mboxfile: Option<String>,

    /// Keyword to search for in message bodies (accepted but not applied yet)
    #[arg(long)]
    keyword: Option<String>,

    /// Start date in DD.MM.YYYY format (requires --enddate)
    #[arg(long)]
    startdate: Option<String>,

    /// End date in DD.MM.YYYY format (requires --startdate)
    #[arg(long)]
    enddate: Option<String>,

    /// Output vault file, opened in append mode. Defaults to vault.txt
    #[arg(long)]
    output: Option<String>,

    /// Maximum characters per chunk. Defaults to 1000
    #[arg(long)]
    max_chunk_chars: Option<usize>,

    /// Path to a TOML config file. Defaults to ./config.toml when present
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration, then let CLI flags override it
    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None if std::path::Path::new("config.toml").exists() => {
            match Config::from_file("config.toml") {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };

    if let Some(mboxfile) = cli.mboxfile {
        config.archive.mbox_path = mboxfile;
    }
    if let Some(output) = cli.output {
        config.vault.path = output;
    }
    if let Some(max_chunk_chars) = cli.max_chunk_chars {
        config.chunking.max_chunk_chars = max_chunk_chars;
    }

    // Initialize logging
    let level = config
        .logging
        .level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Validate the date pair before touching the archive or the vault
    let range = match DateRange::from_args(cli.startdate.as_deref(), cli.enddate.as_deref()) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(keyword) = &cli.keyword {
        warn!("Keyword filtering is not implemented; ignoring --keyword {}", keyword);
    }

    let pipeline = match Pipeline::new(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = pipeline.run(&range) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
