use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info, warn};

use cipherbench::sample::SAMPLE_SIZE;
use cipherbench::settings::{DATA_FILE, DECRYPTED_FILE, ENCRYPTED_FILE};
use cipherbench::{CipherConfig, Settings, run_suite};

#[derive(Parser, Debug)]
#[command(author, version, about = "CBC cipher throughput benchmark, RAM vs. disk")]
struct Args {
    /// Plaintext source for the disk benchmark
    #[arg(long, default_value = DATA_FILE)]
    data_file: PathBuf,

    /// Scratch file receiving encrypted data
    #[arg(long, default_value = ENCRYPTED_FILE)]
    encrypted_file: PathBuf,

    /// Scratch file receiving decrypted data
    #[arg(long, default_value = DECRYPTED_FILE)]
    decrypted_file: PathBuf,

    /// Size of the random in-memory payload in bytes
    #[arg(long, default_value_t = SAMPLE_SIZE)]
    sample_size: usize,

    /// Repeat each configuration N times and report mean timings
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// Benchmark against the existing data file instead of writing a fresh payload to it
    #[arg(long)]
    reuse_data_file: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            data_file: self.data_file.clone(),
            encrypted_file: self.encrypted_file.clone(),
            decrypted_file: self.decrypted_file.clone(),
            sample_size: self.sample_size,
            trials: self.trials,
            reuse_data_file: self.reuse_data_file,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = args.settings();
    let summary = run_suite(&settings, &CipherConfig::SUITE, io::stdout().lock())
        .with_context(|| {
            format!("benchmark with data file {} failed", settings.data_file.display())
        })?;

    if summary.skipped > 0 {
        warn!(
            skipped = summary.skipped,
            completed = summary.completed,
            "some configurations were skipped"
        );
    } else {
        info!(completed = summary.completed, "benchmark complete");
    }
    Ok(())
}
