//! Benchmark driver: provisions, times and reports each configuration.
//!
//! Configurations run strictly one after another on the calling thread.
//! The scratch files in [`Settings`] are reused by every configuration, so
//! running configurations in parallel would need per-configuration paths.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use crate::buffer::{decrypt_buffer, encrypt_buffer};
use crate::error::{Error, Result};
use crate::file::{decrypt_file, encrypt_file};
use crate::keys::KeyMaterial;
use crate::metrics::BenchmarkResult;
use crate::report::Report;
use crate::sample::SampleBuffer;
use crate::settings::Settings;
use crate::suite::CipherConfig;
use crate::timing::measure;

/// The timed step a configuration was in when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    RamEncrypt,
    RamDecrypt,
    FileEncrypt,
    FileDecrypt,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::RamEncrypt => "ram-encrypt",
            Phase::RamDecrypt => "ram-decrypt",
            Phase::FileEncrypt => "file-encrypt",
            Phase::FileDecrypt => "file-decrypt",
        })
    }
}

/// A failure confined to one configuration.
#[derive(Debug, Error)]
#[error("{config}: {phase} failed: {source}")]
pub struct ConfigError {
    pub config: CipherConfig,
    pub phase: Phase,
    pub source: Error,
}

/// What measuring one configuration produced.
pub type Outcome = std::result::Result<BenchmarkResult, ConfigError>;

/// Counts of measured and skipped configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub skipped: usize,
}

/// Runs configurations against a shared sample payload.
pub struct Benchmark<'a> {
    settings: &'a Settings,
    sample: &'a SampleBuffer,
}

impl<'a> Benchmark<'a> {
    pub fn new(settings: &'a Settings, sample: &'a SampleBuffer) -> Self {
        Self { settings, sample }
    }

    /// Create the sample payload and make sure the data file is in place.
    ///
    /// Unless `reuse_data_file` is set the payload is written to the data
    /// file; otherwise the file must already exist. Either failure is fatal
    /// to the whole run.
    pub fn prepare(settings: &Settings) -> Result<SampleBuffer> {
        let sample = SampleBuffer::random(settings.sample_size);
        let path = &settings.data_file;
        if settings.reuse_data_file {
            let meta = path.metadata().map_err(|e| Error::io(path, e))?;
            info!(path = %path.display(), bytes = meta.len(), "reusing data file");
        } else {
            sample.write_to(path)?;
            info!(path = %path.display(), bytes = sample.len(), "wrote data file");
        }
        Ok(sample)
    }

    /// Measure every configuration in `suite`, lazily and in order.
    pub fn run<'s>(
        &'s self,
        suite: &'s [CipherConfig],
    ) -> impl Iterator<Item = Outcome> + 's {
        suite.iter().map(move |&config| self.run_config(config))
    }

    /// Measure one configuration: RAM encrypt, RAM decrypt, file encrypt,
    /// file decrypt, all under a single freshly generated key and IV.
    pub fn run_config(&self, config: CipherConfig) -> Outcome {
        let span = info_span!("config", %config);
        let _enter = span.enter();

        let keys = KeyMaterial::generate(config);
        let trials = self.settings.trials.max(1);
        let mut totals = [Duration::ZERO; 4];
        let mut file_bytes = 0;

        for trial in 0..trials {
            let timings = self.trial(config, &keys, &mut file_bytes)?;
            debug!(trial, ?timings, "trial complete");
            for (total, t) in totals.iter_mut().zip(timings) {
                *total += t;
            }
        }

        let [ram_encrypt, ram_decrypt, file_encrypt, file_decrypt] = totals.map(|t| t / trials);
        let result = BenchmarkResult {
            config,
            ram_bytes: self.sample.len() as u64,
            file_bytes,
            ram_encrypt,
            ram_decrypt,
            file_encrypt,
            file_decrypt,
        };
        info!(
            block_time = result.block_time().as_secs_f64(),
            ram_throughput = result.ram_throughput(),
            file_throughput = result.file_throughput(),
            "measured"
        );
        Ok(result)
    }

    /// One pass of the four timed operations.
    fn trial(
        &self,
        config: CipherConfig,
        keys: &KeyMaterial,
        file_bytes: &mut u64,
    ) -> std::result::Result<[Duration; 4], ConfigError> {
        let fail = |phase| failed_at(config, phase);
        let settings = self.settings;

        let (ciphertext, ram_encrypt) =
            measure(|| encrypt_buffer(config, keys, self.sample.as_bytes()));
        let ciphertext = ciphertext.map_err(fail(Phase::RamEncrypt))?;

        // Only the decryption of the ciphertext above is timed.
        let (plaintext, ram_decrypt) = measure(|| decrypt_buffer(config, keys, &ciphertext));
        plaintext.map_err(fail(Phase::RamDecrypt))?;

        let (read, file_encrypt) = measure(|| {
            encrypt_file(config, keys, &settings.data_file, &settings.encrypted_file)
        });
        *file_bytes = read.map_err(fail(Phase::FileEncrypt))?;

        let (written, file_decrypt) = measure(|| {
            decrypt_file(config, keys, &settings.encrypted_file, &settings.decrypted_file)
        });
        written.map_err(fail(Phase::FileDecrypt))?;

        Ok([ram_encrypt, ram_decrypt, file_encrypt, file_decrypt])
    }
}

fn failed_at(config: CipherConfig, phase: Phase) -> impl FnOnce(Error) -> ConfigError {
    move |source| ConfigError {
        config,
        phase,
        source,
    }
}

/// Prepare the data file, measure `suite` and write the report to `out`.
///
/// Failures inside a configuration become skipped rows; only setup and
/// report-writing failures abort the run.
pub fn run_suite<W: Write>(
    settings: &Settings,
    suite: &[CipherConfig],
    out: W,
) -> Result<Summary> {
    let sample = Benchmark::prepare(settings)?;
    let bench = Benchmark::new(settings, &sample);
    let mut report = Report::new(out).map_err(Error::Report)?;
    let mut summary = Summary::default();

    for outcome in bench.run(suite) {
        match &outcome {
            Ok(_) => summary.completed += 1,
            Err(err) => {
                warn!(
                    config = %err.config,
                    phase = %err.phase,
                    error = %err.source,
                    "skipping configuration"
                );
                summary.skipped += 1;
            }
        }
        report.record(&outcome).map_err(Error::Report)?;
    }

    Ok(summary)
}
