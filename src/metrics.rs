//! Per-configuration measurements and the figures derived from them.

use std::time::Duration;

use crate::suite::CipherConfig;

/// Mean of two durations.
pub fn average(first: Duration, second: Duration) -> Duration {
    (first + second) / 2
}

/// Bytes per second given the payload size and the two timings to average.
///
/// A zero average (fast cipher, coarse clock) yields `f64::INFINITY`
/// instead of dividing by zero.
pub fn throughput(bytes: u64, first: Duration, second: Duration) -> f64 {
    let secs = (first.as_secs_f64() + second.as_secs_f64()) / 2.0;
    if secs == 0.0 {
        f64::INFINITY
    } else {
        bytes as f64 / secs
    }
}

/// The four timings of one configuration, all taken under one key and IV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub config: CipherConfig,
    /// Size of the in-memory payload
    pub ram_bytes: u64,
    /// Size of the plaintext file
    pub file_bytes: u64,
    pub ram_encrypt: Duration,
    pub ram_decrypt: Duration,
    pub file_encrypt: Duration,
    pub file_decrypt: Duration,
}

impl BenchmarkResult {
    /// Average of RAM encrypt and RAM decrypt.
    pub fn block_time(&self) -> Duration {
        average(self.ram_encrypt, self.ram_decrypt)
    }

    pub fn ram_throughput(&self) -> f64 {
        throughput(self.ram_bytes, self.ram_encrypt, self.ram_decrypt)
    }

    pub fn file_throughput(&self) -> f64 {
        throughput(self.file_bytes, self.file_encrypt, self.file_decrypt)
    }
}
