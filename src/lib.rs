//! Symmetric cipher throughput benchmark.
//!
//! Measures RAM-to-RAM and disk-to-disk encryption and decryption time for a
//! fixed suite of CBC block-cipher configurations and reports seconds per
//! block and bytes per second for each.
//!
//! Every configuration is driven through the same streaming [`Transform`]
//! abstraction, built on the `cipher` crate traits. The RAM pipeline feeds a
//! whole buffer in one call, the file pipeline feeds fixed-size chunks.
//!
//! ```
//! use cipherbench::{CipherConfig, KeyMaterial, buffer};
//!
//! let config = CipherConfig::SUITE[0];
//! let keys = KeyMaterial::generate(config);
//! let ciphertext = buffer::encrypt_buffer(config, &keys, b"attack at dawn").unwrap();
//! let plaintext = buffer::decrypt_buffer(config, &keys, &ciphertext).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

pub use cipher; // Re-export cipher crate for downstream users

// --- Streaming transform core and chaining backends ---

pub(crate) mod backends;
pub mod core;

// --- Benchmark building blocks ---

pub mod buffer;
pub mod driver;
pub mod error;
pub mod file;
pub mod keys;
pub mod metrics;
pub mod report;
pub mod sample;
pub mod settings;
pub mod suite;
pub mod timing;

// --- Convenience re-exports ---

pub use crate::backends::Backend;
pub use crate::core::{Direction, Transform};
pub use crate::driver::{Benchmark, ConfigError, Outcome, Phase, Summary, run_suite};
pub use crate::error::{Error, Result};
pub use crate::keys::KeyMaterial;
pub use crate::metrics::BenchmarkResult;
pub use crate::sample::SampleBuffer;
pub use crate::settings::Settings;
pub use crate::suite::{AesKeySize, CipherConfig};
