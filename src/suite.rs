//! The fixed set of cipher configurations under benchmark.

use std::fmt;

use aes::{Aes128, Aes192, Aes256};
use des::{Des, TdesEde3};

use crate::backends::Backend;
use crate::core::{Direction, Transform};
use crate::error::{Error, Result};

/// AES key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl AesKeySize {
    pub const fn bits(self) -> usize {
        match self {
            AesKeySize::Bits128 => 128,
            AesKeySize::Bits192 => 192,
            AesKeySize::Bits256 => 256,
        }
    }
}

/// A named algorithm plus key size.
///
/// `Aes`, `AesChained` and `Rijndael` all run AES in CBC mode. They are kept
/// apart so implementation variants are benchmarked side by side: `Aes` and
/// `Rijndael` use the `cbc` crate, `AesChained` the in-crate chaining backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherConfig {
    Aes(AesKeySize),
    AesChained(AesKeySize),
    Rijndael(AesKeySize),
    Des,
    TripleDes,
}

impl CipherConfig {
    /// The benchmark suite, in report order.
    pub const SUITE: [CipherConfig; 8] = [
        CipherConfig::Aes(AesKeySize::Bits128),
        CipherConfig::Aes(AesKeySize::Bits256),
        CipherConfig::AesChained(AesKeySize::Bits128),
        CipherConfig::AesChained(AesKeySize::Bits256),
        CipherConfig::Rijndael(AesKeySize::Bits128),
        CipherConfig::Rijndael(AesKeySize::Bits256),
        CipherConfig::Des,
        CipherConfig::TripleDes,
    ];

    /// Algorithm name as printed in the report.
    pub const fn name(&self) -> &'static str {
        match self {
            CipherConfig::Aes(_) => "Aes",
            CipherConfig::AesChained(_) => "AesChained",
            CipherConfig::Rijndael(_) => "Rijndael",
            CipherConfig::Des => "Des",
            CipherConfig::TripleDes => "TripleDes",
        }
    }

    /// Nominal key size in bits. DES keys count their parity bits.
    pub const fn key_bits(&self) -> usize {
        match self {
            CipherConfig::Aes(size)
            | CipherConfig::AesChained(size)
            | CipherConfig::Rijndael(size) => size.bits(),
            CipherConfig::Des => 64,
            CipherConfig::TripleDes => 192,
        }
    }

    pub const fn key_len(&self) -> usize {
        self.key_bits() / 8
    }

    /// Cipher block size in bytes; CBC uses one block as IV.
    pub const fn block_len(&self) -> usize {
        match self {
            CipherConfig::Aes(_) | CipherConfig::AesChained(_) | CipherConfig::Rijndael(_) => 16,
            CipherConfig::Des | CipherConfig::TripleDes => 8,
        }
    }

    pub const fn iv_len(&self) -> usize {
        self.block_len()
    }

    pub const fn backend(&self) -> Backend {
        match self {
            CipherConfig::AesChained(_) => Backend::Soft,
            _ => Backend::Cbc,
        }
    }

    /// Create a streaming encryptor keyed with `key` and `iv`.
    pub fn encryptor(&self, key: &[u8], iv: &[u8]) -> Result<Box<dyn Transform>> {
        self.transform(Direction::Encrypt, key, iv)
    }

    /// Create a streaming decryptor keyed with `key` and `iv`.
    pub fn decryptor(&self, key: &[u8], iv: &[u8]) -> Result<Box<dyn Transform>> {
        self.transform(Direction::Decrypt, key, iv)
    }

    pub fn transform(
        &self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Box<dyn Transform>> {
        let backend = self.backend();
        let built = match *self {
            CipherConfig::Aes(size) | CipherConfig::AesChained(size) | CipherConfig::Rijndael(size) => {
                match size {
                    AesKeySize::Bits128 => backend.build::<Aes128>(direction, key, iv),
                    AesKeySize::Bits192 => backend.build::<Aes192>(direction, key, iv),
                    AesKeySize::Bits256 => backend.build::<Aes256>(direction, key, iv),
                }
            }
            CipherConfig::Des => backend.build::<Des>(direction, key, iv),
            CipherConfig::TripleDes => backend.build::<TdesEde3>(direction, key, iv),
        };
        built.map_err(|_| Error::InvalidKeyMaterial {
            config: self.to_string(),
            key_len: key.len(),
            iv_len: iv.len(),
        })
    }
}

impl fmt::Display for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bit)", self.name(), self.key_bits())
    }
}
