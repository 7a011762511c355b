//! Ephemeral key and IV provisioning.

use std::fmt;

use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::Transform;
use crate::error::Result;
use crate::suite::CipherConfig;

/// A symmetric key and IV sized for one [`CipherConfig`].
///
/// Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl KeyMaterial {
    /// Fresh random key and IV for `config` from the thread-local RNG.
    pub fn generate(config: CipherConfig) -> Self {
        Self::generate_with(&mut rand::rng(), config)
    }

    /// Fresh key and IV for `config` drawn from `rng`.
    pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R, config: CipherConfig) -> Self {
        let mut key = vec![0u8; config.key_len()];
        let mut iv = vec![0u8; config.iv_len()];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut iv);
        Self { key, iv }
    }

    /// Wrap caller-supplied bytes. Lengths are checked when a transform is built.
    pub fn from_parts(key: Vec<u8>, iv: Vec<u8>) -> Self {
        Self { key, iv }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn encryptor(&self, config: CipherConfig) -> Result<Box<dyn Transform>> {
        config.encryptor(&self.key, &self.iv)
    }

    pub fn decryptor(&self, config: CipherConfig) -> Result<Box<dyn Transform>> {
        config.decryptor(&self.key, &self.iv)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .finish()
    }
}
