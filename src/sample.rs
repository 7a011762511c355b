//! The random payload shared by every configuration.

use std::fs;
use std::path::Path;

use rand::RngCore;

use crate::error::{Error, Result};

/// Default payload size: 1 MiB.
pub const SAMPLE_SIZE: usize = 1024 * 1024;

/// Read-only random payload, created once per run.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    data: Box<[u8]>,
}

impl SampleBuffer {
    /// `size` random bytes from the thread-local RNG.
    pub fn random(size: usize) -> Self {
        Self::random_with(&mut rand::rng(), size)
    }

    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R, size: usize) -> Self {
        let mut data = vec![0u8; size].into_boxed_slice();
        rng.fill_bytes(&mut data);
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Materialise the payload on disk as the file pipeline's plaintext source.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.data).map_err(|e| Error::io(path, e))
    }
}

impl AsRef<[u8]> for SampleBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::{SAMPLE_SIZE, SampleBuffer};

    #[test]
    fn test_default_size_is_one_mebibyte() {
        let sample = SampleBuffer::random(SAMPLE_SIZE);
        assert_eq!(sample.len(), 1_048_576);
        // 1 MiB of zeros from a working RNG is not a realistic outcome.
        assert!(sample.as_bytes().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_write_to_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let sample = SampleBuffer::random(4096);
        sample.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), sample.as_bytes());
    }
}
