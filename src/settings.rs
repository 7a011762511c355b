//! Run settings: file locations, payload size and trial count.

use std::path::{Path, PathBuf};

use crate::sample::SAMPLE_SIZE;

pub const DATA_FILE: &str = "data.bin";
pub const ENCRYPTED_FILE: &str = "encrypted.bin";
pub const DECRYPTED_FILE: &str = "decrypted.bin";

/// Everything a benchmark run needs to know besides the cipher suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Plaintext source for the file pipeline
    pub data_file: PathBuf,
    /// Scratch output of file encryption, input of file decryption
    pub encrypted_file: PathBuf,
    /// Scratch output of file decryption
    pub decrypted_file: PathBuf,
    /// Size of the in-memory payload in bytes
    pub sample_size: usize,
    /// Repetitions of each configuration's timed operations; 1 is single-shot
    pub trials: u32,
    /// Use an existing data file instead of writing the payload to it
    pub reuse_data_file: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: DATA_FILE.into(),
            encrypted_file: ENCRYPTED_FILE.into(),
            decrypted_file: DECRYPTED_FILE.into(),
            sample_size: SAMPLE_SIZE,
            trials: 1,
            reuse_data_file: false,
        }
    }
}

impl Settings {
    /// Default settings with all three files placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_file: dir.join(DATA_FILE),
            encrypted_file: dir.join(ENCRYPTED_FILE),
            decrypted_file: dir.join(DECRYPTED_FILE),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::path::Path;

    #[test]
    fn test_defaults_use_relative_fixed_paths() {
        let s = Settings::default();
        assert_eq!(s.data_file, Path::new("data.bin"));
        assert_eq!(s.encrypted_file, Path::new("encrypted.bin"));
        assert_eq!(s.decrypted_file, Path::new("decrypted.bin"));
        assert_eq!((s.sample_size, s.trials, s.reuse_data_file), (1_048_576, 1, false));
    }

    #[test]
    fn test_in_dir_relocates_files_only() {
        let s = Settings::in_dir(Path::new("/tmp/run"));
        assert_eq!(s.data_file, Path::new("/tmp/run/data.bin"));
        assert_eq!(s.decrypted_file, Path::new("/tmp/run/decrypted.bin"));
        assert_eq!(s.sample_size, Settings::default().sample_size);
    }
}
