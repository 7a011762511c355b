//! Disk-to-disk pipeline: stream one file through a transform into another.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::core::Transform;
use crate::error::{Error, Result};
use crate::keys::KeyMaterial;
use crate::suite::CipherConfig;

/// Bytes read from the input per transform call.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Encrypt `input` into `output`, truncating `output` first.
///
/// Returns the number of plaintext bytes read. Only one chunk is held in
/// memory at a time.
pub fn encrypt_file(
    config: CipherConfig,
    keys: &KeyMaterial,
    input: &Path,
    output: &Path,
) -> Result<u64> {
    transform_file(keys.encryptor(config)?, input, output)
}

/// Decrypt `input` into `output`, truncating `output` first.
///
/// Returns the number of ciphertext bytes read.
pub fn decrypt_file(
    config: CipherConfig,
    keys: &KeyMaterial,
    input: &Path,
    output: &Path,
) -> Result<u64> {
    transform_file(keys.decryptor(config)?, input, output)
}

fn transform_file(mut transform: Box<dyn Transform>, input: &Path, output: &Path) -> Result<u64> {
    let mut reader = File::open(input).map_err(|e| Error::io(input, e))?;
    let mut writer = File::create(output).map_err(|e| Error::io(output, e))?;

    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut out = Vec::with_capacity(CHUNK_SIZE + 16);
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(input, e)),
        };
        total += n as u64;

        transform.update(&chunk[..n], &mut out);
        writer.write_all(&out).map_err(|e| Error::io(output, e))?;
        out.clear();
    }

    transform.finish(&mut out)?;
    writer.write_all(&out).map_err(|e| Error::io(output, e))?;
    writer.flush().map_err(|e| Error::io(output, e))?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::{CHUNK_SIZE, decrypt_file, encrypt_file};
    use crate::buffer::encrypt_buffer;
    use crate::error::Error;
    use crate::keys::KeyMaterial;
    use crate::suite::CipherConfig;
    use std::fs;

    #[test]
    fn test_file_output_matches_buffer_output() {
        let dir = tempfile::tempdir().unwrap();
        let (plain, enc) = (dir.path().join("plain"), dir.path().join("enc"));
        // Spans several chunks with a ragged tail.
        let data: Vec<u8> = (0..CHUNK_SIZE * 2 + 77).map(|i| (i % 251) as u8).collect();
        fs::write(&plain, &data).unwrap();

        let config = CipherConfig::TripleDes;
        let keys = KeyMaterial::generate(config);
        let read = encrypt_file(config, &keys, &plain, &enc).unwrap();
        assert_eq!(read, data.len() as u64);
        assert_eq!(fs::read(&enc).unwrap(), encrypt_buffer(config, &keys, &data).unwrap());
    }

    #[test]
    fn test_output_is_truncated_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let (plain, enc, dec) = (
            dir.path().join("plain"),
            dir.path().join("enc"),
            dir.path().join("dec"),
        );
        fs::write(&plain, b"short").unwrap();
        fs::write(&dec, vec![0xffu8; 10_000]).unwrap();

        let config = CipherConfig::SUITE[0];
        let keys = KeyMaterial::generate(config);
        encrypt_file(config, &keys, &plain, &enc).unwrap();
        decrypt_file(config, &keys, &enc, &dec).unwrap();
        assert_eq!(fs::read(&dec).unwrap(), b"short");
    }

    #[test]
    fn test_missing_input_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");
        let config = CipherConfig::Des;
        let keys = KeyMaterial::generate(config);
        let err = encrypt_file(config, &keys, &missing, &dir.path().join("out")).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
