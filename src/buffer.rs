//! RAM-to-RAM pipeline: whole buffer in, whole buffer out.

use crate::core::Transform;
use crate::error::Result;
use crate::keys::KeyMaterial;
use crate::suite::CipherConfig;

/// Encrypt `input` in one pass, padding included.
///
/// Any input length is accepted.
pub fn encrypt_buffer(config: CipherConfig, keys: &KeyMaterial, input: &[u8]) -> Result<Vec<u8>> {
    let encryptor = keys.encryptor(config)?;
    // Ciphertext grows by at most one padding block.
    run(encryptor, input, input.len() + config.block_len())
}

/// Decrypt `input` in one pass and strip the padding.
///
/// Fails with `MalformedCiphertext` when `input` is not a padded block stream.
pub fn decrypt_buffer(config: CipherConfig, keys: &KeyMaterial, input: &[u8]) -> Result<Vec<u8>> {
    let decryptor = keys.decryptor(config)?;
    run(decryptor, input, input.len())
}

fn run(mut transform: Box<dyn Transform>, input: &[u8], capacity: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(capacity);
    transform.update(input, &mut out);
    transform.finish(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{decrypt_buffer, encrypt_buffer};
    use crate::error::Error;
    use crate::keys::KeyMaterial;
    use crate::suite::{AesKeySize, CipherConfig};

    #[test]
    fn test_round_trip_for_every_config() {
        let plaintext: Vec<u8> = (0..1000u32).map(|i| (i * 31) as u8).collect();
        for config in CipherConfig::SUITE {
            let keys = KeyMaterial::generate(config);
            let ciphertext = encrypt_buffer(config, &keys, &plaintext).unwrap();
            assert_ne!(&ciphertext[..plaintext.len()], &plaintext[..], "{config}");
            assert_eq!(ciphertext.len() % config.block_len(), 0, "{config}");
            let recovered = decrypt_buffer(config, &keys, &ciphertext).unwrap();
            assert_eq!(recovered, plaintext, "{config}");
        }
    }

    #[test]
    fn test_cbc_and_chained_aes_agree() {
        let keys = KeyMaterial::generate(CipherConfig::Aes(AesKeySize::Bits256));
        let plaintext = [0x61u8; 333];
        let a = encrypt_buffer(CipherConfig::Aes(AesKeySize::Bits256), &keys, &plaintext).unwrap();
        let b = encrypt_buffer(CipherConfig::AesChained(AesKeySize::Bits256), &keys, &plaintext)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decrypt_rejects_truncated_ciphertext() {
        let config = CipherConfig::Des;
        let keys = KeyMaterial::generate(config);
        let ciphertext = encrypt_buffer(config, &keys, b"0123456789").unwrap();
        let err = decrypt_buffer(config, &keys, &ciphertext[..ciphertext.len() - 3]).unwrap_err();
        assert!(matches!(err, Error::MalformedCiphertext));
    }

    #[test]
    fn test_wrong_material_fails_before_transform() {
        let keys = KeyMaterial::from_parts(vec![0; 8], vec![0; 8]);
        let err = encrypt_buffer(CipherConfig::TripleDes, &keys, b"data").unwrap_err();
        assert!(matches!(err, Error::InvalidKeyMaterial { .. }));
    }
}
