//! Round-trip and determinism properties of the buffer pipeline.

use cipherbench::buffer::{decrypt_buffer, encrypt_buffer};
use cipherbench::{CipherConfig, KeyMaterial};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn any_config() -> impl Strategy<Value = CipherConfig> {
    prop::sample::select(CipherConfig::SUITE.to_vec())
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        config in any_config(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..600),
    ) {
        let keys = KeyMaterial::generate_with(&mut StdRng::seed_from_u64(seed), config);
        let ciphertext = encrypt_buffer(config, &keys, &plaintext).unwrap();

        // PKCS#7 always adds 1..=block_len bytes.
        prop_assert_eq!(ciphertext.len() % config.block_len(), 0);
        prop_assert!(ciphertext.len() > plaintext.len());
        prop_assert!(ciphertext.len() <= plaintext.len() + config.block_len());

        let recovered = decrypt_buffer(config, &keys, &ciphertext).unwrap();
        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn encryption_is_deterministic_for_fixed_material(
        config in any_config(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let keys = KeyMaterial::generate_with(&mut StdRng::seed_from_u64(seed), config);
        let first = encrypt_buffer(config, &keys, &plaintext).unwrap();
        let second = encrypt_buffer(config, &keys, &plaintext).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn boundary_lengths_round_trip_for_every_config() {
    for config in CipherConfig::SUITE {
        let keys = KeyMaterial::generate(config);
        let block = config.block_len();
        for len in [0, 1, block - 1, block, block + 1, 4 * block] {
            let plaintext = vec![0xa5u8; len];
            let ciphertext = encrypt_buffer(config, &keys, &plaintext).unwrap();
            let recovered = decrypt_buffer(config, &keys, &ciphertext).unwrap();
            assert_eq!(recovered, plaintext, "{config} len={len}");
        }
    }
}

#[test]
fn different_material_gives_different_ciphertext() {
    let config = CipherConfig::SUITE[0];
    let a = KeyMaterial::generate_with(&mut StdRng::seed_from_u64(1), config);
    let b = KeyMaterial::generate_with(&mut StdRng::seed_from_u64(2), config);
    let plaintext = [0u8; 64];
    assert_ne!(
        encrypt_buffer(config, &a, &plaintext).unwrap(),
        encrypt_buffer(config, &b, &plaintext).unwrap()
    );
}
