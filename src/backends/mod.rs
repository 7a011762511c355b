pub(crate) mod soft;

use crate::core::{Decryptor, Direction, Encryptor, Transform};
use cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit, KeyIvInit};

/// Which CBC implementation drives the block cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The `cbc` crate's mode.
    Cbc,
    /// In-crate software chaining over the raw block cipher.
    Soft,
}

impl Backend {
    /// Build a boxed streaming transform for block cipher `C`.
    ///
    /// Fails when `key` or `iv` has the wrong length for `C`.
    pub(crate) fn build<C>(
        self,
        direction: Direction,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Box<dyn Transform>, InvalidLength>
    where
        C: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit + 'static,
    {
        let transform: Box<dyn Transform> = match (self, direction) {
            (Backend::Cbc, Direction::Encrypt) => Box::new(Encryptor::new(
                cbc::Encryptor::<C>::new_from_slices(key, iv)?,
            )),
            (Backend::Cbc, Direction::Decrypt) => Box::new(Decryptor::new(
                cbc::Decryptor::<C>::new_from_slices(key, iv)?,
            )),
            (Backend::Soft, Direction::Encrypt) => Box::new(Encryptor::new(
                soft::ChainEncryptor::<C>::new_from_slices(key, iv)?,
            )),
            (Backend::Soft, Direction::Decrypt) => Box::new(Decryptor::new(
                soft::ChainDecryptor::<C>::new_from_slices(key, iv)?,
            )),
        };
        Ok(transform)
    }
}
