use crate::error::{Error, Result};
use cipher::block_padding::{Padding, Pkcs7};
use cipher::{Block, BlockDecryptMut, BlockEncryptMut};

/// Which way a transform moves data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A unidirectional streaming cipher transform.
///
/// Input may be fed in pieces of any length; output is appended to `out`
/// as soon as whole blocks are available. [`Transform::finish`] flushes the
/// final (padded) block and consumes the transform.
pub trait Transform {
    /// Feed more input, appending any completed output to `out`.
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>);

    /// Flush the trailing block and release the transform.
    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<()>;
}

/// PKCS#7 padding encryptor over any block mode.
pub struct Encryptor<M: BlockEncryptMut> {
    /// Underlying block mode (holds the chaining state)
    mode: M,
    /// Partially filled block awaiting more input
    pending: Block<M>,
    /// Number of valid bytes in `pending`
    filled: usize,
}

impl<M: BlockEncryptMut> Encryptor<M> {
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            pending: Block::<M>::default(),
            filled: 0,
        }
    }
}

impl<M: BlockEncryptMut> Transform for Encryptor<M> {
    fn update(&mut self, mut input: &[u8], out: &mut Vec<u8>) {
        let block_size = M::block_size();
        while !input.is_empty() {
            let take = (block_size - self.filled).min(input.len());
            self.pending[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];

            if self.filled == block_size {
                self.mode.encrypt_block_mut(&mut self.pending);
                out.extend_from_slice(&self.pending);
                self.filled = 0;
            }
        }
    }

    fn finish(mut self: Box<Self>, out: &mut Vec<u8>) -> Result<()> {
        // `filled` is always below the block size here, so a full
        // padding block is emitted for block-aligned input.
        <Pkcs7 as Padding<M::BlockSize>>::pad(&mut self.pending, self.filled);
        self.mode.encrypt_block_mut(&mut self.pending);
        out.extend_from_slice(&self.pending);
        Ok(())
    }
}

/// PKCS#7 unpadding decryptor over any block mode.
///
/// The last complete block is held back until [`Transform::finish`], since
/// only then is it known to carry the padding.
pub struct Decryptor<M: BlockDecryptMut> {
    mode: M,
    pending: Block<M>,
    filled: usize,
}

impl<M: BlockDecryptMut> Decryptor<M> {
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            pending: Block::<M>::default(),
            filled: 0,
        }
    }
}

impl<M: BlockDecryptMut> Transform for Decryptor<M> {
    fn update(&mut self, mut input: &[u8], out: &mut Vec<u8>) {
        let block_size = M::block_size();
        while !input.is_empty() {
            if self.filled == block_size {
                self.mode.decrypt_block_mut(&mut self.pending);
                out.extend_from_slice(&self.pending);
                self.filled = 0;
            }

            let take = (block_size - self.filled).min(input.len());
            self.pending[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];
        }
    }

    fn finish(mut self: Box<Self>, out: &mut Vec<u8>) -> Result<()> {
        if self.filled != M::block_size() {
            return Err(Error::MalformedCiphertext);
        }
        self.mode.decrypt_block_mut(&mut self.pending);
        let plaintext = <Pkcs7 as Padding<M::BlockSize>>::unpad(&self.pending)
            .map_err(|_| Error::MalformedCiphertext)?;
        out.extend_from_slice(plaintext);
        Ok(())
    }
}
