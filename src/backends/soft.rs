use cipher::consts::U1;
use cipher::inout::InOut;
use cipher::{
    Block, BlockBackend, BlockCipher, BlockClosure, BlockDecrypt, BlockDecryptMut, BlockEncrypt,
    BlockEncryptMut, BlockSizeUser, Iv, IvSizeUser, Key, KeyInit, KeyIvInit, KeySizeUser,
    ParBlocksSizeUser,
};

/// CBC encryption chained in software over a raw block cipher.
#[derive(Clone)]
pub struct ChainEncryptor<C: BlockCipher + BlockEncrypt> {
    /// Keyed block cipher
    cipher: C,
    /// Previous ciphertext block (the IV before the first block)
    iv: Block<C>,
}

/// CBC decryption chained in software over a raw block cipher.
#[derive(Clone)]
pub struct ChainDecryptor<C: BlockCipher + BlockDecrypt> {
    cipher: C,
    iv: Block<C>,
}

impl<C: BlockCipher + BlockEncrypt> BlockSizeUser for ChainEncryptor<C> {
    type BlockSize = C::BlockSize;
}

impl<C: BlockCipher + BlockEncrypt + KeyInit> KeySizeUser for ChainEncryptor<C> {
    type KeySize = C::KeySize;
}

impl<C: BlockCipher + BlockEncrypt + KeyInit> IvSizeUser for ChainEncryptor<C> {
    type IvSize = C::BlockSize;
}

impl<C: BlockCipher + BlockEncrypt + KeyInit> KeyIvInit for ChainEncryptor<C> {
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        Self {
            cipher: C::new(key),
            iv: iv.clone(),
        }
    }
}

impl<C: BlockCipher + BlockEncrypt> BlockEncryptMut for ChainEncryptor<C> {
    fn encrypt_with_backend_mut(&mut self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        let Self { cipher, iv } = self;
        f.call(&mut EncryptBackend { cipher, iv });
    }
}

impl<C: BlockCipher + BlockDecrypt> BlockSizeUser for ChainDecryptor<C> {
    type BlockSize = C::BlockSize;
}

impl<C: BlockCipher + BlockDecrypt + KeyInit> KeySizeUser for ChainDecryptor<C> {
    type KeySize = C::KeySize;
}

impl<C: BlockCipher + BlockDecrypt + KeyInit> IvSizeUser for ChainDecryptor<C> {
    type IvSize = C::BlockSize;
}

impl<C: BlockCipher + BlockDecrypt + KeyInit> KeyIvInit for ChainDecryptor<C> {
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        Self {
            cipher: C::new(key),
            iv: iv.clone(),
        }
    }
}

impl<C: BlockCipher + BlockDecrypt> BlockDecryptMut for ChainDecryptor<C> {
    fn decrypt_with_backend_mut(&mut self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        let Self { cipher, iv } = self;
        f.call(&mut DecryptBackend { cipher, iv });
    }
}

/// The software encryption backend: one block at a time, no parallelism.
struct EncryptBackend<'a, C: BlockEncrypt> {
    cipher: &'a C,
    iv: &'a mut Block<C>,
}

impl<C: BlockEncrypt> BlockSizeUser for EncryptBackend<'_, C> {
    type BlockSize = C::BlockSize;
}

impl<C: BlockEncrypt> ParBlocksSizeUser for EncryptBackend<'_, C> {
    type ParBlocksSize = U1;
}

impl<C: BlockEncrypt> BlockBackend for EncryptBackend<'_, C> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        // C_i = E(P_i ^ C_{i-1})
        let mut t = block.clone_in();
        xor_in_place(&mut t, self.iv);
        self.cipher.encrypt_block(&mut t);
        *self.iv = t.clone();
        *block.get_out() = t;
    }
}

/// The software decryption backend.
struct DecryptBackend<'a, C: BlockDecrypt> {
    cipher: &'a C,
    iv: &'a mut Block<C>,
}

impl<C: BlockDecrypt> BlockSizeUser for DecryptBackend<'_, C> {
    type BlockSize = C::BlockSize;
}

impl<C: BlockDecrypt> ParBlocksSizeUser for DecryptBackend<'_, C> {
    type ParBlocksSize = U1;
}

impl<C: BlockDecrypt> BlockBackend for DecryptBackend<'_, C> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        // P_i = D(C_i) ^ C_{i-1}
        let ciphertext = block.clone_in();
        let mut t = ciphertext.clone();
        self.cipher.decrypt_block(&mut t);
        xor_in_place(&mut t, self.iv);
        *self.iv = ciphertext;
        *block.get_out() = t;
    }
}

#[inline(always)]
fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src.iter()).for_each(|(d, &s)| *d ^= s);
}
