//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with the IV. The last
//! ciphertext block is kept, so consecutive calls continue one chain.

use super::super::BlockCipher;
use super::{feedback_register, xor_in_place, ModeOfOperation};
use crate::error::{validate, Result};
use mcrypt_common::security::SecretVec;

/// CBC mode implementation
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    prev_block: SecretVec,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let prev_block = feedback_register(&cipher, iv, "CBC initialization vector")?;
        Ok(Self { cipher, prev_block })
    }
}

impl<B: BlockCipher> ModeOfOperation for Cbc<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("CBC plaintext", data.len(), block_size)?;

        for block in data.chunks_exact_mut(block_size) {
            xor_in_place(block, self.prev_block.as_slice());
            self.cipher.encrypt_block(block)?;
            self.prev_block.as_mut_slice().copy_from_slice(block);
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("CBC ciphertext", data.len(), block_size)?;

        let mut current = SecretVec::zeroed(block_size);
        for block in data.chunks_exact_mut(block_size) {
            current.as_mut_slice().copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, self.prev_block.as_slice());
            core::mem::swap(&mut self.prev_block, &mut current);
        }
        Ok(())
    }
}
