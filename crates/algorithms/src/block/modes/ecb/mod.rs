//! Electronic Codebook (ECB) mode
//!
//! Each block is transformed independently. There is no IV and no state
//! carried between blocks.

use super::super::BlockCipher;
use super::ModeOfOperation;
use crate::error::{validate, Result};

/// ECB mode over any block cipher
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Wrap a keyed cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> ModeOfOperation for Ecb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("ECB data", data.len(), block_size)?;
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::block_multiple("ECB data", data.len(), block_size)?;
        for block in data.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }
}
