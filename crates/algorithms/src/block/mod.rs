//! Block cipher implementations and modes of operation
//!
//! Ciphers are keyed at construction from a runtime key slice, so a single
//! type covers every key size the algorithm accepts. The trait is object
//! safe: the registry erases concrete ciphers behind `Box<dyn BlockCipher>`
//! and the modes are generic over anything implementing it.

pub mod idea;
pub mod modes;
pub mod rijndael;

pub use idea::Idea;
pub use rijndael::Rijndael;

use crate::error::Result;

/// Common interface for keyed block ciphers
pub trait BlockCipher: Send {
    /// Human readable algorithm name
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypt exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

impl<B: BlockCipher + ?Sized> BlockCipher for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }
}
