//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data. The
//! IV is the initial counter block and the whole block is incremented as
//! one big-endian integer, wrapping at the top.

use super::super::BlockCipher;
use super::{feedback_register, ModeOfOperation};
use crate::error::Result;
use mcrypt_common::security::SecretVec;

/// Counter mode implementation with secure memory handling
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter_block: SecretVec,
    keystream: SecretVec,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a new CTR mode instance whose first counter block is `iv`
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let counter_block = feedback_register(&cipher, iv, "CTR initial counter")?;
        let keystream = SecretVec::zeroed(iv.len());
        Ok(Self {
            cipher,
            counter_block,
            keystream,
            keystream_pos: 0,
        })
    }

    /// Encrypt the current counter into the keystream buffer and step it
    fn generate_keystream(&mut self) -> Result<()> {
        self.keystream
            .as_mut_slice()
            .copy_from_slice(self.counter_block.as_slice());
        self.cipher.encrypt_block(self.keystream.as_mut_slice())?;
        self.increment_counter();
        Ok(())
    }

    /// Increment the counter block as a big-endian integer
    fn increment_counter(&mut self) {
        for byte in self.counter_block.as_mut_slice().iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    fn apply(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos == 0 {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream.as_slice()[self.keystream_pos];
            self.keystream_pos = (self.keystream_pos + 1) % self.keystream.len();
        }
        Ok(())
    }
}

impl<B: BlockCipher> ModeOfOperation for Ctr<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }
}
