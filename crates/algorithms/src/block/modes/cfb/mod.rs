//! 8-bit Cipher Feedback (CFB) mode
//!
//! One byte is processed per block encryption. The register shifts left by
//! one byte and takes in the ciphertext byte just produced or consumed.

use super::super::BlockCipher;
use super::{feedback_register, ModeOfOperation};
use crate::error::Result;
use mcrypt_common::security::SecretVec;

/// 8-bit CFB mode
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    register: SecretVec,
    scratch: SecretVec,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with an IV of one block
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let register = feedback_register(&cipher, iv, "CFB initialization vector")?;
        let scratch = SecretVec::zeroed(iv.len());
        Ok(Self {
            cipher,
            register,
            scratch,
        })
    }

    /// Encrypt the register and return the leading keystream byte
    fn next_keystream_byte(&mut self) -> Result<u8> {
        self.scratch
            .as_mut_slice()
            .copy_from_slice(self.register.as_slice());
        self.cipher.encrypt_block(self.scratch.as_mut_slice())?;
        Ok(self.scratch.as_slice()[0])
    }

    fn shift_in(&mut self, byte: u8) {
        let register = self.register.as_mut_slice();
        register.copy_within(1.., 0);
        if let Some(last) = register.last_mut() {
            *last = byte;
        }
    }
}

impl<B: BlockCipher> ModeOfOperation for Cfb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            *byte ^= self.next_keystream_byte()?;
            self.shift_in(*byte);
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            let ciphertext = *byte;
            *byte ^= self.next_keystream_byte()?;
            self.shift_in(ciphertext);
        }
        Ok(())
    }
}
