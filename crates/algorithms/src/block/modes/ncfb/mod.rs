//! n-bit Cipher Feedback (NCFB) mode
//!
//! Full-block CFB. The register is encrypted once per block and the
//! ciphertext bytes overwrite it as they are produced, so a partial block
//! left by one call is completed by the next.

use super::super::BlockCipher;
use super::{feedback_register, ModeOfOperation};
use crate::error::Result;
use mcrypt_common::security::SecretVec;

/// Full-block CFB mode
pub struct Ncfb<B: BlockCipher> {
    cipher: B,
    register: SecretVec,
    keystream: SecretVec,
    pos: usize,
}

impl<B: BlockCipher> Ncfb<B> {
    /// Creates a new NCFB mode instance with an IV of one block
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let register = feedback_register(&cipher, iv, "NCFB initialization vector")?;
        let keystream = SecretVec::zeroed(iv.len());
        Ok(Self {
            cipher,
            register,
            keystream,
            pos: 0,
        })
    }

    fn refill(&mut self) -> Result<()> {
        if self.pos == 0 {
            self.keystream
                .as_mut_slice()
                .copy_from_slice(self.register.as_slice());
            self.cipher.encrypt_block(self.keystream.as_mut_slice())?;
        }
        Ok(())
    }

    fn advance(&mut self, ciphertext: u8) {
        self.register.as_mut_slice()[self.pos] = ciphertext;
        self.pos = (self.pos + 1) % self.register.len();
    }
}

impl<B: BlockCipher> ModeOfOperation for Ncfb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            self.refill()?;
            *byte ^= self.keystream.as_slice()[self.pos];
            self.advance(*byte);
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            self.refill()?;
            let ciphertext = *byte;
            *byte ^= self.keystream.as_slice()[self.pos];
            self.advance(ciphertext);
        }
        Ok(())
    }
}
