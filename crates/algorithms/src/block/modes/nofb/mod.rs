//! n-bit Output Feedback (NOFB) mode

use super::super::BlockCipher;
use super::{feedback_register, ModeOfOperation};
use crate::error::Result;
use mcrypt_common::security::SecretVec;

/// Full-block OFB mode
///
/// The register is replaced by its own encryption once per block.
pub struct Nofb<B: BlockCipher> {
    cipher: B,
    register: SecretVec,
    pos: usize,
}

impl<B: BlockCipher> Nofb<B> {
    /// Creates a new NOFB mode instance with an IV of one block
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let register = feedback_register(&cipher, iv, "NOFB initialization vector")?;
        Ok(Self {
            cipher,
            register,
            pos: 0,
        })
    }

    fn apply(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.pos == 0 {
                self.cipher.encrypt_block(self.register.as_mut_slice())?;
            }
            *byte ^= self.register.as_slice()[self.pos];
            self.pos = (self.pos + 1) % self.register.len();
        }
        Ok(())
    }
}

impl<B: BlockCipher> ModeOfOperation for Nofb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }
}
