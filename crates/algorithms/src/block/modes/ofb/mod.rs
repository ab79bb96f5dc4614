//! 8-bit Output Feedback (OFB) mode

use super::super::BlockCipher;
use super::{feedback_register, ModeOfOperation};
use crate::error::Result;
use mcrypt_common::security::SecretVec;

/// 8-bit OFB mode
///
/// The register takes in its own keystream byte, so encryption and
/// decryption are the same operation.
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    register: SecretVec,
    scratch: SecretVec,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with an IV of one block
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let register = feedback_register(&cipher, iv, "OFB initialization vector")?;
        let scratch = SecretVec::zeroed(iv.len());
        Ok(Self {
            cipher,
            register,
            scratch,
        })
    }

    fn apply(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            self.scratch
                .as_mut_slice()
                .copy_from_slice(self.register.as_slice());
            self.cipher.encrypt_block(self.scratch.as_mut_slice())?;
            let keystream = self.scratch.as_slice()[0];

            let register = self.register.as_mut_slice();
            register.copy_within(1.., 0);
            if let Some(last) = register.last_mut() {
                *last = keystream;
            }

            *byte ^= keystream;
        }
        Ok(())
    }
}

impl<B: BlockCipher> ModeOfOperation for Ofb<B> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply(data)
    }
}
