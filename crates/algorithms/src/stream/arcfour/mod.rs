//! Arcfour stream cipher
//!
//! Byte-for-byte compatible with RC4. The key schedule permutes a 256-byte
//! state using the key; each output byte advances two indices through it.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::StreamCipher;
use crate::error::{validate, Result};
use mcrypt_params::algorithms::ARCFOUR_MAX_KEY_SIZE;

/// Arcfour keyed state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Arcfour {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Arcfour {
    /// Run the key schedule for a key of 1 to 256 bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length_range("Arcfour key", key.len(), 1, ARCFOUR_MAX_KEY_SIZE)?;

        let mut state = [0u8; 256];
        for (i, s) in state.iter_mut().enumerate() {
            *s = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);
        let idx = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
        self.state[idx as usize]
    }
}

impl StreamCipher for Arcfour {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
        Ok(())
    }
}

impl core::fmt::Debug for Arcfour {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Arcfour([REDACTED])")
    }
}
