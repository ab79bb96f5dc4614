//! Stream cipher implementations
//!
//! This module provides stream ciphers, which encrypt data one byte at a
//! time by XORing it with a pseudorandom keystream, and the `stream` mode
//! that exposes them to the engine.
//!
//! # Available Stream Ciphers
//!
//! - Arcfour: an RC4-compatible cipher with keys of 1 to 256 bytes
//!
//! # Security Considerations
//!
//! Arcfour has no IV. Reusing a key reuses the keystream, which completely
//! breaks confidentiality.

pub mod arcfour;

// Re-export commonly used types
pub use arcfour::Arcfour;

use crate::block::modes::ModeOfOperation;
use crate::error::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher: Send {
    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.process(output)
    }
}

impl<S: StreamCipher + ?Sized> StreamCipher for Box<S> {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        (**self).process(data)
    }
}

/// The `stream` mode: hands every byte straight to a stream cipher
pub struct StreamMode<S: StreamCipher> {
    cipher: S,
}

impl<S: StreamCipher> StreamMode<S> {
    /// Wrap a keyed stream cipher
    pub fn new(cipher: S) -> Self {
        Self { cipher }
    }
}

impl<S: StreamCipher> ModeOfOperation for StreamMode<S> {
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.cipher.encrypt(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.cipher.decrypt(data)
    }
}
