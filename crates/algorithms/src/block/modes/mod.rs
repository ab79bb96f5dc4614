//! Block cipher modes of operation
//!
//! This module implements the modes the engine can pair with a block
//! cipher. ECB and CBC work on whole blocks only. CFB and OFB feed back a
//! single byte per step; NCFB, NOFB and CTR feed back whole blocks but keep
//! a keystream position so they also accept partial trailing blocks.
//!
//! Every mode keeps its feedback state between calls, so transforming a
//! message in several pieces gives the same bytes as transforming it at once.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ncfb;
pub mod nofb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ncfb::Ncfb;
pub use nofb::Nofb;
pub use ofb::Ofb;

use super::BlockCipher;
use crate::error::{validate, Result};
use mcrypt_common::security::SecretVec;

/// A keyed mode of operation transforming buffers in place
pub trait ModeOfOperation: Send {
    /// Encrypt `data` in place, advancing the feedback state
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()>;

    /// Decrypt `data` in place, advancing the feedback state
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()>;
}

/// Build the initial feedback register from an IV of exactly one block
pub(crate) fn feedback_register<B: BlockCipher>(
    cipher: &B,
    iv: &[u8],
    context: &'static str,
) -> Result<SecretVec> {
    validate::length(context, iv.len(), cipher.block_size())?;
    Ok(SecretVec::from_slice(iv))
}

/// XOR `src` into `dst`
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
