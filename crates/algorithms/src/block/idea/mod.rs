//! IDEA block cipher
//!
//! 64-bit block, 128-bit key, eight rounds plus an output transformation.
//! Words are loaded little-endian, which matches the byte order produced by
//! libmcrypt-compatible implementations on the common platforms.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockCipher;
use crate::error::{validate, Result};
use mcrypt_params::algorithms::{IDEA_BLOCK_SIZE, IDEA_KEY_SIZE};

const ROUNDS: usize = 8;
const SUBKEYS: usize = 6 * ROUNDS + 4;
const USER_KEY_WORDS: usize = IDEA_KEY_SIZE / 2;

/// Multiplication modulo 2^16 + 1, with 0 standing for 2^16
#[inline(always)]
fn mul(a: u16, b: u16) -> u16 {
    const MODULUS: u32 = 0x10001;
    if a == 0 {
        (MODULUS - b as u32) as u16
    } else if b == 0 {
        (MODULUS - a as u32) as u16
    } else {
        let p = a as u32 * b as u32;
        let lo = p & 0xFFFF;
        let hi = p >> 16;
        if lo >= hi {
            (lo - hi) as u16
        } else {
            (lo + MODULUS - hi) as u16
        }
    }
}

/// Multiplicative inverse modulo 2^16 + 1
///
/// 65537 is prime, so x⁻¹ = x^(65535). 0 and 1 are their own inverses.
fn mul_inv(x: u16) -> u16 {
    if x <= 1 {
        return x;
    }
    const MODULUS: u64 = 0x10001;
    let mut base = x as u64;
    let mut exp = MODULUS - 2;
    let mut acc = 1u64;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % MODULUS;
        }
        base = base * base % MODULUS;
        exp >>= 1;
    }
    acc as u16
}

#[inline(always)]
fn add_inv(x: u16) -> u16 {
    x.wrapping_neg()
}

fn expand_key(user_key: &[u8]) -> [u16; SUBKEYS] {
    let mut key = [0u16; SUBKEYS];
    for (i, chunk) in user_key.chunks_exact(2).enumerate() {
        key[i] = LittleEndian::read_u16(chunk);
    }
    for i in USER_KEY_WORDS..SUBKEYS {
        key[i] = match i & 7 {
            0..=5 => (key[i - 7] & 127) << 9 | key[i - 6] >> 7,
            6 => (key[i - 7] & 127) << 9 | key[i - 14] >> 7,
            _ => (key[i - 15] & 127) << 9 | key[i - 14] >> 7,
        };
    }
    key
}

/// Derive the decryption schedule from the encryption schedule
fn invert_key(key: &[u16; SUBKEYS]) -> [u16; SUBKEYS] {
    let mut inv = [0u16; SUBKEYS];
    let mut lo = 0usize;
    let mut hi = 6 * ROUNDS;

    let t = mul_inv(key[lo]);
    inv[lo] = mul_inv(key[hi]);
    inv[hi] = t;
    lo += 1;
    hi += 1;
    let t = add_inv(key[lo]);
    inv[lo] = add_inv(key[hi]);
    inv[hi] = t;
    lo += 1;
    hi += 1;
    let t = add_inv(key[lo]);
    inv[lo] = add_inv(key[hi]);
    inv[hi] = t;
    lo += 1;
    hi += 1;
    let t = mul_inv(key[lo]);
    inv[lo] = mul_inv(key[hi]);
    inv[hi] = t;
    lo += 1;

    for _ in 0..(ROUNDS - 1) / 2 {
        hi -= 5;
        let t = key[lo];
        inv[lo] = key[hi];
        inv[hi] = t;
        lo += 1;
        hi += 1;

        let t = key[lo];
        inv[lo] = key[hi];
        inv[hi] = t;
        lo += 1;

        hi -= 5;
        let t = mul_inv(key[lo]);
        inv[lo] = mul_inv(key[hi]);
        inv[hi] = t;
        lo += 1;
        hi += 1;

        hi += 1;
        let t = add_inv(key[lo]);
        inv[lo] = add_inv(key[hi]);
        inv[hi] = t;
        lo += 1;
        hi -= 1;

        let t = add_inv(key[lo]);
        inv[lo] = add_inv(key[hi]);
        inv[hi] = t;
        lo += 1;
        hi += 1;

        hi += 1;
        let t = mul_inv(key[lo]);
        inv[lo] = mul_inv(key[hi]);
        inv[hi] = t;
        lo += 1;
    }

    // ROUNDS is even: the last middle round keeps its additive keys in place
    hi -= 5;
    let t = key[lo];
    inv[lo] = key[hi];
    inv[hi] = t;
    lo += 1;
    hi += 1;

    let t = key[lo];
    inv[lo] = key[hi];
    inv[hi] = t;
    lo += 1;

    inv[lo] = mul_inv(key[lo]);
    lo += 1;
    inv[lo] = add_inv(key[lo + 1]);
    inv[lo + 1] = add_inv(key[lo]);
    lo += 2;
    inv[lo] = mul_inv(key[lo]);

    inv
}

fn crypt(schedule: &[u16; SUBKEYS], block: &mut [u8]) {
    let mut x0 = LittleEndian::read_u16(&block[0..2]);
    let mut x1 = LittleEndian::read_u16(&block[2..4]);
    let mut x2 = LittleEndian::read_u16(&block[4..6]);
    let mut x3 = LittleEndian::read_u16(&block[6..8]);

    for k in schedule[..6 * ROUNDS].chunks_exact(6) {
        x0 = mul(x0, k[0]);
        x1 = x1.wrapping_add(k[1]);
        x2 = x2.wrapping_add(k[2]);
        x3 = mul(x3, k[3]);

        let t0 = mul(k[4], x0 ^ x2);
        let t1 = mul(k[5], (x1 ^ x3).wrapping_add(t0));
        let t0 = t0.wrapping_add(t1);

        x0 ^= t1;
        x3 ^= t0;
        let t0 = t0 ^ x1;
        x1 = x2 ^ t1;
        x2 = t0;
    }

    let k = &schedule[6 * ROUNDS..];
    LittleEndian::write_u16(&mut block[0..2], mul(x0, k[0]));
    LittleEndian::write_u16(&mut block[2..4], x2.wrapping_add(k[1]));
    LittleEndian::write_u16(&mut block[4..6], x1.wrapping_add(k[2]));
    LittleEndian::write_u16(&mut block[6..8], mul(x3, k[3]));
}

/// IDEA keyed with a 16-byte key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Idea {
    encrypt_key: [u16; SUBKEYS],
    decrypt_key: [u16; SUBKEYS],
}

impl Idea {
    /// Expand a 16-byte key into both round schedules
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("IDEA key", key.len(), IDEA_KEY_SIZE)?;
        let encrypt_key = expand_key(key);
        let decrypt_key = invert_key(&encrypt_key);
        Ok(Self {
            encrypt_key,
            decrypt_key,
        })
    }
}

impl BlockCipher for Idea {
    fn name(&self) -> &'static str {
        "IDEA"
    }

    fn block_size(&self) -> usize {
        IDEA_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("IDEA block", block.len(), IDEA_BLOCK_SIZE)?;
        crypt(&self.encrypt_key, block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("IDEA block", block.len(), IDEA_BLOCK_SIZE)?;
        crypt(&self.decrypt_key, block);
        Ok(())
    }
}

impl core::fmt::Debug for Idea {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Idea([REDACTED])")
    }
}
