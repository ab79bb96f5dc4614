//! Keyed contexts and deterministic inputs

use mcrypt_engine::TransformContext;
use rand::RngCore;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Every implemented pairing of a block algorithm with a block mode
pub const BLOCK_MODE_PAIRS: &[(&str, &str)] = &[
    ("rijndael-128", "ecb"),
    ("rijndael-128", "cbc"),
    ("rijndael-128", "ncfb"),
    ("rijndael-128", "nofb"),
    ("rijndael-128", "ctr"),
    ("idea", "ecb"),
    ("idea", "cbc"),
    ("idea", "ncfb"),
    ("idea", "nofb"),
    ("idea", "ctr"),
];

/// Implemented pairings that transform byte by byte
pub const BYTE_MODE_PAIRS: &[(&str, &str)] = &[
    ("arcfour", "stream"),
    ("rijndael-128", "cfb"),
    ("rijndael-128", "ofb"),
    ("idea", "cfb"),
    ("idea", "ofb"),
];

/// Context keyed with random material from a seeded generator
///
/// An IV is supplied only when the mode takes one.
pub fn keyed(algorithm: &str, mode: &str, seed: u64) -> TransformContext {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut ctx = TransformContext::new(algorithm, mode).expect("construct context");
    let key = ctx.generate_key(&mut rng);
    let iv = ctx.has_iv().then(|| ctx.generate_iv(&mut rng));
    ctx.key(key.as_slice(), iv.as_ref().map(|iv| iv.as_slice()))
        .expect("key context");
    ctx
}

/// Pseudo-random bytes of the given length
pub fn data(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}
