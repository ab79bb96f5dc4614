//! Zero padding and the fixlength trailer
//!
//! Block modes only ever see whole blocks. On encrypt the plaintext is
//! zero-padded; with fixlength the last byte of the output additionally
//! records `len % block_size`, adding a block when the plaintext already
//! fills its last one. The helpers here work on lengths and buffers only,
//! so the single-buffer path and the stream driver share one layout.

use subtle::{ConditionallySelectable, ConstantTimeGreater};

/// Length of the encoded form of `len` plaintext bytes
///
/// `unit` is the block size for block modes and 1 otherwise; fixlength has
/// no effect when `unit` is 1.
pub fn padded_len(len: usize, unit: usize, fixlength: bool) -> usize {
    if unit <= 1 {
        return len;
    }
    if fixlength {
        (len / unit + 1) * unit
    } else {
        len.div_ceil(unit) * unit
    }
}

/// Copy `data` into a zeroed buffer of its encoded length
///
/// With fixlength the trailer byte is written into the last position; the
/// remainder always fits in a byte because block sizes stay below 256.
pub fn pad(data: &[u8], unit: usize, fixlength: bool) -> Vec<u8> {
    let mut out = vec![0u8; padded_len(data.len(), unit, fixlength)];
    out[..data.len()].copy_from_slice(data);
    if fixlength && unit > 1 {
        write_trailer(&mut out, data.len() % unit);
    }
    out
}

/// Store the fixlength remainder in the final byte of `block`
pub fn write_trailer(block: &mut [u8], remainder: usize) {
    if let Some(last) = block.last_mut() {
        *last = remainder as u8;
    }
}

/// Plaintext length recovered from decrypted fixlength output
///
/// Reads the remainder from the last byte and drops the final block,
/// keeping its first `r` bytes. A remainder above `unit` (wrong key, or
/// data not produced with fixlength) is clamped so the whole final block
/// survives. Buffers shorter than one unit are returned unchanged.
pub fn recovered_len(decrypted: &[u8], unit: usize) -> usize {
    let len = decrypted.len();
    if unit <= 1 || len < unit {
        return len;
    }
    let remainder = u64::from(decrypted[len - 1]);
    let unit64 = unit as u64;
    let clamped = u64::conditional_select(&remainder, &unit64, remainder.ct_gt(&unit64));
    len - unit + clamped as usize
}

/// Largest multiple of `unit` not exceeding `len`
pub fn whole_units(len: usize, unit: usize) -> usize {
    if unit <= 1 {
        len
    } else {
        len - len % unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_lengths() {
        assert_eq!(padded_len(0, 16, false), 0);
        assert_eq!(padded_len(1, 16, false), 16);
        assert_eq!(padded_len(16, 16, false), 16);
        assert_eq!(padded_len(17, 16, false), 32);

        assert_eq!(padded_len(0, 16, true), 16);
        assert_eq!(padded_len(15, 16, true), 16);
        assert_eq!(padded_len(16, 16, true), 32);
        assert_eq!(padded_len(160, 16, true), 176);

        // non-block modes are untouched
        assert_eq!(padded_len(5, 1, true), 5);
        assert_eq!(padded_len(5, 1, false), 5);
    }

    #[test]
    fn fixlength_growth_matches_ceiling_formula() {
        for bs in [8usize, 16] {
            for len in 0..=4 * bs {
                assert_eq!(padded_len(len, bs, true), (len + 1).div_ceil(bs) * bs);
            }
        }
    }

    #[test]
    fn pad_places_trailer_in_last_byte() {
        let out = pad(b"abc", 8, true);
        assert_eq!(out, [b'a', b'b', b'c', 0, 0, 0, 0, 3]);

        let out = pad(&[0xffu8; 8], 8, true);
        assert_eq!(out.len(), 16);
        assert_eq!(&out[8..], &[0u8; 8]);

        let out = pad(b"abc", 8, false);
        assert_eq!(out, [b'a', b'b', b'c', 0, 0, 0, 0, 0]);

        assert_eq!(pad(b"", 8, true), [0u8; 8]);
        assert!(pad(b"", 8, false).is_empty());
    }

    #[test]
    fn recovery_inverts_pad() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len as u8).map(|b| b.wrapping_add(1)).collect();
            let padded = pad(&data, 8, true);
            assert_eq!(recovered_len(&padded, 8), len);
        }
    }

    #[test]
    fn oversized_remainder_is_clamped() {
        let mut block = [0xaau8; 16];
        block[15] = 200;
        assert_eq!(recovered_len(&block, 16), 16);

        block[15] = 16;
        assert_eq!(recovered_len(&block, 16), 16);

        assert_eq!(recovered_len(&[], 16), 0);
        assert_eq!(recovered_len(&[7u8; 5], 16), 5);
    }

    #[test]
    fn whole_unit_truncation() {
        assert_eq!(whole_units(35, 16), 32);
        assert_eq!(whole_units(15, 16), 0);
        assert_eq!(whole_units(35, 1), 35);
    }
}
