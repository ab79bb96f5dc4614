//! Property-based tests for the padding, fixlength and streaming behaviour

use std::io::Cursor;

use mcrypt_api::Direction;
use mcrypt_engine::{transform_stream, StreamOptions, TransformContext};
use mcrypt_tests::fixtures::{keyed, BLOCK_MODE_PAIRS, BYTE_MODE_PAIRS};
use proptest::prelude::*;

fn stream(
    ctx: &mut TransformContext,
    direction: Direction,
    data: &[u8],
    fixlength: bool,
    buffer_blocks: usize,
) -> Vec<u8> {
    let options = StreamOptions {
        fixlength,
        buffer_blocks: Some(buffer_blocks),
    };
    let mut out = Vec::new();
    ctx.reinit().unwrap();
    transform_stream(ctx, direction, Cursor::new(data), &mut out, &options).unwrap();
    out
}

proptest! {
    #[test]
    fn fixlength_round_trip(
        pair in prop::sample::select(BLOCK_MODE_PAIRS),
        seed in any::<u64>(),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let mut ctx = keyed(pair.0, pair.1, seed);
        let ciphertext = ctx.encrypt(&data, true).unwrap();

        ctx.reinit().unwrap();
        let plaintext = ctx.decrypt(&ciphertext, true).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn fixlength_grows_by_trailer(
        pair in prop::sample::select(BLOCK_MODE_PAIRS),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let mut ctx = keyed(pair.0, pair.1, 1);
        let bs = ctx.get_block_size();

        let fixed = ctx.encrypt(&data, true).unwrap();
        prop_assert_eq!(fixed.len(), (data.len() + 1).div_ceil(bs) * bs);

        ctx.reinit().unwrap();
        let padded = ctx.encrypt(&data, false).unwrap();
        if data.len() % bs == 0 {
            prop_assert_eq!(fixed.len(), padded.len() + bs);
        }
    }

    #[test]
    fn zero_padding_round_trip(
        pair in prop::sample::select(BLOCK_MODE_PAIRS),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let mut ctx = keyed(pair.0, pair.1, 2);
        let bs = ctx.get_block_size();
        let ciphertext = ctx.encrypt(&data, false).unwrap();

        ctx.reinit().unwrap();
        let plaintext = ctx.decrypt(&ciphertext, false).unwrap();

        let mut expected = data.clone();
        if data.len() % bs != 0 {
            expected.resize(data.len() + bs - data.len() % bs, 0);
        }
        prop_assert_eq!(plaintext, expected);
    }

    #[test]
    fn byte_modes_preserve_length(
        pair in prop::sample::select(BYTE_MODE_PAIRS),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let mut ctx = keyed(pair.0, pair.1, 3);
        let fixed = ctx.encrypt(&data, true).unwrap();
        prop_assert_eq!(fixed.len(), data.len());

        ctx.reinit().unwrap();
        prop_assert_eq!(ctx.encrypt(&data, false).unwrap(), fixed.clone());

        ctx.reinit().unwrap();
        prop_assert_eq!(ctx.decrypt(&fixed, true).unwrap(), data);
    }

    #[test]
    fn streaming_matches_single_buffer(
        pair in prop::sample::select([BLOCK_MODE_PAIRS, BYTE_MODE_PAIRS].concat()),
        data in prop::collection::vec(any::<u8>(), 0..300),
        fixlength in any::<bool>(),
        buffer_blocks in 1usize..6
    ) {
        let mut ctx = keyed(pair.0, pair.1, 4);

        let whole = ctx.encrypt(&data, fixlength).unwrap();
        let streamed = stream(&mut ctx, Direction::Encrypt, &data, fixlength, buffer_blocks);
        prop_assert_eq!(&streamed, &whole);

        ctx.reinit().unwrap();
        let expected = ctx.decrypt(&whole, fixlength).unwrap();
        let recovered = stream(&mut ctx, Direction::Decrypt, &streamed, fixlength, buffer_blocks);
        prop_assert_eq!(recovered, expected);
    }
}
