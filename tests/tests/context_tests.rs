//! Construction, keying and lifecycle of transform contexts

use mcrypt_api::{Error, NameKind};
use mcrypt_engine::{metadata, TransformContext};
use mcrypt_tests::fixtures::{data, keyed, BLOCK_MODE_PAIRS, BYTE_MODE_PAIRS};

#[test]
fn stream_algorithm_with_block_mode_is_rejected() {
    for mode in ["cbc", "ecb", "ctr", "ncfb", "nofb", "cfb", "ofb"] {
        match TransformContext::new("arcfour", mode) {
            Err(Error::IncompatiblePairing { reason, .. }) => {
                assert_eq!(reason, "block mode used with stream algorithm")
            }
            other => panic!("arcfour/{mode}: {other:?}"),
        }
    }
    assert!(matches!(
        TransformContext::new("idea", "stream"),
        Err(Error::IncompatiblePairing { .. })
    ));
}

#[test]
fn unregistered_names_are_rejected() {
    assert!(matches!(
        TransformContext::new("rot13", "cbc"),
        Err(Error::UnknownName { kind: NameKind::Algorithm, .. })
    ));
    assert!(matches!(
        TransformContext::new("idea", "xts"),
        Err(Error::UnknownName { kind: NameKind::Mode, .. })
    ));
    assert!(matches!(
        TransformContext::new("twofish", "cbc"),
        Err(Error::UnknownName { kind: NameKind::CipherUnit, .. })
    ));
}

#[test]
fn keying_rules() {
    let mut ctx = TransformContext::new("rijndael-128", "cbc").unwrap();
    assert!(ctx.has_iv());
    assert!(matches!(
        ctx.key(&[0u8; 17], Some(&[0u8; 16])),
        Err(Error::KeySize { actual: 17, .. })
    ));
    assert!(matches!(ctx.key(&[0u8; 16], None), Err(Error::IvRequired { .. })));

    let mut ctx = TransformContext::new("idea", "ecb").unwrap();
    assert!(matches!(ctx.key(&[0u8; 8], None), Err(Error::KeySize { .. })));
    ctx.key(&[0u8; 16], None).unwrap();
}

#[test]
fn reinit_resets_feedback_state() {
    for (algorithm, mode) in BLOCK_MODE_PAIRS.iter().chain(BYTE_MODE_PAIRS) {
        if *mode == "ecb" {
            continue;
        }
        let mut ctx = keyed(algorithm, mode, 11);
        let plaintext = data(48, 12);

        let first = ctx.encrypt(&plaintext, false).unwrap();
        let second = ctx.encrypt(&plaintext, false).unwrap();
        assert_ne!(first, second, "{algorithm}/{mode} did not advance");

        ctx.reinit().unwrap();
        assert_eq!(ctx.encrypt(&plaintext, false).unwrap(), first, "{algorithm}/{mode}");
    }
}

#[test]
fn ecb_is_stateless() {
    let mut ctx = keyed("idea", "ecb", 13);
    let plaintext = data(24, 14);
    let first = ctx.encrypt(&plaintext, false).unwrap();
    assert_eq!(ctx.encrypt(&plaintext, false).unwrap(), first);
}

#[test]
fn deinit_then_rekey() {
    let mut ctx = keyed("rijndael-128", "ctr", 15);
    let ciphertext = ctx.encrypt(b"counter mode", true).unwrap();

    ctx.deinit();
    assert!(matches!(ctx.decrypt(&ciphertext, true), Err(Error::NotKeyed)));

    let mut ctx = keyed("rijndael-128", "ctr", 15);
    assert_eq!(ctx.decrypt(&ciphertext, true).unwrap(), b"counter mode");
}

#[test]
fn metadata_without_an_instance() {
    assert_eq!(metadata::get_block_size("blowfish").unwrap(), 8);
    assert!(!metadata::is_block_algorithm("wake").unwrap());
    assert_eq!(metadata::get_key_sizes("rijndael-128").unwrap(), vec![16, 24, 32]);
    assert_eq!(metadata::get_key_size("arcfour").unwrap(), 256);
    assert!(!metadata::is_block_mode("ofb").unwrap());
    assert!(metadata::is_block_algorithm_mode("ofb").unwrap());
    assert!(metadata::list_modes().contains(&"ncfb".to_string()));
}

#[test]
fn contexts_agree_with_metadata() {
    for (algorithm, mode) in BLOCK_MODE_PAIRS.iter().chain(BYTE_MODE_PAIRS) {
        let ctx = TransformContext::new(algorithm, mode).unwrap();
        assert_eq!(ctx.get_block_size(), metadata::get_block_size(algorithm).unwrap());
        assert_eq!(ctx.get_iv_size(), metadata::get_iv_size(algorithm).unwrap());
        assert_eq!(ctx.is_block_mode(), metadata::is_block_mode(mode).unwrap());
        assert_eq!(ctx.has_iv(), metadata::has_iv(mode).unwrap());
    }
}

#[test]
fn contexts_are_send() {
    fn assert_send<T: Send>() {}
    assert_send::<TransformContext>();

    let mut ctx = keyed("idea", "cbc", 16);
    let handle = std::thread::spawn(move || ctx.encrypt(b"moved across threads", true).unwrap());
    assert_eq!(handle.join().unwrap().len(), 24);
}
