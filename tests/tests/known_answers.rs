//! Known-answer tests through the transform context

use mcrypt_engine::TransformContext;
use mcrypt_tests::vectors::KNOWN_ANSWERS;

#[test]
fn known_answers_encrypt_and_decrypt() {
    for case in KNOWN_ANSWERS {
        let key = hex::decode(case.key).unwrap();
        let iv = case.iv.map(|iv| hex::decode(iv).unwrap());
        let plaintext = hex::decode(case.plaintext).unwrap();

        let mut ctx = TransformContext::new(case.algorithm, case.mode).unwrap();
        ctx.key(&key, iv.as_deref()).unwrap();

        let ciphertext = ctx.encrypt(&plaintext, false).unwrap();
        assert_eq!(
            hex::encode(&ciphertext),
            case.ciphertext,
            "{}/{}",
            case.algorithm,
            case.mode
        );

        ctx.reinit().unwrap();
        assert_eq!(ctx.decrypt(&ciphertext, false).unwrap(), plaintext);
    }
}

#[test]
fn fixlength_keeps_known_prefix() {
    for case in KNOWN_ANSWERS.iter().filter(|case| case.mode == "cbc" || case.mode == "ecb") {
        let key = hex::decode(case.key).unwrap();
        let iv = case.iv.map(|iv| hex::decode(iv).unwrap());
        let plaintext = hex::decode(case.plaintext).unwrap();

        let mut ctx = TransformContext::new(case.algorithm, case.mode).unwrap();
        ctx.key(&key, iv.as_deref()).unwrap();

        let ciphertext = ctx.encrypt(&plaintext, true).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + ctx.get_block_size());
        assert_eq!(hex::encode(&ciphertext[..plaintext.len()]), case.ciphertext);
    }
}
