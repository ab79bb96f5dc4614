//! File-backed streaming through the stream driver

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};

use mcrypt_engine::{decrypt_file, encrypt_file, StreamOptions};
use mcrypt_tests::fixtures::{data, keyed};
use tempfile::tempdir;

#[test]
fn file_round_trip_with_fixlength() {
    let dir = tempdir().unwrap();
    let plain_path = dir.path().join("plain.bin");
    let cipher_path = dir.path().join("cipher.bin");
    let out_path = dir.path().join("out.bin");

    // several chunks plus a partial block
    let plaintext = data(16 * 1024 * 3 + 5, 21);
    fs::write(&plain_path, &plaintext).unwrap();

    let mut ctx = keyed("rijndael-128", "cbc", 22);
    encrypt_file(
        &mut ctx,
        BufReader::new(File::open(&plain_path).unwrap()),
        BufWriter::new(File::create(&cipher_path).unwrap()),
    )
    .unwrap();

    let ciphertext = fs::read(&cipher_path).unwrap();
    assert_eq!(ciphertext.len(), (plaintext.len() / 16 + 1) * 16);

    ctx.reinit().unwrap();
    ctx.decrypt_file(
        File::open(&cipher_path).unwrap(),
        File::create(&out_path).unwrap(),
        &StreamOptions::for_decrypt().with_fixlength(true),
    )
    .unwrap();
    assert_eq!(fs::read(&out_path).unwrap(), plaintext);
}

#[test]
fn file_round_trip_with_padding() {
    let dir = tempdir().unwrap();
    let cipher_path = dir.path().join("cipher.bin");
    let out_path = dir.path().join("out.bin");
    let plaintext = data(1000, 23);

    let mut ctx = keyed("idea", "nofb", 24);
    ctx.encrypt_file(
        &plaintext[..],
        File::create(&cipher_path).unwrap(),
        &StreamOptions::for_encrypt()
            .with_fixlength(false)
            .with_buffer_blocks(7),
    )
    .unwrap();
    assert_eq!(fs::metadata(&cipher_path).unwrap().len(), 1000);

    ctx.reinit().unwrap();
    decrypt_file(
        &mut ctx,
        File::open(&cipher_path).unwrap(),
        File::create(&out_path).unwrap(),
    )
    .unwrap();
    assert_eq!(fs::read(&out_path).unwrap(), plaintext);
}

#[test]
fn stream_cipher_file_keeps_length() {
    let dir = tempdir().unwrap();
    let cipher_path = dir.path().join("cipher.bin");
    let plaintext = data(4099, 25);

    let mut ctx = keyed("arcfour", "stream", 26);
    encrypt_file(&mut ctx, &plaintext[..], File::create(&cipher_path).unwrap()).unwrap();
    let ciphertext = fs::read(&cipher_path).unwrap();
    assert_eq!(ciphertext.len(), plaintext.len());

    ctx.reinit().unwrap();
    assert_eq!(ctx.decrypt(&ciphertext, false).unwrap(), plaintext);
}

#[test]
fn empty_file() {
    let dir = tempdir().unwrap();
    let cipher_path = dir.path().join("cipher.bin");

    let mut ctx = keyed("idea", "cbc", 27);
    encrypt_file(&mut ctx, std::io::empty(), File::create(&cipher_path).unwrap()).unwrap();
    assert_eq!(fs::metadata(&cipher_path).unwrap().len(), 8);

    ctx.reinit().unwrap();
    let mut out = Vec::new();
    ctx.decrypt_file(
        File::open(&cipher_path).unwrap(),
        &mut out,
        &StreamOptions::for_decrypt().with_fixlength(true),
    )
    .unwrap();
    assert!(out.is_empty());
}
