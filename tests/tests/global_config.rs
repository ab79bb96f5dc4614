//! Process-wide configuration with manifest directories
//!
//! Lives in its own test binary: configuration happens once per process.

use std::fs;

use mcrypt_api::Error;
use mcrypt_engine::{configure, global, metadata, EngineConfig, TransformContext};
use tempfile::tempdir;

#[test]
fn configure_once_with_manifests() {
    let algorithms = tempdir().unwrap();
    let modes = tempdir().unwrap();
    fs::write(
        algorithms.path().join("rijndael-256key.toml"),
        r#"
unit = "rijndael"
key_size = 32
key_sizes = [32]
iv_size = 16
block_size = 16
is_block_algorithm = true
"#,
    )
    .unwrap();
    fs::write(
        modes.path().join("fullcfb.toml"),
        r#"
unit = "ncfb"
is_block_mode = true
is_block_algorithm_mode = true
requires_iv = true
"#,
    )
    .unwrap();

    assert!(!global::is_configured());
    let config = EngineConfig::default()
        .with_algorithm_dir(algorithms.path())
        .with_mode_dir(modes.path())
        .with_buffer_blocks(2);
    configure(config.clone()).unwrap();

    assert!(global::is_configured());
    assert_eq!(global::buffer_blocks(), 2);
    assert!(matches!(configure(config), Err(Error::AlreadyConfigured)));

    // built-ins stay available next to the manifest entries
    assert_eq!(metadata::get_key_sizes("rijndael-256key").unwrap(), vec![32]);
    assert!(metadata::list_algorithms().contains(&"idea".to_string()));
    assert!(metadata::has_iv("fullcfb").unwrap());

    let mut ctx = TransformContext::new("rijndael-256key", "fullcfb").unwrap();
    assert!(matches!(
        ctx.key(&[1u8; 16], Some(&[0u8; 16])),
        Err(Error::KeySize { .. })
    ));
    ctx.key(&[1u8; 32], Some(&[0u8; 16])).unwrap();
    let ciphertext = ctx.encrypt(b"through a manifest", true).unwrap();
    ctx.reinit().unwrap();
    assert_eq!(ctx.decrypt(&ciphertext, true).unwrap(), b"through a manifest");
}
