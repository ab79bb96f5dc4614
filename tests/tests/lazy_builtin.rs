//! A lookup installs the built-in catalog and locks out configuration

use mcrypt_api::Error;
use mcrypt_engine::{configure, global, metadata, EngineConfig};

#[test]
fn configure_after_lookup_fails() {
    assert_eq!(metadata::get_block_size("idea").unwrap(), 8);
    assert!(global::is_configured());
    assert_eq!(global::buffer_blocks(), 1024);
    assert!(matches!(
        configure(EngineConfig::default()),
        Err(Error::AlreadyConfigured)
    ));
}
