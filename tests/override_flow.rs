//! End-to-end override flow: timing file → loader → validation → registry.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use ecat_timing::config::loader::load_config;
use ecat_timing::{TimeoutKind, TimeoutRegistry, TimingConfig};

#[test]
fn test_file_override_reaches_registry() {
    let path = std::env::temp_dir().join(format!("ecat-timing-flow-{}.toml", std::process::id()));
    fs::write(&path, "frame_return_us = 4000\nstate_change_us = 500000\n").unwrap();

    let registry = TimeoutRegistry::new();
    assert_eq!(registry.get(TimeoutKind::StateChange), Duration::from_micros(2_000_000));

    let config = load_config(&path).unwrap();
    fs::remove_file(&path).unwrap();
    config.apply(&registry);

    assert_eq!(registry.get(TimeoutKind::StateChange), Duration::from_micros(500_000));
    assert_eq!(registry.get(TimeoutKind::FrameReturn), Duration::from_micros(4_000));
    assert_eq!(registry.retry_triple(), Duration::from_micros(12_000));

    // Fields the file did not name keep their defaults.
    assert_eq!(registry.get(TimeoutKind::Safe), Duration::from_micros(20_000));
    assert_eq!(registry.get(TimeoutKind::Eeprom), Duration::from_micros(20_000));
    assert_eq!(registry.get(TimeoutKind::TxMailbox), Duration::from_micros(20_000));
    assert_eq!(registry.get(TimeoutKind::RxMailbox), Duration::from_micros(700_000));
}

#[test]
fn test_runtime_override_visible_across_threads() {
    let registry = Arc::new(TimeoutRegistry::new());

    let writer = {
        let registry = registry.clone();
        std::thread::spawn(move || {
            registry.set(TimeoutKind::RxMailbox, Duration::from_micros(1_400_000));
        })
    };
    writer.join().unwrap();

    assert_eq!(registry.get(TimeoutKind::RxMailbox), Duration::from_micros(1_400_000));
    assert_eq!(TimingConfig::snapshot(&registry).rx_mailbox_us, 1_400_000);
}
