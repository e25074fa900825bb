use std::fs::File;
use std::io::Write;

use pretty_assertions::assert_eq;
use tempdir::TempDir;

use crate::config::AdapterConfig;
use crate::error::Error;

#[test]
fn default_config_is_4mb_gd5446() {
    let cfg = AdapterConfig::default();
    assert_eq!(0xB8, cfg.chip_id);
    assert_eq!(4 * 1024 * 1024, cfg.vram_size());
    assert!(cfg.color_emulation);
    assert!(cfg.cirrus_present);
}

#[test]
fn can_parse_partial_toml() {
    let cfg = AdapterConfig::from_toml_str(r#"
        chip_id = 0xA0
        dram_control = 0x10
        color_emulation = false
    "#).unwrap();

    assert_eq!(AdapterConfig {
        chip_id: 0xA0,
        dram_control: 0x10,
        color_emulation: false,
        ..AdapterConfig::default()
    }, cfg);
    assert_eq!(1024 * 1024, cfg.vram_size());
}

#[test]
fn rejects_unknown_keys() {
    match AdapterConfig::from_toml_str("chip = 1") {
        Err(Error::Toml(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn can_load_config_file() {
    let dir = TempDir::new("cirrus-config").unwrap();
    let path = dir.path().join("adapter.toml");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "dram_control = 0x18").unwrap();
    writeln!(f, "callback_offset = 0x1234").unwrap();
    drop(f);

    let cfg = AdapterConfig::from_file(&path).unwrap();
    assert_eq!(2 * 1024 * 1024, cfg.vram_size());
    assert_eq!(0x1234, cfg.callback_offset);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new("cirrus-config").unwrap();
    match AdapterConfig::from_file(dir.path().join("nope.toml")) {
        Err(Error::Io(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn can_override_settings() {
    let mut cfg = AdapterConfig::default();
    cfg.set_override("chip_id", "0xA0").unwrap();
    cfg.set_override("color_emulation", "0").unwrap();
    assert_eq!(0xA0, cfg.chip_id);
    assert!(!cfg.color_emulation);

    match cfg.set_override("bogus", "1") {
        Err(Error::UnknownSetting(key)) => assert_eq!("bogus", key),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(cfg.set_override("chip_id", "xyz").is_err());
}

#[test]
fn override_rejects_values_wider_than_the_register() {
    let mut cfg = AdapterConfig::default();
    match cfg.set_override("chip_id", "1A0") {
        Err(Error::OutOfRange(input)) => assert_eq!("1A0", input),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(0xB8, cfg.chip_id);
    assert!(cfg.set_override("dram_control", "0x118").is_err());
    assert_eq!(0x98, cfg.dram_control);

    // same as the toml path
    assert!(AdapterConfig::from_toml_str("chip_id = 0x1A0").is_err());

    cfg.set_override("callback_offset", "0xC000").unwrap();
    assert_eq!(0xC000, cfg.callback_offset);
}
