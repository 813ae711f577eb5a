mod common;

use attreport::config::Config;
use attreport::core::RankingLimits;
use attreport::export::ExportFormat;
use common::temp_dir;

#[test]
fn test_defaults() {
    let cfg = Config::from_yaml("").unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.output_dir, ".");
    assert_eq!(cfg.sheet_name, "Total");
    assert_eq!(cfg.default_format, ExportFormat::Pdf);
    assert_eq!(cfg.ranking_limits(), RankingLimits::default());
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let cfg = Config::from_yaml("default_format: xlsx\ntop_on_time: 5\n").unwrap();

    assert_eq!(cfg.default_format, ExportFormat::Xlsx);
    assert_eq!(
        cfg.ranking_limits(),
        RankingLimits {
            overtime: 10,
            delay: 10,
            on_time: 5,
        }
    );
    assert_eq!(cfg.sheet_name, "Total");
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let err = Config::from_yaml("default_format: docx\n").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_init_then_load_roundtrip() {
    let dir = temp_dir("config_init");
    let path = dir.join("nested").join("attreport.conf");

    let written = Config::init(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load(&path).unwrap(), written);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = temp_dir("config_missing");
    let cfg = Config::load(&dir.join("nope.conf")).unwrap();
    assert_eq!(cfg, Config::default());
}
