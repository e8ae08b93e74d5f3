//! Tests for configuration validation

use kernel_sim::config::{Discipline, KernelConfig, ReorderPolicy};

#[test]
fn test_kernel_config_validation() {
    let valid = KernelConfig::new(Discipline::RoundRobin);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_kernel_config_invalid_quantum() {
    let invalid = KernelConfig {
        quantum: 0,
        ..KernelConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_kernel_config_invalid_cpu_total() {
    let invalid = KernelConfig {
        cpu_total: 0,
        ..KernelConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_kernel_config_from_json() {
    let json = r#"{
        "discipline": "rr",
        "quantum": 3,
        "reorder": "every_dispatch",
        "time_unit_ms": 0
    }"#;

    let config = KernelConfig::from_json_str(json).unwrap();
    assert_eq!(config.discipline, Discipline::RoundRobin);
    assert_eq!(config.quantum, 3);
    assert_eq!(config.reorder, ReorderPolicy::EveryDispatch);
    assert_eq!(config.cpu_total, 1);
    assert_eq!(config.mem_total_mb, 4096);
}

#[test]
fn test_kernel_config_from_json_unknown_discipline() {
    let json = r#"{ "discipline": "lottery" }"#;
    assert!(KernelConfig::from_json_str(json).is_err());
}

#[test]
fn test_kernel_config_from_json_rejects_zero_quantum() {
    let json = r#"{ "discipline": "priority", "quantum": 0 }"#;
    assert!(KernelConfig::from_json_str(json).is_err());
}

#[test]
fn test_kernel_config_json_roundtrip_names() {
    let json = serde_json::to_string(&KernelConfig::new(Discipline::Sjf)).unwrap();
    assert!(json.contains("\"discipline\":\"sjf\""));
    assert!(json.contains("\"reorder\":\"once\""));
}
