//! Tests for builder modules

use std::time::Duration;

use kernel_sim::builders::KernelBuilder;
use kernel_sim::config::{Discipline, KernelConfig, ReorderPolicy};
use kernel_sim::infra::InMemoryMailbox;
use kernel_sim::runtime::ThreadSpawner;

#[test]
fn test_kernel_builder_defaults() {
    let builder = KernelBuilder::new();
    assert_eq!(builder.config(), &KernelConfig::default());
}

#[test]
fn test_kernel_builder_sets_fields() {
    let builder = KernelBuilder::new()
        .discipline(Discipline::Priority)
        .quantum(4)
        .reorder(ReorderPolicy::EveryDispatch)
        .resources(2, 512)
        .time_unit(Duration::from_millis(5))
        .demo(7, Duration::from_millis(1));

    let cfg = builder.config();
    assert_eq!(cfg.discipline, Discipline::Priority);
    assert_eq!(cfg.quantum, 4);
    assert_eq!(cfg.reorder, ReorderPolicy::EveryDispatch);
    assert_eq!(cfg.cpu_total, 2);
    assert_eq!(cfg.mem_total_mb, 512);
    assert_eq!(cfg.time_unit_ms, 5);
    assert_eq!(cfg.demo_items, 7);
    assert_eq!(cfg.demo_pause_ms, 1);
}

#[test]
fn test_kernel_builder_build() {
    let kernel = KernelBuilder::new().resources(2, 1024).build().unwrap();
    let snapshot = kernel.resource_snapshot();
    assert_eq!(snapshot.cpu_total, 2);
    assert_eq!(snapshot.cpu_free, 2);
    assert_eq!(snapshot.mem_free, 1024);
}

#[test]
fn test_kernel_builder_build_with_components() {
    let kernel = KernelBuilder::from_config(KernelConfig::new(Discipline::Sjf))
        .build_with(InMemoryMailbox::new(), ThreadSpawner)
        .unwrap();
    assert_eq!(kernel.discipline(), Discipline::Sjf);
}

#[test]
fn test_kernel_builder_rejects_invalid() {
    assert!(KernelBuilder::new().quantum(0).build().is_err());
}
