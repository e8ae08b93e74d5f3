//! Tests for error types

use kernel_sim::core::{AppResult, KernelError};

#[test]
fn test_invalid_configuration_error() {
    let err = KernelError::InvalidConfiguration("quantum must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: quantum must be greater than 0"
    );
}

#[test]
fn test_unknown_process_error() {
    let err = KernelError::UnknownProcess(42);
    assert_eq!(format!("{}", err), "unknown process: 42");
}

#[test]
fn test_stalled_error() {
    let err = KernelError::Stalled { waiting: 2 };
    assert_eq!(
        format!("{}", err),
        "scheduler stalled: 2 ready process(es) cannot be admitted"
    );
}

#[test]
fn test_spawn_error() {
    let err = KernelError::Spawn("demo-producer: out of threads".to_string());
    assert_eq!(format!("{}", err), "spawn failed: demo-producer: out of threads");
}

#[test]
fn test_app_result_wraps_kernel_error() {
    fn build() -> AppResult<()> {
        let lookup: Result<(), KernelError> = Err(KernelError::UnknownProcess(1));
        lookup?;
        Ok(())
    }
    let err = build().unwrap_err();
    assert!(err.downcast_ref::<KernelError>().is_some());
}
