use crate::utils::test_utils::RecordingTracer;
use crate::{DecimalSort, SortError};

#[test]
pub fn test_lsd_scenario() {
    let mut inputs = vec![88, 410, 1772, 20];
    inputs.radix_sort_lsd().unwrap();

    assert_eq!(inputs, vec![20, 88, 410, 1772]);
}

#[test]
pub fn test_lexicographic_scenario() {
    let inputs = vec![500, 1345, 13, 459, 44, 999];
    let sorted = inputs.lexicographic_sort().unwrap();

    assert_eq!(sorted, vec![13, 1345, 44, 459, 500, 999]);
}

#[test]
pub fn test_msd_scenario() {
    let mut inputs = vec![500, 1345, 13, 459, 44, 999];
    inputs.radix_sort_msd().unwrap();

    assert_eq!(inputs, vec![13, 44, 459, 500, 999, 1345]);
}

#[test]
pub fn test_all_equal() {
    let mut lsd = vec![7u32, 7, 7];
    lsd.radix_sort_lsd().unwrap();
    assert_eq!(lsd, vec![7, 7, 7]);

    let mut msd = vec![7u32, 7, 7];
    msd.radix_sort_msd().unwrap();
    assert_eq!(msd, vec![7, 7, 7]);

    assert_eq!(vec![7u32, 7, 7].lexicographic_sort().unwrap(), vec![7, 7, 7]);
}

#[test]
pub fn test_empty_and_single() {
    let mut empty: Vec<u64> = vec![];
    empty.radix_sort_lsd().unwrap();
    empty.radix_sort_msd().unwrap();
    assert!(empty.is_empty());
    assert!(empty.lexicographic_sort().unwrap().is_empty());

    let mut single = vec![1772u64];
    single.radix_sort_lsd().unwrap();
    single.radix_sort_msd().unwrap();
    assert_eq!(single, vec![1772]);
    assert_eq!(single.lexicographic_sort().unwrap(), vec![1772]);
}

#[test]
pub fn test_negative_keys_are_rejected() {
    let mut inputs = vec![5i64, 3, -2, 8];
    let expected = Err(SortError::InvalidInput {
        index: 2,
        value: "-2".to_string(),
    });

    assert_eq!(inputs.radix_sort_lsd(), expected);
    assert_eq!(inputs.radix_sort_msd(), expected);
    assert_eq!(inputs.lexicographic_sort().map(|_| ()), expected);

    // Rejected input is left as it was.
    assert_eq!(inputs, vec![5, 3, -2, 8]);
}

#[test]
pub fn test_error_message() {
    let err = vec![-1i8].radix_sort_msd().unwrap_err();
    assert_eq!(err.to_string(), "invalid input at index 0: -1 is negative");
}

#[test]
pub fn test_slices() {
    let mut inputs = [3u16, 100, 20, 1];
    inputs[1..].radix_sort_msd().unwrap();
    assert_eq!(inputs, [3, 1, 20, 100]);

    inputs[..].radix_sort_lsd().unwrap();
    assert_eq!(inputs, [1, 3, 20, 100]);
}

#[test]
pub fn test_builder_tracer() {
    let mut inputs = vec![88u32, 410, 1772, 20];
    let tracer = RecordingTracer::new();

    inputs
        .decimal_sort_builder()
        .with_tracer(&tracer)
        .lsd()
        .unwrap();

    assert_eq!(inputs, vec![20, 88, 410, 1772]);
    assert_eq!(tracer.passes.borrow().len(), 4);
    assert!(tracer.partitions.borrow().is_empty());

    let sorted = inputs
        .decimal_sort_builder()
        .with_tracer(&tracer)
        .lexicographic()
        .unwrap();

    assert_eq!(sorted, vec![1772, 20, 410, 88]);
    assert!(!tracer.partitions.borrow().is_empty());
}

#[test]
pub fn test_builder_log_tracer() {
    let mut inputs = vec![500u64, 1345, 13, 459, 44, 999];
    inputs
        .decimal_sort_builder()
        .with_log_tracer()
        .msd()
        .unwrap();

    assert_eq!(inputs, vec![13, 44, 459, 500, 999, 1345]);
}
