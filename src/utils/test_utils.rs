use crate::tracer::{Algorithm, Tracer};
use nanorand::{Rng, WyRand};
use std::cell::RefCell;
use std::fmt::Debug;

/// Inputs of mixed digit counts with plenty of duplicates and shared prefixes.
pub fn gen_inputs(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = WyRand::new_seed(seed);

    (0..n)
        .map(|_| {
            let digits = rng.generate_range(0..=12u32);
            rng.generate_range(0..10u64.pow(digits))
        })
        .collect()
}

pub fn gen_input_set(seed: u64) -> Vec<Vec<u64>> {
    let inputs = gen_inputs(20_000, seed);

    vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[..2].to_vec(),
        inputs[..10].to_vec(),
        inputs[..100].to_vec(),
        inputs[..2_500].to_vec(),
        vec![0; 64],
        vec![u64::MAX; 16],
        (0..1_000).collect(),
        (0..1_000).rev().collect(),
        inputs,
    ]
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: Ord + Copy + Debug,
    F: Fn(&mut [T]),
{
    let mut inputs_clone = inputs.clone();

    sort_fn(&mut inputs);
    inputs_clone.sort_unstable();

    assert_eq!(inputs, inputs_clone);
}

pub fn sort_comparison_suite<F>(sort_fn: F)
where
    F: Fn(&mut [u64]),
{
    for seed in [1, 7, 1_000] {
        for s in gen_input_set(seed) {
            validate_sort(s, &sort_fn);
        }
    }
}

/// Keeps a copy of every event it sees.
pub struct RecordingTracer<T> {
    pub passes: RefCell<Vec<(Algorithm, usize, Vec<T>)>>,
    pub partitions: RefCell<Vec<(usize, Vec<T>, Vec<Vec<T>>)>>,
}

impl<T> RecordingTracer<T> {
    pub fn new() -> Self {
        Self {
            passes: RefCell::new(Vec::new()),
            partitions: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Tracer<T> for RecordingTracer<T>
where
    T: Clone,
{
    fn on_pass(&self, algorithm: Algorithm, pass: usize, state: &[T]) {
        self.passes
            .borrow_mut()
            .push((algorithm, pass, state.to_vec()));
    }

    fn on_partition(&self, depth: usize, priority: &[T], buckets: &[&[T]]) {
        self.partitions.borrow_mut().push((
            depth,
            priority.to_vec(),
            buckets.iter().map(|b| b.to_vec()).collect(),
        ));
    }
}
