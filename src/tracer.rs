use log::debug;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Lsd,
}

/// Observes intermediate state while a sort runs.
///
/// `on_pass` receives the whole sequence after each completed pass of a pass-based
/// sort. `on_partition` receives the buckets produced by one MSD partition step:
/// the priority bucket and the ten digit buckets in order. For the lexicographic
/// sort the priority bucket holds the keys whose decimal string is exhausted.
pub trait Tracer<T> {
    fn on_pass(&self, _algorithm: Algorithm, _pass: usize, _state: &[T]) {}

    fn on_partition(&self, _depth: usize, _priority: &[T], _buckets: &[&[T]]) {}
}

pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {}

/// Forwards every event to the `log` facade at debug level.
pub struct LogTracer;

impl<T> Tracer<T> for LogTracer
where
    T: Debug,
{
    fn on_pass(&self, algorithm: Algorithm, pass: usize, state: &[T]) {
        debug!("{:?} pass {}: {:?}", algorithm, pass, state);
    }

    fn on_partition(&self, depth: usize, priority: &[T], buckets: &[&[T]]) {
        debug!("depth {} priority bucket: {:?}", depth, priority);
        debug!("depth {} buckets: {:?}", depth, buckets);
    }
}
