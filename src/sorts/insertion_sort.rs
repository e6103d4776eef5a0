use crate::tracer::{Algorithm, Tracer};

/// Shifts each element left until its predecessor is no larger. Linear on input
/// that is already sorted.
pub fn insertion_sort<T>(bucket: &mut [T], tracer: &dyn Tracer<T>)
where
    T: Ord,
{
    if bucket.len() < 2 {
        return;
    }

    for current in 1..bucket.len() {
        for shifting in (1..=current).rev() {
            if bucket[shifting] < bucket[shifting - 1] {
                bucket.swap(shifting, shifting - 1);
            } else {
                break;
            }
        }

        tracer.on_pass(Algorithm::Insertion, current, bucket);
    }
}
