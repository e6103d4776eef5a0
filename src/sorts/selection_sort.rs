use crate::tracer::{Algorithm, Tracer};

/// Moves the lowest remaining element into each position in turn.
pub fn selection_sort<T>(bucket: &mut [T], tracer: &dyn Tracer<T>)
where
    T: Ord,
{
    if bucket.len() < 2 {
        return;
    }

    for current in 0..bucket.len() - 1 {
        let mut lowest = current;

        for other in (current + 1)..bucket.len() {
            if bucket[other] < bucket[lowest] {
                lowest = other;
            }
        }

        if lowest != current {
            bucket.swap(lowest, current);
        }

        tracer.on_pass(Algorithm::Selection, current + 1, bucket);
    }
}
