use crate::tracer::{Algorithm, Tracer};

/// Repeatedly swaps adjacent out-of-order elements. After each pass the largest
/// remaining element has settled at the end, and a pass without swaps ends the sort.
pub fn bubble_sort<T>(bucket: &mut [T], tracer: &dyn Tracer<T>)
where
    T: Ord,
{
    if bucket.len() < 2 {
        return;
    }

    for (pass, end) in (1..bucket.len()).rev().enumerate() {
        let mut swapped = false;

        for current in 0..end {
            if bucket[current] > bucket[current + 1] {
                bucket.swap(current, current + 1);
                swapped = true;
            }
        }

        tracer.on_pass(Algorithm::Bubble, pass + 1, bucket);

        if !swapped {
            return;
        }
    }
}
