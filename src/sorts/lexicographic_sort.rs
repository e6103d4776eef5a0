use crate::digits::{lexicographic_digit, RADIX};
use crate::tracer::Tracer;
use crate::utils::*;
use crate::DecimalKey;
use arbitrary_chunks::ArbitraryChunks;

/// Slot 0 collects exhausted strings, slots 1..=10 hold characters '0'..='9'.
const SLOTS: usize = RADIX + 1;

/// Sorts keys by the lexicographic order of their decimal strings, so 13 and 1345
/// come before 2. Returns a new vector and leaves `bucket` untouched.
pub fn lexicographic_sort<T>(bucket: &[T], tracer: &dyn Tracer<T>) -> Vec<T>
where
    T: DecimalKey,
{
    let mut sorted = bucket.to_vec();
    if sorted.len() < 2 {
        return sorted;
    }

    let mut tmp_bucket = sorted.clone();
    lexicographic_sort_bucket(&mut sorted, &mut tmp_bucket, 0, tracer);

    sorted
}

fn lexicographic_sort_bucket<T>(
    bucket: &mut [T],
    tmp_bucket: &mut [T],
    position: usize,
    tracer: &dyn Tracer<T>,
) where
    T: DecimalKey,
{
    if bucket.len() < 2 {
        return;
    }

    let slot_of = |v: &T| match lexicographic_digit(v.magnitude(), position) {
        Some(digit) => digit + 1,
        None => 0,
    };

    let mut counts = [0usize; SLOTS];
    bucket.iter().for_each(|v| counts[slot_of(v)] += 1);

    if counts[0] == bucket.len() {
        return;
    }

    scatter_by_slot(bucket, tmp_bucket, &counts, slot_of);

    let parts = split_by_counts(bucket, &counts);
    tracer.on_partition(position, parts[0], &parts[1..]);
    drop(parts);

    // Exhausted strings in this branch share every character, so they are equal.
    bucket
        .arbitrary_chunks_mut(&counts)
        .zip(tmp_bucket.arbitrary_chunks_mut(&counts))
        .skip(1)
        .for_each(|(c, t)| lexicographic_sort_bucket(c, t, position + 1, tracer));
}
