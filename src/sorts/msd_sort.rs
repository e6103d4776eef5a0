use crate::digits::{digit_at, digit_count, RADIX};
use crate::tracer::Tracer;
use crate::utils::*;
use crate::DecimalKey;
use arbitrary_chunks::ArbitraryChunks;

/// Slot 0 is the priority bucket, slots 1..=10 hold digits 0..=9.
const SLOTS: usize = RADIX + 1;

/// Most-significant-digit first radix sort producing numeric order.
///
/// Keys are never padded with leading zeros. At each column, keys too short to have a
/// digit there go to a priority bucket ahead of the ten digit buckets, since they are
/// smaller than anything still carrying a digit in that column. Every bucket,
/// the priority bucket included, is then sorted on the next column down.
pub fn msd_sort<T>(bucket: &mut [T], tracer: &dyn Tracer<T>)
where
    T: DecimalKey,
{
    if bucket.len() < 2 {
        return;
    }

    let columns = bucket
        .iter()
        .map(|v| digit_count(v.magnitude()))
        .max()
        .unwrap_or(0);

    let mut tmp_bucket = bucket.to_vec();
    msd_sort_bucket(bucket, &mut tmp_bucket, columns, 0, tracer);
}

fn msd_sort_bucket<T>(
    bucket: &mut [T],
    tmp_bucket: &mut [T],
    columns: usize,
    depth: usize,
    tracer: &dyn Tracer<T>,
) where
    T: DecimalKey,
{
    if bucket.len() < 2 || columns == 0 {
        return;
    }

    let position = columns - 1;
    let slot_of = |v: &T| match digit_at(v.magnitude(), position) {
        Some(digit) => digit + 1,
        None => 0,
    };

    let mut counts = [0usize; SLOTS];
    bucket.iter().for_each(|v| counts[slot_of(v)] += 1);

    scatter_by_slot(bucket, tmp_bucket, &counts, slot_of);

    let parts = split_by_counts(bucket, &counts);
    tracer.on_partition(depth, parts[0], &parts[1..]);
    drop(parts);

    bucket
        .arbitrary_chunks_mut(&counts)
        .zip(tmp_bucket.arbitrary_chunks_mut(&counts))
        .for_each(|(c, t)| msd_sort_bucket(c, t, position, depth + 1, tracer));
}
