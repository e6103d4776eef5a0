use crate::digits::{lsd_digit, RADIX};
use crate::{DecimalKey, SortError};
use log::warn;

#[inline]
pub fn get_prefix_sums<const N: usize>(counts: &[usize; N]) -> [usize; N] {
    let mut sums = [0usize; N];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// Counts the digit selected by `weight` for every key, and reports whether any key
/// still has a non-zero digit above that weight.
#[inline]
pub fn get_lsd_counts<T>(bucket: &[T], weight: u128) -> ([usize; RADIX], bool)
where
    T: DecimalKey,
{
    let mut counts = [0usize; RADIX];
    let mut higher_digits = false;

    for val in bucket {
        let value = val.magnitude();
        counts[lsd_digit(value, weight)] += 1;

        if value / weight >= RADIX as u128 {
            higher_digits = true;
        }
    }

    (counts, higher_digits)
}

/// Stable out-of-place distribution of `bucket` into the slots given by `slot_of`,
/// using `tmp_bucket` as scratch. `bucket` holds the result on return.
#[inline]
pub fn scatter_by_slot<T, F, const N: usize>(
    bucket: &mut [T],
    tmp_bucket: &mut [T],
    counts: &[usize; N],
    slot_of: F,
) where
    T: Copy,
    F: Fn(&T) -> usize,
{
    let mut prefix_sums = get_prefix_sums(counts);

    for val in bucket.iter() {
        let sum = &mut prefix_sums[slot_of(val)];
        tmp_bucket[*sum] = *val;
        *sum += 1;
    }

    bucket.copy_from_slice(tmp_bucket);
}

/// Borrows consecutive sub-slices of `bucket` with the given lengths.
pub fn split_by_counts<'a, T>(bucket: &'a [T], counts: &[usize]) -> Vec<&'a [T]> {
    let mut rest = bucket;
    let mut out = Vec::with_capacity(counts.len());

    for c in counts {
        let (l, r) = rest.split_at(*c);
        out.push(l);
        rest = r;
    }

    out
}

/// Rejects the first negative key, leaving `bucket` untouched.
pub fn validate_keys<T>(bucket: &[T]) -> Result<(), SortError>
where
    T: DecimalKey,
{
    match bucket.iter().position(|v| v.is_negative()) {
        Some(index) => {
            warn!("refusing to sort: negative key {} at index {}", bucket[index], index);

            Err(SortError::InvalidInput {
                index,
                value: bucket[index].to_string(),
            })
        }
        None => Ok(()),
    }
}
