use crate::digits::{lsd_digit, RADIX};
use crate::tracer::{Algorithm, Tracer};
use crate::utils::*;
use crate::DecimalKey;

/// Least-significant-digit first radix sort over base-10 digits.
///
/// Each pass is a stable counting sort on the digit selected by the current weight.
/// The sort finishes after the first pass in which no key has a non-zero digit above
/// that weight, so the number of passes equals the digit count of the largest key
/// (at least one).
pub fn lsd_sort<T>(bucket: &mut [T], tracer: &dyn Tracer<T>)
where
    T: DecimalKey,
{
    if bucket.len() < 2 {
        return;
    }

    let mut tmp_bucket = bucket.to_vec();
    let mut weight: u128 = 1;
    let mut pass = 0;

    loop {
        let (counts, higher_digits) = get_lsd_counts(bucket, weight);
        scatter_by_slot(bucket, &mut tmp_bucket, &counts, |v| {
            lsd_digit(v.magnitude(), weight)
        });

        pass += 1;
        tracer.on_pass(Algorithm::Lsd, pass, bucket);

        if !higher_digits {
            break;
        }

        // Some key is at least `weight * RADIX`, so this cannot overflow.
        weight *= RADIX as u128;
    }
}
