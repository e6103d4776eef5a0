//! Base-10 digit extraction.
//!
//! The LSD and MSD sorts deliberately use different extractors. `lsd_digit` treats
//! positions past the end of a number as an implicit zero, while `digit_at` reports
//! them as absent so the caller can route the number into a priority bucket.

pub const RADIX: usize = 10;

#[inline]
pub const fn pow10(exp: usize) -> u128 {
    10u128.pow(exp as u32)
}

/// Digit selected by `weight` (1, 10, 100, ...), zero past the end of the number.
#[inline]
pub const fn lsd_digit(value: u128, weight: u128) -> usize {
    ((value / weight) % 10) as usize
}

/// Number of decimal digits in `value`. Zero has no digits.
#[inline]
pub const fn digit_count(value: u128) -> usize {
    let mut count = 0;
    let mut rest = value;

    while rest != 0 {
        count += 1;
        rest /= 10;
    }

    count
}

/// Digit at `position`, counted from the least-significant end, or `None` if the
/// number is too short to have one.
#[inline]
pub const fn digit_at(value: u128, position: usize) -> Option<usize> {
    if position >= digit_count(value) {
        return None;
    }

    Some(((value / pow10(position)) % 10) as usize)
}

/// Length of the decimal string of `value`; "0" is one character long.
#[inline]
pub const fn decimal_len(value: u128) -> usize {
    match digit_count(value) {
        0 => 1,
        n => n,
    }
}

/// The `position`-th character of the decimal string of `value`, reading left to
/// right, or `None` once the string is exhausted.
#[inline]
pub const fn lexicographic_digit(value: u128, position: usize) -> Option<usize> {
    let len = decimal_len(value);
    if position >= len {
        return None;
    }

    Some(((value / pow10(len - 1 - position)) % 10) as usize)
}
