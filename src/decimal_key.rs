use std::fmt::{Debug, Display};

/// A key that can be split into base-10 digits.
///
/// Digits are always taken from the magnitude of the value. Negative values have no
/// meaningful decimal digits here, so the sorts reject them up front via
/// [`DecimalKey::is_negative`] before any digit is extracted.
pub trait DecimalKey: Copy + Ord + Debug + Display {
    fn is_negative(&self) -> bool;

    fn magnitude(&self) -> u128;
}

macro_rules! unsigned_decimal_key {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                #[inline]
                fn is_negative(&self) -> bool {
                    false
                }

                #[inline]
                fn magnitude(&self) -> u128 {
                    *self as u128
                }
            }
        )*
    };
}

macro_rules! signed_decimal_key {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn magnitude(&self) -> u128 {
                    self.unsigned_abs() as u128
                }
            }
        )*
    };
}

unsigned_decimal_key!(u8, u16, u32, u64, u128, usize);
signed_decimal_key!(i8, i16, i32, i64, i128, isize);
