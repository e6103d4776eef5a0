//! # digisort
//!
//! digisort is a small collection of sorting algorithms over base-10 digits, together with
//! the classic comparison sorts they are usually taught alongside.
//!
//! ## Usage
//!
//! In the simplest case, call one of the `DecimalSort` methods on a `Vec` or slice of
//! integers:
//!
//! ```
//! use digisort::DecimalSort;
//!
//! let mut inputs = vec![88, 410, 1772, 20];
//! inputs.radix_sort_lsd().unwrap();
//! assert_eq!(inputs, vec![20, 88, 410, 1772]);
//!
//! let inputs = vec![500, 1345, 13, 459, 44, 999];
//! assert_eq!(inputs.lexicographic_sort().unwrap(), vec![13, 1345, 44, 459, 500, 999]);
//! ```
//!
//! ## Algorithms
//!
//!  * `radix_sort_lsd`: least-significant digit first, one stable counting pass per digit.
//!  * `radix_sort_msd`: most-significant digit first, numeric order. Keys too short to have
//!    a digit in the current column go to a priority bucket ahead of the digit buckets.
//!  * `lexicographic_sort`: most-significant digit first over the decimal string, so `13`
//!    sorts before `2`.
//!
//! The comparison sorts (`bubble_sort`, `selection_sort`, `insertion_sort`, `merge_sort`) and
//! the list exercises in `challenges` work on any `Ord` type.
//!
//! ## Keys
//!
//! `DecimalKey` is implemented for every primitive integer type. Signed keys are accepted,
//! but any negative key makes the radix sorts fail with `SortError::InvalidInput` before the
//! data is touched.
//!
//! ## Tracing
//!
//! Intermediate state can be observed by passing a `Tracer` to the builder:
//!
//! ```
//! use digisort::DecimalSort;
//!
//! let mut inputs = vec![500, 1345, 13, 459, 44, 999];
//! inputs
//!     .decimal_sort_builder()
//!     .with_log_tracer()
//!     .msd()
//!     .unwrap();
//! assert_eq!(inputs, vec![13, 44, 459, 500, 999, 1345]);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#[cfg(test)]
mod tests;

pub mod challenges;
mod decimal_key;
mod decimal_sort_builder;
pub mod digits;
mod error;
mod sorts;
pub mod tracer;
mod utils;

pub use decimal_key::DecimalKey;
pub use decimal_sort_builder::DecimalSortBuilder;
pub use error::SortError;
pub use sorts::{bubble_sort, insertion_sort, merge, merge_sort, selection_sort};
pub use tracer::{Algorithm, LogTracer, NoopTracer, Tracer};

pub trait DecimalSort<T> {
    /// Sorts in place in ascending numeric order, least-significant digit first.
    fn radix_sort_lsd(&mut self) -> Result<(), SortError>;

    /// Sorts in place in ascending numeric order, most-significant digit first.
    fn radix_sort_msd(&mut self) -> Result<(), SortError>;

    /// Returns a new vector ordered by the decimal strings of the keys.
    fn lexicographic_sort(&self) -> Result<Vec<T>, SortError>;

    /// Configures tracing before running one of the sorts.
    fn decimal_sort_builder(&mut self) -> DecimalSortBuilder<'_, T>;
}

impl<T> DecimalSort<T> for Vec<T>
where
    T: DecimalKey,
{
    fn radix_sort_lsd(&mut self) -> Result<(), SortError> {
        self.as_mut_slice().radix_sort_lsd()
    }

    fn radix_sort_msd(&mut self) -> Result<(), SortError> {
        self.as_mut_slice().radix_sort_msd()
    }

    fn lexicographic_sort(&self) -> Result<Vec<T>, SortError> {
        self.as_slice().lexicographic_sort()
    }

    fn decimal_sort_builder(&mut self) -> DecimalSortBuilder<'_, T> {
        DecimalSortBuilder::new(self)
    }
}

impl<T> DecimalSort<T> for [T]
where
    T: DecimalKey,
{
    fn radix_sort_lsd(&mut self) -> Result<(), SortError> {
        self.decimal_sort_builder().lsd()
    }

    fn radix_sort_msd(&mut self) -> Result<(), SortError> {
        self.decimal_sort_builder().msd()
    }

    fn lexicographic_sort(&self) -> Result<Vec<T>, SortError> {
        utils::validate_keys(self)?;

        Ok(sorts::lexicographic_sort(self, &NoopTracer))
    }

    fn decimal_sort_builder(&mut self) -> DecimalSortBuilder<'_, T> {
        DecimalSortBuilder::new(self)
    }
}
