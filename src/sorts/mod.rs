mod bubble_sort;
mod insertion_sort;
mod lexicographic_sort;
mod lsd_sort;
mod merge_sort;
mod msd_sort;
mod selection_sort;

pub use bubble_sort::*;
pub use insertion_sort::*;
pub use lexicographic_sort::*;
pub use lsd_sort::*;
pub use merge_sort::*;
pub use msd_sort::*;
pub use selection_sort::*;
