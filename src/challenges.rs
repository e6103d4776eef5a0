//! Small list exercises built on top of the comparison sorts.

use crate::sorts::insertion_sort;
use crate::tracer::NoopTracer;
use itertools::Itertools;

/// Moves every element equal to `value` to the end of `items`, keeping the relative
/// order of everything else.
///
/// Scans from the back; each match is bubbled right until it meets the block of
/// matches already collected at the end.
pub fn move_to_end<T>(items: &mut [T], value: &T)
where
    T: PartialEq,
{
    if items.len() < 2 {
        return;
    }

    for search in (0..items.len() - 1).rev() {
        if items[search] != *value {
            continue;
        }

        let mut moving = search;
        while moving < items.len() - 1 && items[moving + 1] != *value {
            items.swap(moving, moving + 1);
            moving += 1;
        }
    }
}

/// The largest value occurring at least twice in `items`, if any.
pub fn largest_duplicate<T>(items: &[T]) -> Option<T>
where
    T: Ord + Clone,
{
    let mut sorted = items.to_vec();
    insertion_sort(&mut sorted, &NoopTracer);

    sorted
        .iter()
        .rev()
        .tuple_windows()
        .find(|(a, b)| a == b)
        .map(|(a, _)| a.clone())
}

/// Reverses `items` in place by swapping from both ends towards the middle.
pub fn reverse<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = items.len() - 1;

    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}
