/// Top-down merge sort. Returns a new, stably sorted vector.
pub fn merge_sort<T>(bucket: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if bucket.len() < 2 {
        return bucket.to_vec();
    }

    let (left, right) = bucket.split_at(bucket.len() / 2);

    merge(merge_sort(left), merge_sort(right))
}

/// Merges two sorted sequences into one. On ties the element from `first` is
/// emitted first.
pub fn merge<T, A, B>(first: A, second: B) -> Vec<T>
where
    T: Ord,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let mut first = first.into_iter().peekable();
    let mut second = second.into_iter().peekable();
    let mut merged = Vec::with_capacity(first.size_hint().0 + second.size_hint().0);

    loop {
        let take_first = match (first.peek(), second.peek()) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_first { first.next() } else { second.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use crate::sorts::merge_sort::{merge, merge_sort};
    use crate::utils::test_utils::gen_input_set;

    #[test]
    pub fn test_merge_sort() {
        for inputs in gen_input_set(9) {
            let mut expected = inputs.clone();
            expected.sort_unstable();

            assert_eq!(merge_sort(&inputs), expected);
        }
    }

    #[test]
    pub fn test_merge_sort_small() {
        assert_eq!(merge_sort(&[7, 2, 6, 3, 9]), vec![2, 3, 6, 7, 9]);
        assert_eq!(merge_sort::<u8>(&[]), Vec::<u8>::new());
    }

    #[test]
    pub fn test_merge() {
        let first = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let second = vec![1, 3, 4, 5, 5, 6, 7, 7];

        assert_eq!(
            merge(first, second),
            vec![1, 1, 2, 3, 3, 4, 4, 5, 5, 5, 6, 6, 7, 7, 7, 8]
        );
    }

    #[test]
    pub fn test_merge_with_empty_side() {
        assert_eq!(merge(Vec::new(), vec![1, 2]), vec![1, 2]);
        assert_eq!(merge(vec![3, 4], Vec::new()), vec![3, 4]);
        assert_eq!(merge(Vec::<u8>::new(), Vec::new()), Vec::<u8>::new());
    }

    #[test]
    pub fn test_merge_is_stable() {
        // ByKey orders only by the key, so ties expose which side came first.
        let first = vec![(1, 'a'), (2, 'a')];
        let second = vec![(1, 'b'), (2, 'b')];
        let merged: Vec<(u8, char)> = merge(
            first.into_iter().map(|(k, s)| ByKey(k, s)),
            second.into_iter().map(|(k, s)| ByKey(k, s)),
        )
        .into_iter()
        .map(|ByKey(k, s)| (k, s))
        .collect();

        assert_eq!(merged, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[derive(Debug)]
    struct ByKey(u8, char);

    impl PartialEq for ByKey {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for ByKey {}

    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for ByKey {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}
