//! Selection and search

use super::iteration::each;
use super::transform::reduce;
use crate::collection::Collection;

/// The first element, or `None` for an empty sequence
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `min(n, len)` elements, in order
pub fn first_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[..n.min(sequence.len())].to_vec()
}

/// The last element, or `None` for an empty sequence
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `n` elements, in order; the whole sequence when `n >= len`
pub fn last_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    let start = sequence.len().saturating_sub(n);
    sequence[start..].to_vec()
}

/// Lowest index holding a value equal to `target`
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    each(sequence, |item, key, _| {
        if result.is_none() && item == target {
            result = key.as_index();
        }
    });
    result
}

/// Whether any element of `collection` equals `target`
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[test]
    fn test_first_and_last_single() {
        assert_eq!(first(&[1, 2, 3]), Some(&1));
        assert_eq!(last(&[1, 2, 3]), Some(&3));
        assert_eq!(first::<i32>(&[]), None);
        assert_eq!(last::<i32>(&[]), None);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(3, vec![1, 2, 3])]
    #[case(5, vec![1, 2, 3])]
    fn test_first_n(#[case] n: usize, #[case] expected: Vec<i32>) {
        assert_eq!(first_n(&[1, 2, 3], n), expected);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![2, 3])]
    #[case(3, vec![1, 2, 3])]
    #[case(5, vec![1, 2, 3])]
    fn test_last_n(#[case] n: usize, #[case] expected: Vec<i32>) {
        assert_eq!(last_n(&[1, 2, 3], n), expected);
    }

    #[test]
    fn test_index_of_reports_first_match() {
        let values = [10, 20, 10, 30];
        assert_eq!(index_of(&values, &10), Some(0));
        assert_eq!(index_of(&values, &30), Some(3));
        assert_eq!(index_of(&values, &99), None);
    }

    #[test]
    fn test_index_of_is_strict() {
        let values = vec!["1".to_string(), "2".to_string()];
        assert_eq!(index_of(&values, &"2".to_string()), Some(1));
        assert_eq!(index_of(&values, &"02".to_string()), None);
    }

    #[test]
    fn test_contains_sequence_and_mapping() {
        assert!(contains(&[4, 5, 6], &5));
        assert!(!contains(&[4, 5, 6], &7));
        assert!(!contains(&Vec::<i32>::new(), &7));

        let mut map = HashMap::new();
        map.insert("a".to_string(), "x");
        assert!(contains(&map, &"x"));
        assert!(!contains(&map, &"a"));
    }
}
