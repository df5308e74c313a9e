//! Advanced array operations: random reordering, sorting, zipping,
//! flattening and set-like combination of sequences.

use super::filtering::{filter, reject, uniq};
use super::selection::contains;
use super::transform::map;
use crate::capabilities::Property;
use crate::collection::Collection;
use crate::nested::Nested;
use rand::Rng;
use std::cmp::Ordering;

/// A uniformly random permutation of `sequence`, leaving the input untouched
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// [`shuffle`] driven by a caller-supplied random source
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    // Fisher-Yates: position i receives a uniform pick from 0..=i.
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Elements ordered ascending by `iteratee(element)`, stable for equal keys.
///
/// Keys that cannot be compared even with themselves (NaN) sort last.
pub fn sort_by<C, K, F>(collection: &C, mut iteratee: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    let decorated = map(collection, |value| (iteratee(value), value));
    sort_decorated(decorated, |a, b| total_cmp(a, b))
}

/// Elements ordered ascending by their `property`; elements lacking it sort last
pub fn sort_by_property<C>(collection: &C, property: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Property,
    <C::Item as Property>::Value: PartialOrd,
{
    let decorated = map(collection, |value| (value.property(property), value));
    sort_decorated(decorated, |a, b| match (a, b) {
        (Some(a), Some(b)) => total_cmp(*a, *b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

fn sort_decorated<T, K, F>(mut decorated: Vec<(K, &T)>, compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&K, &K) -> Ordering,
{
    decorated.sort_by(|(a, _), (b, _)| compare(a, b));
    decorated.into_iter().map(|(_, value)| value.clone()).collect()
}

fn total_cmp<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    let comparable = |k: &K| k.partial_cmp(k).is_some();
    match (comparable(a), comparable(b)) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Tuples of same-index elements, as long as the longest input; `None` pads shorter inputs
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// [`zip`] for two sequences of different element types
pub fn zip_pair<A, B>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// Every leaf of `nested`, depth-first and left to right
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = vec![nested.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Leaf(value)) => flat.push(value.clone()),
            Some(Nested::List(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    flat
}

/// Values present in every input, once each, in first-input order
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let candidates = uniq(head.as_ref());
    filter(&candidates, |value| {
        rest.iter().all(|other| contains(other.as_ref(), value))
    })
}

/// Elements of `sequence` found in none of `others`, duplicates kept
pub fn difference<T, S>(sequence: &[T], others: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    reject(sequence, |value| {
        others.iter().any(|other| contains(other.as_ref(), value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_is_permutation_and_leaves_input() {
        let original: Vec<i32> = (0..50).collect();
        let snapshot = original.clone();
        let mut shuffled = shuffle(&original);
        assert_eq!(original, snapshot);
        shuffled.sort();
        assert_eq!(shuffled, snapshot);
    }

    #[test]
    fn test_shuffle_with_seed_is_reproducible() {
        let values: Vec<u8> = (0..20).collect();
        let a = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
        let b = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a, values);
    }

    #[test]
    fn test_shuffle_small_inputs() {
        assert!(shuffle::<i32>(&[]).is_empty());
        assert_eq!(shuffle(&[9]), vec![9]);
    }

    #[test]
    fn test_shuffle_position_distribution_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = [0usize, 1, 2, 3];
        let trials = 8000;
        let mut counts = [[0usize; 4]; 4];
        for _ in 0..trials {
            for (position, value) in shuffle_with(&values, &mut rng).into_iter().enumerate() {
                counts[value][position] += 1;
            }
        }
        let expected = trials / values.len();
        for row in counts {
            for count in row {
                assert!(count.abs_diff(expected) < expected / 10, "skewed count {count}");
            }
        }
    }

    #[test]
    fn test_sort_by_iterator_is_stable() {
        let words = ["bb", "a", "cc", "d", "eee"];
        assert_eq!(sort_by(&words, |w| w.len()), vec!["a", "d", "bb", "cc", "eee"]);
    }

    #[test]
    fn test_sort_by_floats_puts_nan_last() {
        let values = [3.0, f64::NAN, 1.0, 2.0];
        let sorted = sort_by(&values, |v| *v);
        assert_eq!(&sorted[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted[3].is_nan());
    }

    #[test]
    fn test_sort_by_property() {
        let mut curly = HashMap::new();
        curly.insert("age".to_string(), 50);
        let mut moe = HashMap::new();
        moe.insert("age".to_string(), 30);
        let shemp: HashMap<String, i32> = HashMap::new();

        let sorted = sort_by_property(&[curly.clone(), shemp.clone(), moe.clone()], "age");
        assert_eq!(sorted, vec![moe, curly, shemp]);
    }

    #[test]
    fn test_sort_by_does_not_mutate_input() {
        let values = vec![3, 1, 2];
        assert_eq!(sort_by(&values, |v| *v), vec![1, 2, 3]);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_zip_pads_with_none() {
        let zipped = zip(&[vec![1, 2, 3], vec![4], vec![]]);
        assert_eq!(
            zipped,
            vec![
                vec![Some(1), Some(4), None],
                vec![Some(2), None, None],
                vec![Some(3), None, None],
            ]
        );
        assert!(zip::<i32, Vec<i32>>(&[]).is_empty());
    }

    #[test]
    fn test_zip_pair_mixed_types() {
        assert_eq!(
            zip_pair(&["a", "b", "c"], &[1, 2]),
            vec![
                (Some("a"), Some(1)),
                (Some("b"), Some(2)),
                (Some("c"), None),
            ]
        );
    }

    #[test]
    fn test_flatten_nested_literal() {
        let tree: Vec<Nested<i32>> = nested![1, [2, [3, [4]], 5]];
        assert_eq!(flatten(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_json_and_empty_lists() {
        let tree = Nested::from(json!([[], [[]], "a", [{"b": [1]}]]));
        let Nested::List(items) = tree else {
            panic!("expected a list");
        };
        assert_eq!(flatten(&items), vec![Value::from("a"), json!({"b": [1]})]);
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let mut tree = Nested::Leaf(7);
        for _ in 0..100_000 {
            tree = Nested::List(vec![tree]);
        }
        let items = vec![tree];
        assert_eq!(flatten(&items), vec![7]);
        // Unwind the tower iteratively; the derived Drop would recurse.
        let mut pending = items;
        while let Some(node) = pending.pop() {
            if let Nested::List(children) = node {
                pending.extend(children);
            }
        }
    }

    #[test]
    fn test_intersection() {
        assert_eq!(
            intersection(&[vec![1, 2, 3, 2], vec![101, 2, 1, 10], vec![2, 1]]),
            vec![1, 2]
        );
        assert!(intersection::<i32, Vec<i32>>(&[]).is_empty());
        assert_eq!(intersection(&[vec!["x", "x"]]), vec!["x"]);
    }

    #[test]
    fn test_difference_keeps_duplicates() {
        assert_eq!(
            difference(&[1, 2, 3, 4, 2, 5], &[vec![2, 30, 40], vec![1, 11, 111]]),
            vec![3, 4, 5]
        );
        assert_eq!(difference(&[1, 1, 3], &[vec![2]]), vec![1, 1, 3]);
        assert_eq!(difference::<i32, Vec<i32>>(&[4, 4], &[]), vec![4, 4]);
    }
}
