//! Filtering

use super::composition::negate;
use super::iteration::each;
use super::selection::contains;
use crate::collection::Collection;

/// Every element for which `predicate` holds, in visitation order
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut filtered = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            filtered.push(value.clone());
        }
    });
    filtered
}

/// Every element for which `predicate` does not hold
pub fn reject<C, P>(collection: &C, predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, negate::<C::Item, P>(predicate))
}

/// First occurrence of each distinct value, in order of first appearance
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + PartialEq,
{
    let mut unique: Vec<C::Item> = Vec::new();
    each(collection, |value, _, _| {
        if !contains(unique.as_slice(), value) {
            unique.push(value.clone());
        }
    });
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn test_filter_keeps_order() {
        assert_eq!(filter(&[1, 2, 3, 4, 5, 6], is_even), vec![2, 4, 6]);
        assert_eq!(filter(&Vec::<i32>::new(), is_even), Vec::<i32>::new());
    }

    #[test]
    fn test_filter_mapping_values() {
        let mut stock = IndexMap::new();
        stock.insert("apples".to_string(), 0);
        stock.insert("pears".to_string(), 4);
        stock.insert("plums".to_string(), 2);
        assert_eq!(filter(&stock, |count| *count > 0), vec![4, 2]);
    }

    #[test]
    fn test_reject_is_complement() {
        assert_eq!(reject(&[1, 2, 3, 4, 5, 6], is_even), vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let values = vec![1, 2, 3];
        let _ = filter(&values, is_even);
        let _ = reject(&values, is_even);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_uniq_keeps_first_occurrences() {
        assert_eq!(uniq(&[1, 2, 1, 3, 1, 4, 2]), vec![1, 2, 3, 4]);
        assert_eq!(uniq(&["a", "a", "a"]), vec!["a"]);
        assert!(uniq(&Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_uniq_consecutive_duplicates() {
        assert_eq!(uniq(&[7, 7, 7, 8, 8]), vec![7, 8]);
    }
}
