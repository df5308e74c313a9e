//! Property-based testing utilities for the collection operations
//!
//! Strategies here are shared by this crate's unit tests and by downstream
//! property suites (enable the `testing` feature).

use crate::nested::Nested;
use indexmap::IndexMap;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::{hash_map, vec};
    use proptest::string::string_regex;

    /// Short sequences of small integers, so duplicates are common
    pub fn small_int_sequence() -> impl Strategy<Value = Vec<i32>> {
        vec(-20..20i32, 0..40)
    }

    /// Non-empty variant of [`small_int_sequence`]
    pub fn non_empty_int_sequence() -> impl Strategy<Value = Vec<i32>> {
        vec(-20..20i32, 1..40)
    }

    /// Property names as they appear in mappings
    pub fn property_name() -> impl Strategy<Value = String> {
        string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
    }

    /// Insertion-ordered mappings from property names to integers
    pub fn int_mapping() -> impl Strategy<Value = IndexMap<String, i32>> {
        hash_map(property_name(), any::<i32>(), 0..12)
            .prop_map(|entries| entries.into_iter().collect::<IndexMap<_, _>>())
    }

    /// Nested integer lists up to a few levels deep
    pub fn nested_ints() -> impl Strategy<Value = Nested<i32>> {
        let leaf = any::<i32>().prop_map(Nested::Leaf);
        leaf.prop_recursive(4, 64, 6, |inner| vec(inner, 0..6).prop_map(Nested::List))
    }
}

/// Depth-first leaves, computed recursively as an independent oracle
pub fn leaves_recursive<T: Clone>(node: &Nested<T>, out: &mut Vec<T>) {
    match node {
        Nested::Leaf(value) => out.push(value.clone()),
        Nested::List(children) => {
            for child in children {
                leaves_recursive(child, out);
            }
        }
    }
}
