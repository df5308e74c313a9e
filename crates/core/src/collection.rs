//! The collection abstraction every traversal operation is written against.
//!
//! A collection is either an ordered sequence (visited by ascending index) or
//! a keyed mapping (visited once per key, in the mapping's own order). Both
//! shapes share a single entry point, [`Collection::each`], and report where
//! a value came from through [`Key`].

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

/// Position of a value inside the collection being traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based index into an ordered sequence
    Index(usize),
    /// Property name of a keyed mapping
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// The index, when the key came from a sequence
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// The property name, when the key came from a mapping
    pub fn as_name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

// Indices render as decimal strings so a sequence can feed a merge.
impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// A sequence or mapping that can be visited element by element
pub trait Collection {
    /// Element type
    type Item;

    /// Call `iterator(value, key, collection)` exactly once for every element
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, Key<'a>, &'a Self);

    /// Number of elements
    fn len(&self) -> usize {
        let mut count = 0;
        self.each(|_, _, _| count += 1);
        count
    }

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! sequence_collection {
    ($($ty:ty => [$($generics:tt)*]),+ $(,)?) => {$(
        impl<$($generics)*> Collection for $ty {
            type Item = T;

            fn each<'a, F>(&'a self, mut iterator: F)
            where
                F: FnMut(&'a T, Key<'a>, &'a Self),
            {
                for (index, value) in self.iter().enumerate() {
                    iterator(value, Key::Index(index), self);
                }
            }

            fn len(&self) -> usize {
                self.iter().len()
            }
        }
    )+};
}

sequence_collection! {
    [T] => [T],
    [T; N] => [T, const N: usize],
    Vec<T> => [T],
    VecDeque<T> => [T],
}

macro_rules! mapping_collection {
    ($($ty:ty => [$($generics:tt)*]),+ $(,)?) => {$(
        impl<$($generics)*> Collection for $ty {
            type Item = V;

            fn each<'a, F>(&'a self, mut iterator: F)
            where
                F: FnMut(&'a V, Key<'a>, &'a Self),
            {
                for (name, value) in self.iter() {
                    iterator(value, Key::Name(name.as_str()), self);
                }
            }

            fn len(&self) -> usize {
                self.iter().len()
            }
        }
    )+};
}

mapping_collection! {
    HashMap<String, V, S> => [V, S: BuildHasher],
    IndexMap<String, V, S> => [V, S: BuildHasher],
    BTreeMap<String, V> => [V],
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Value, Key<'a>, &'a Self),
    {
        for (name, value) in self {
            iterator(value, Key::Name(name.as_str()), self);
        }
    }

    fn len(&self) -> usize {
        Map::len(self)
    }
}
