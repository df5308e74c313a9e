//! Core iteration

use crate::collection::{Collection, Key};

/// Call `iterator(value, key, collection)` for every element of `collection`.
///
/// Sequences are visited by ascending index; mappings once per key in the
/// mapping's own order. Nothing is skipped or revisited.
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, Key<'a>, &'a C),
{
    collection.each(iterator);
}
