//! Object merging
//!
//! Both operations write into `target` and hand it back so calls can be
//! chained. Sources are any collections whose items fit the target; a
//! sequence contributes its stringified indices as keys.

use super::iteration::each;
use crate::capabilities::MappingMut;
use crate::collection::Collection;

/// Copy every key of every source onto `target`, later sources winning
pub fn extend<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: MappingMut + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        each(source, |value, key, _| {
            target.insert(key.to_string(), value.clone());
        });
    }
    target
}

/// Copy keys onto `target` only where it holds no value yet, earlier sources winning
pub fn defaults<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: MappingMut + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        each(source, |value, key, _| {
            let key = key.to_string();
            if !target.contains_key(&key) {
                target.insert(key, value.clone());
            }
        });
    }
    target
}
