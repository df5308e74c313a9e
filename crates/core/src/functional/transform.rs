//! Transformation, invocation, reduction and quantifiers

use super::composition::{identity, negate};
use super::iteration::each;
use crate::capabilities::{Methods, Property, Truthy};
use crate::collection::Collection;
use crate::errors::Result;
use tracing::debug;

/// One output per input: `iterator(value)` in visitation order
pub fn map<'a, C, U, F>(collection: &'a C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> U,
{
    let mut results = Vec::with_capacity(collection.len());
    each(collection, |value, _, _| results.push(iterator(value)));
    results
}

/// The `property` of every element; `None` where an element lacks it
pub fn pluck<C>(collection: &C, property: &str) -> Vec<Option<<C::Item as Property>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Property,
    <C::Item as Property>::Value: Clone,
{
    map(collection, |value| value.property(property).cloned())
}

/// Something `invoke` can apply to each element
pub trait Invoker<T, A> {
    /// Result of one invocation
    type Output;

    /// Apply to `receiver` with `args`
    fn invoke(&mut self, receiver: &T, args: &[A]) -> Result<Self::Output>;
}

/// Functions are applied with the element as their receiver.
impl<T, A, R, F> Invoker<T, A> for F
where
    F: FnMut(&T, &[A]) -> R,
{
    type Output = R;

    fn invoke(&mut self, receiver: &T, args: &[A]) -> Result<R> {
        Ok(self(receiver, args))
    }
}

/// A zero-argument method looked up by name on each element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method<'n>(pub &'n str);

impl<T: Methods, A> Invoker<T, A> for Method<'_> {
    type Output = T::Output;

    fn invoke(&mut self, receiver: &T, _args: &[A]) -> Result<T::Output> {
        receiver.call_method(self.0)
    }
}

/// Apply `invoker` to every element, stopping at the first failure
pub fn invoke<C, A, I>(collection: &C, mut invoker: I, args: &[A]) -> Result<Vec<I::Output>>
where
    C: Collection + ?Sized,
    I: Invoker<C::Item, A>,
{
    let mut results = Vec::with_capacity(collection.len());
    let mut failure = None;
    each(collection, |value, _, _| {
        if failure.is_some() {
            return;
        }
        match invoker.invoke(value, args) {
            Ok(result) => results.push(result),
            Err(error) => {
                debug!(%error, "invoke_failed");
                failure = Some(error);
            }
        }
    });
    match failure {
        Some(error) => Err(error),
        None => Ok(results),
    }
}

/// Call the zero-argument method `name` on every element
pub fn invoke_method<C>(collection: &C, name: &str) -> Result<Vec<<C::Item as Methods>::Output>>
where
    C: Collection + ?Sized,
    C::Item: Methods,
{
    invoke(collection, Method(name), &[] as &[()])
}

/// Fold `collection` into one value, seeded with `initial`
pub fn reduce<C, A, F>(collection: &C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut accumulator = Some(initial);
    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|previous| iterator(previous, value));
    });
    match accumulator {
        Some(result) => result,
        None => unreachable!("accumulator is restored after every step"),
    }
}

/// Fold `collection` seeded with its first element; `None` when empty
pub fn reduce_first<C, F>(collection: &C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    reduce(
        collection,
        |accumulator: Option<C::Item>, value| match accumulator {
            None => Some(value.clone()),
            Some(previous) => Some(iterator(previous, value)),
        },
        None,
    )
}

/// Whether `predicate` holds for every element (vacuously true when empty)
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |passed, item| passed && predicate(item),
        true,
    )
}

/// [`every`] with truthiness as the predicate
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |item| identity(item).is_truthy())
}

/// Whether `predicate` holds for at least one element
pub fn some<C, P>(collection: &C, predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, negate::<C::Item, P>(predicate))
}

/// [`some`] with truthiness as the predicate
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |item| identity(item).is_truthy())
}
