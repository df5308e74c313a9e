//! Arbitrarily nested sequences, the input shape of `flatten`.

use serde_json::Value;

/// A value that is either a leaf or a list of further nested values
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A non-list value
    Leaf(T),
    /// A list whose elements may themselves be lists
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wrap a single value
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// Build a list from anything convertible into nested values
    pub fn list<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Nested<T>>,
    {
        Nested::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether this is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Number of list levels at the deepest point (a leaf has depth 0)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, enclosing)) = stack.pop() {
            if let Nested::List(children) = node {
                let level = enclosing + 1;
                deepest = deepest.max(level);
                stack.extend(children.iter().map(|child| (child, level)));
            }
        }
        deepest
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// JSON arrays become lists; every other JSON value is a leaf.
impl From<Value> for Nested<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Nested::List(items.into_iter().map(Nested::from).collect()),
            other => Nested::Leaf(other),
        }
    }
}

/// Build a `Vec<Nested<_>>` from bracketed literals.
///
/// ```
/// use underbar_core::{nested, Nested};
///
/// let value: Vec<Nested<i32>> = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(value.len(), 2);
/// ```
///
/// Each leaf must be a single token tree (a literal, an identifier, or a
/// parenthesised expression).
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@item $item)),*]
    };
}
