//! Collection and array utilities
//!
//! Every operation is a single pass over its input built on [`each`], and
//! none of them mutates the collection it reads. The merge operations are the
//! only ones that write, and only into the target they are handed.

pub mod arrays;
pub mod composition;
pub mod filtering;
pub mod iteration;
pub mod merge;
pub mod selection;
pub mod transform;

pub use arrays::{
    difference, flatten, intersection, shuffle, shuffle_with, sort_by, sort_by_property, zip,
    zip_pair,
};
pub use composition::{constant, identity, negate};
pub use filtering::{filter, reject, uniq};
pub use iteration::each;
pub use merge::{defaults, extend};
pub use selection::{contains, first, first_n, index_of, last, last_n};
pub use transform::{
    every, every_truthy, invoke, invoke_method, map, pluck, reduce, reduce_first, some,
    some_truthy, Invoker, Method,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::*;
    pub use crate::capabilities::{MappingMut, Methods, Property, Truthy};
    pub use crate::collection::{Collection, Key};
    pub use crate::nested::Nested;
}
