//! Small combinators the traversal operations are assembled from

/// Identity function
///
/// The default iterator wherever a caller supplies none.
pub fn identity<T>(x: T) -> T {
    x
}

/// Constant function
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Logical negation of a predicate
pub fn negate<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_argument() {
        assert_eq!(identity(5), 5);
        let text = "moe";
        assert!(std::ptr::eq(identity(text), text));
    }

    #[test]
    fn test_constant_ignores_argument() {
        let always_seven = constant::<i32, &str>(7);
        assert_eq!(always_seven("anything"), 7);
        assert_eq!(always_seven("else"), 7);
    }

    #[test]
    fn test_negate() {
        let mut is_odd = negate(|n: &i32| n % 2 == 0);
        assert!(is_odd(&3));
        assert!(!is_odd(&4));
    }
}
