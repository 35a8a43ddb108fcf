//! An optional value: either `just(something)` or `nothing()`.
//!
//! Because `nothing` is a zero-arity tag, both construction and matching
//! spell out the empty argument list: `Maybe::nothing()`.

use match_variant_macros::variant;

variant! {
    name: Maybe<T>,
    tags {
        just(T);
        nothing();
    }
}

impl<T> Maybe<T> {
    /// Apply a function to the contained value.
    ///
    /// On `just`, returns `just` of the function applied to the value.
    /// On `nothing`, returns `nothing()` and the function is never invoked.
    ///
    /// ```
    /// use match_variant::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).apply(|x| x + 1), Maybe::just(4));
    /// assert_eq!(Maybe::<i32>::nothing().apply(|x| x + 1), Maybe::nothing());
    /// ```
    pub fn apply<U>(self, func: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::just(val) => Maybe::just(func(val)),
            Maybe::nothing() => Maybe::nothing(),
        }
    }

    /// Filter the contained value.
    ///
    /// On `just`, keeps the value only when the predicate holds; on
    /// `nothing`, stays `nothing()` and the predicate is never invoked.
    pub fn filter(self, func: impl FnOnce(&T) -> bool) -> Maybe<T> {
        match self {
            Maybe::just(val) => {
                if func(&val) {
                    Maybe::just(val)
                } else {
                    Maybe::nothing()
                }
            },
            Maybe::nothing() => Maybe::nothing(),
        }
    }

    /// Access the value inside the `just`.
    ///
    /// # Panics
    ///
    /// Panics on `nothing()`; use [`Maybe::unwrap_or`] to supply a default
    /// instead.
    ///
    /// ```should_panic
    /// use match_variant::Maybe;
    ///
    /// Maybe::<i32>::nothing().unwrap();
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Maybe::just(val) => val,
            Maybe::nothing() => panic!(
                "attempted to unwrap Maybe::nothing(); can only unwrap Maybe::just(val)"
            ),
        }
    }

    /// Access the value inside the `just`, or the given default on
    /// `nothing()`.
    ///
    /// `Result` deliberately has no counterpart of this: an absent value
    /// has an obvious substitute, a captured error does not.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::just(val) => val,
            Maybe::nothing() => default,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(val) => Maybe::just(val),
            None => Maybe::nothing(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::just(val) => Some(val),
            Maybe::nothing() => None,
        }
    }
}

/// Iterate over the `Maybe`: one item for `just`, none for `nothing()`.
impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
