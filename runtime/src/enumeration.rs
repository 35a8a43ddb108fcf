use crate::maybe::Maybe;

/// Variants whose tags carry a default scalar.
///
/// Declaring a `value:` type on a `variant!` definition makes the macro
/// implement this trait, with the scalar-to-tag lookup baked in at
/// definition time.
///
/// ```
/// use match_variant::{variant, Enumeration, Maybe};
///
/// variant! {
///     name: HttpStatus,
///     value: u16,
///     tags {
///         ok() = 200;
///         not_found() = 404;
///     }
/// }
///
/// assert_eq!(HttpStatus::from_value(200), Maybe::just(HttpStatus::ok()));
/// assert_eq!(HttpStatus::from_value(999), Maybe::nothing());
/// assert_eq!(HttpStatus::not_found().value(), Maybe::just(404));
/// ```
pub trait Enumeration: Sized {
    /// Scalar type shared by the tag defaults.
    type Value;

    /// Reverse lookup from a scalar to the tag declared with it.
    ///
    /// Total over arbitrary input: unknown scalars (and tags declared
    /// without a default) answer `Maybe::nothing()` rather than failing.
    fn from_value(value: Self::Value) -> Maybe<Self>;

    /// The default scalar declared for this instance's tag, if any.
    fn value(&self) -> Maybe<Self::Value>;
}
