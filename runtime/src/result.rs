//! A fallible outcome: either `ok(value)` or `error(exc)`.
//!
//! Used with the [`trap`] helper, narrow error kinds become `Result`
//! values that can be captured and examined with `match` instead of
//! propagating.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::panic_any;
use std::result::Result as StdResult;

use match_variant_macros::variant;

use crate::maybe::Maybe;

variant! {
    name: Result<T, E>,
    tags {
        ok(T);
        error(E);
    }
}

impl<T, E> Result<T, E> {
    /// Apply a function to the contained value.
    ///
    /// On `ok`, returns `ok` of the function applied to the value. On
    /// `error`, the stored error passes through unchanged and the function
    /// is never invoked.
    pub fn apply<U>(self, func: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Result::ok(val) => Result::ok(func(val)),
            Result::error(ex) => Result::error(ex),
        }
    }

    /// Convert to a [`Maybe`], discarding the error detail if any.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Result::ok(val) => Maybe::just(val),
            Result::error(_) => Maybe::nothing(),
        }
    }

    /// Access the value inside the `ok`.
    ///
    /// On `error`, re-raises the stored error value verbatim as a panic
    /// payload; it is not wrapped or stringified, so a handler can recover
    /// the original value by downcasting. There is no default-value
    /// overload: unlike an absent `Maybe`, a captured error has no obvious
    /// substitute.
    pub fn unwrap(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Result::ok(val) => val,
            Result::error(ex) => panic_any(ex),
        }
    }
}

/// Boxed error value, the payload type of trapped errors.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The set of error kinds a [`trap`] scope converts into `Result::error`.
///
/// Implemented for tuples of one to four error types. There is deliberately
/// no catch-everything impl: a trap names the kinds it expects, everything
/// else propagates.
pub trait Catch {
    /// Whether the trapped kind set covers this error.
    fn catches(err: &(dyn Error + 'static)) -> bool;
}

macro_rules! impl_catch_tuple {
    ($($kind:ident),+) => {
        impl<$($kind),+> Catch for ($($kind,)+)
        where
            $($kind: Error + 'static),+
        {
            fn catches(err: &(dyn Error + 'static)) -> bool {
                false $(|| err.is::<$kind>())+
            }
        }
    };
}

impl_catch_tuple!(K1);
impl_catch_tuple!(K1, K2);
impl_catch_tuple!(K1, K2, K3);
impl_catch_tuple!(K1, K2, K3, K4);

/// Raised by [`Trapped::result`] when `ok` was never called inside a trap
/// scope that completed without a trapped error.
#[derive(Debug)]
pub struct OkNeverCalled;

impl fmt::Display for OkNeverCalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trapped::ok was never called inside the trap scope")
    }
}

impl Error for OkNeverCalled {}

/// Handle exposed inside a [`trap`] scope.
///
/// Records the eventual `Result` for the scope: `ok` values set by the
/// body, or the trapped error on the failure path.
pub struct Trapped<T> {
    value: Option<Result<T, BoxError>>,
}

impl<T> Default for Trapped<T> {
    fn default() -> Self {
        Trapped::new()
    }
}

impl<T> Trapped<T> {
    /// A fresh handle with no result recorded yet.
    pub fn new() -> Self {
        Trapped { value: None }
    }

    /// Record the eventual `Result::ok` payload for this scope. The last
    /// call wins.
    pub fn ok(&mut self, value: T) {
        self.value = Some(Result::ok(value));
    }

    /// Record an error outcome for this scope. Typically called by [`trap`]
    /// itself when a configured kind is caught.
    pub fn error(&mut self, err: impl Into<BoxError>) {
        self.value = Some(Result::error(err.into()));
    }

    /// The result recorded for the scope.
    ///
    /// If neither `ok` nor `error` was ever called, answers
    /// `Result::error(OkNeverCalled)`.
    pub fn result(self) -> Result<T, BoxError> {
        match self.value {
            Some(result) => result,
            None => Result::error(Box::new(OkNeverCalled)),
        }
    }
}

/// Run a scope and convert configured error kinds into a `Result` value.
///
/// The body receives a [`Trapped`] handle and reports its success payload
/// through [`Trapped::ok`]. If the body returns an error covered by the
/// kind set `K`, the scope yields `Result::error` with that value and the
/// caller sees a successful trap; any other error propagates unchanged and
/// no result is produced.
///
/// ```
/// use std::num::ParseIntError;
/// use match_variant::{trap, Result};
///
/// let outcome = trap::<(ParseIntError,), _, _>(|trapped| {
///     trapped.ok("42".parse::<i32>()?);
///     Ok(())
/// });
///
/// match outcome.unwrap() {
///     Result::ok(val) => assert_eq!(val, 42),
///     Result::error(ex) => panic!("unexpected trap: {}", ex),
/// }
/// ```
pub fn trap<K, T, F>(body: F) -> StdResult<Result<T, BoxError>, BoxError>
where
    K: Catch,
    F: FnOnce(&mut Trapped<T>) -> StdResult<(), BoxError>,
{
    let mut trapped = Trapped::new();
    match body(&mut trapped) {
        Ok(()) => Ok(trapped.result()),
        Err(err) if K::catches(err.as_ref()) => {
            trapped.error(err);
            Ok(trapped.result())
        },
        Err(err) => Err(err),
    }
}
