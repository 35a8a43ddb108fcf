//! Variant algebraic types
//!
//! This crate provides:
//! - The `variant!` macro for declaring tagged sum types
//! - The `Variant` trait implemented by every generated type
//! - `Maybe` and `Result` variants with `apply`/`unwrap` conveniences
//! - The `Enumeration` trait for scalar-valued variants
//! - The `trap` helper for converting narrow error kinds into `Result` values
//!
//! Payload arity is part of each tag's constructor, so a wrong-shape
//! construction is a compile error:
//!
//! ```compile_fail
//! use match_variant::Maybe;
//!
//! let m = Maybe::<i32>::just(); // just takes exactly one payload value
//! ```
//!
//! Zero-arity tags still require their empty argument list; the bare tag
//! name is a constructor function, not an instance:
//!
//! ```compile_fail
//! use match_variant::Maybe;
//!
//! let n: Maybe<i32> = Maybe::nothing; // must be written Maybe::nothing()
//! ```

// Generated impls reference the crate by name; alias it so the macro can be
// used inside the crate that defines the runtime contract.
extern crate self as match_variant;

mod enumeration;
mod maybe;
mod result;
mod variant;

pub use enumeration::Enumeration;
pub use maybe::Maybe;
pub use result::{trap, BoxError, Catch, OkNeverCalled, Result, Trapped};
pub use variant::Variant;

pub use match_variant_macros::variant;
