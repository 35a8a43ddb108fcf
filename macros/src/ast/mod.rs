//! AST definitions for the `variant!` macro
//!
//! This module defines the abstract syntax tree for variant definitions:
//! a variant name (with optional generics), an optional scalar value type
//! for enum-style lookup, and the ordered list of tag declarations.

pub mod variant;
