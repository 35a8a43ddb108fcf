//! Procedural macro for defining tagged variant types
//!
//! This crate provides the `variant!` macro which defines a sum type with:
//! - One tuple variant per declared tag (the tag constructors)
//! - Structural equality, hashing and `Display` for instances
//! - An `exhaust` marker for match arms that should be unreachable
//! - An optional scalar-value lookup for enum-style variants
//!
//! Declarations are validated before any code is generated: malformed
//! shapes, duplicate or reserved tag names and duplicate default scalars
//! are all reported at definition time.

mod ast;
mod gen;
mod validation;

use proc_macro::TokenStream;
use proc_macro_error::{abort, proc_macro_error};
use syn::parse_macro_input;

use ast::variant::VariantDef;
use gen::generate_all;
use validation::validate_variant;

#[proc_macro]
#[proc_macro_error]
pub fn variant(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as VariantDef);

    if let Err(e) = validate_variant(&def) {
        let span = e.span();
        let msg = e.message();
        abort!(span, "{}", msg);
    }

    generate_all(&def).into()
}
