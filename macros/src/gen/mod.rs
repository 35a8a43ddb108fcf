//! Code generation for variant definitions
//!
//! This module orchestrates the generation of all Rust code from a
//! `VariantDef`:
//! - The enum itself (one tuple variant per tag)
//! - The `Variant` trait impl (tag names, tag dispatch)
//! - `Display` (the canonical `Name::tag(...)` rendering)
//! - The `exhaust` marker function
//! - The `Enumeration` impl for enum-style definitions
//!
//! ## Module Structure
//!
//! - `enums` - enum, `Variant`, `Display` and `exhaust` generation
//! - `lookup` - scalar-value reverse lookup for enum-style variants

pub mod enums;
pub mod lookup;

use proc_macro2::TokenStream;
use quote::quote;

use crate::ast::variant::VariantDef;

/// Generate all code for a variant definition
///
/// This is the main entry point for code generation. It produces the enum
/// definition plus every impl the runtime contract expects.
pub fn generate_all(def: &VariantDef) -> TokenStream {
    let enum_def = enums::generate_enum(def);
    let variant_impl = enums::generate_variant_impl(def);
    let display_impl = enums::generate_display_impl(def);
    let exhaust_impl = enums::generate_exhaust_impl(def);
    let lookup_impl = lookup::generate_value_lookup(def);

    quote! {
        #enum_def

        #variant_impl

        #display_impl

        #exhaust_impl

        #lookup_impl
    }
}
