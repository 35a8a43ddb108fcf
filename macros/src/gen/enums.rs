use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::ast::variant::VariantDef;

/// Generate the enum definition: one tuple variant per tag, payload fields
/// in declaration order so matches can destructure positionally.
///
/// Tuple variants double as the tag constructors, so payload arity and
/// types are checked by the compiler at every construction site. Zero-arity
/// tags become zero-field tuple variants: `nothing()` must be written with
/// its parentheses both when constructing and when matching.
pub fn generate_enum(def: &VariantDef) -> TokenStream {
    let name = &def.name;
    let generics = &def.generics;

    let variants: Vec<TokenStream> = def
        .tags
        .iter()
        .map(|tag| {
            let tag_name = &tag.name;
            let payload = &tag.shape;
            quote! { #tag_name(#(#payload),*) }
        })
        .collect();

    quote! {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        pub enum #name #generics {
            #(#variants),*
        }
    }
}

/// Generate the `Variant` impl: the shared contract every tag of every
/// variant type participates in.
pub fn generate_variant_impl(def: &VariantDef) -> TokenStream {
    let name = &def.name;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    let tag_names: Vec<String> = def.tags.iter().map(|tag| tag.name.to_string()).collect();

    let tag_arms: Vec<TokenStream> = def
        .tags
        .iter()
        .map(|tag| {
            let tag_name = &tag.name;
            let tag_str = tag.name.to_string();
            quote! { #name::#tag_name(..) => #tag_str }
        })
        .collect();

    quote! {
        impl #impl_generics ::match_variant::Variant for #name #ty_generics #where_clause {
            const TAGS: &'static [&'static str] = &[#(#tag_names),*];

            fn tag(&self) -> &'static str {
                match self {
                    #(#tag_arms),*
                }
            }
        }
    }
}

/// Generate `Display`, rendering an instance as `Name::tag(payload, ...)`
/// with `Debug` formatting for each payload value.
pub fn generate_display_impl(def: &VariantDef) -> TokenStream {
    let name = &def.name;

    // Display needs Debug on every payload, so the impl carries a Debug
    // bound per type parameter; the enum itself stays unbounded.
    let mut display_generics = def.generics.clone();
    for param in display_generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::std::fmt::Debug));
    }
    let (impl_generics, _, where_clause) = display_generics.split_for_impl();
    let (_, ty_generics, _) = def.generics.split_for_impl();

    let arms: Vec<TokenStream> = def
        .tags
        .iter()
        .map(|tag| {
            let tag_name = &tag.name;
            let bindings: Vec<_> = (0..tag.arity())
                .map(|index| format_ident!("field{}", index))
                .collect();
            let fmt = format!(
                "{}::{}({})",
                name,
                tag_name,
                vec!["{:?}"; tag.arity()].join(", ")
            );
            quote! {
                #name::#tag_name(#(#bindings),*) => write!(f, #fmt #(, #bindings)*)
            }
        })
        .collect();

    quote! {
        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#arms),*
                }
            }
        }
    }
}

/// Generate the `exhaust` marker.
///
/// `exhaust` exists so a match over a variant can name an arm that a static
/// checker should prove unreachable. Invoking it is always a failure: it
/// panics with the value that escaped the match.
pub fn generate_exhaust_impl(def: &VariantDef) -> TokenStream {
    let name = &def.name;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Mark a match arm that should never be reached.
            ///
            /// Always panics when invoked; correct programs only place it
            /// behind arms proven unreachable.
            pub fn exhaust<X: ::std::fmt::Debug>(value: X) -> ! {
                panic!("unsupported match arm: {:?}", value)
            }
        }
    }
}
