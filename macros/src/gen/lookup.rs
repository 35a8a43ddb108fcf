use proc_macro2::TokenStream;
use quote::quote;
use syn::Lit;

use crate::ast::variant::VariantDef;

/// Generate the `Enumeration` impl for enum-style definitions.
///
/// The reverse lookup from scalar to tag is baked in at expansion time as a
/// chain of equality checks over the default literals; there is nothing to
/// mutate afterwards. Comparing instead of pattern-matching keeps owned value
/// types working, where a `"GET"` literal compares against a `String` but
/// cannot appear as a pattern for one. Tags without a default simply never
/// come back from `from_value`, and `value` answers `nothing()` for them.
///
/// Returns an empty stream when the definition declares no `value:` type.
pub fn generate_value_lookup(def: &VariantDef) -> TokenStream {
    let Some(value_type) = &def.value_type else {
        return TokenStream::new();
    };

    let name = &def.name;

    let from_checks: Vec<TokenStream> = def
        .tags
        .iter()
        .filter_map(|tag| {
            let tag_name = &tag.name;
            let lit = tag.default.as_ref()?;
            Some(quote! {
                if value == #lit {
                    return ::match_variant::Maybe::just(#name::#tag_name());
                }
            })
        })
        .collect();

    let value_arms: Vec<TokenStream> = def
        .tags
        .iter()
        .map(|tag| {
            let tag_name = &tag.name;
            match &tag.default {
                Some(lit) => {
                    let scalar = default_expr(lit);
                    quote! {
                        #name::#tag_name() => ::match_variant::Maybe::just(#scalar)
                    }
                },
                None => quote! {
                    #name::#tag_name(..) => ::match_variant::Maybe::nothing()
                },
            }
        })
        .collect();

    quote! {
        impl ::match_variant::Enumeration for #name {
            type Value = #value_type;

            fn from_value(value: #value_type) -> ::match_variant::Maybe<Self> {
                #(#from_checks)*
                ::match_variant::Maybe::nothing()
            }

            fn value(&self) -> ::match_variant::Maybe<#value_type> {
                match self {
                    #(#value_arms),*
                }
            }
        }
    }
}

/// The scalar a tag answers from `value()`. String literals go through
/// `Into` so they land in `String` as well as `&'static str` value types;
/// integer and other literals already carry the right type from inference.
fn default_expr(lit: &Lit) -> TokenStream {
    match lit {
        Lit::Str(_) => quote! { ::std::convert::Into::into(#lit) },
        _ => quote! { #lit },
    }
}
