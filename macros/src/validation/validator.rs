use std::collections::{HashMap, HashSet};

use quote::ToTokens;
use syn::Lit;

use super::ValidationError;
use crate::ast::variant::VariantDef;

/// Names the synthesis mechanism claims on every generated type.
/// A tag with one of these names would shadow the generated item.
const RESERVED_TAGS: &[&str] = &["exhaust", "tag", "value", "from_value"];

pub fn validate_variant(def: &VariantDef) -> Result<(), ValidationError> {
    if def.tags.is_empty() {
        return Err(ValidationError::EmptyVariant {
            variant: def.name.to_string(),
            span: def.name.span(),
        });
    }

    let mut seen = HashSet::new();
    for tag in &def.tags {
        let tag_name = tag.name.to_string();

        if RESERVED_TAGS.contains(&tag_name.as_str()) {
            return Err(ValidationError::ReservedTag {
                tag: tag_name,
                span: tag.name.span(),
            });
        }

        if !seen.insert(tag_name.clone()) {
            return Err(ValidationError::DuplicateTag {
                tag: tag_name,
                variant: def.name.to_string(),
                span: tag.name.span(),
            });
        }
    }

    validate_defaults(def)?;

    Ok(())
}

/// Check the enum-style rules: defaults and the `value:` type must be
/// declared together, defaults sit on zero-arity tags only, and no scalar
/// may be claimed by two tags.
fn validate_defaults(def: &VariantDef) -> Result<(), ValidationError> {
    let defaulted = def.tags.iter().filter(|t| t.default.is_some());

    match (&def.value_type, def.tags.iter().find(|t| t.default.is_some())) {
        (None, Some(tag)) => {
            return Err(ValidationError::DefaultWithoutValueType {
                tag: tag.name.to_string(),
                span: tag.name.span(),
            });
        },
        (Some(_), None) => {
            return Err(ValidationError::ValueTypeWithoutDefaults {
                variant: def.name.to_string(),
                span: def.name.span(),
            });
        },
        _ => {},
    }

    if def.value_type.is_some() && !def.generics.params.is_empty() {
        return Err(ValidationError::GenericValueLookup {
            variant: def.name.to_string(),
            span: def.name.span(),
        });
    }

    // Maps the literal's canonical value to the first tag that claimed it.
    let mut claimed: HashMap<String, String> = HashMap::new();

    for tag in defaulted {
        let lit = tag.default.as_ref().unwrap();

        if !tag.shape.is_empty() {
            return Err(ValidationError::DefaultOnPayloadTag {
                tag: tag.name.to_string(),
                span: tag.name.span(),
            });
        }

        if matches!(lit, Lit::Float(_)) {
            return Err(ValidationError::UnsupportedDefaultLiteral {
                tag: tag.name.to_string(),
                span: lit.span(),
            });
        }

        let key = default_key(lit);
        if let Some(first_tag) = claimed.get(&key) {
            return Err(ValidationError::DuplicateDefault {
                value: lit.to_token_stream().to_string(),
                first_tag: first_tag.clone(),
                second_tag: tag.name.to_string(),
                span: lit.span(),
            });
        }
        claimed.insert(key, tag.name.to_string());
    }

    Ok(())
}

/// Canonical identity of a default scalar. The same value spelled two ways
/// (`0xC8` vs `200`, `1` vs `1i64`) must collide here, so integers are keyed
/// by their numeric value and strings/chars by their unescaped content.
fn default_key(lit: &Lit) -> String {
    match lit {
        Lit::Int(int) => match int.base10_parse::<i128>() {
            Ok(value) => format!("int:{}", value),
            Err(_) => format!("int:{}", int.base10_digits()),
        },
        Lit::Str(s) => format!("str:{}", s.value()),
        Lit::Char(c) => format!("char:{}", c.value()),
        Lit::Byte(b) => format!("byte:{}", b.value()),
        Lit::Bool(b) => format!("bool:{}", b.value),
        other => other.to_token_stream().to_string(),
    }
}
