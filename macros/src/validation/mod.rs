//! Validation for variant definitions
//!
//! Every configuration error in a `variant!` declaration is caught here,
//! before any code is generated, and reported with the span of the
//! offending token.

mod validator;

pub use validator::validate_variant;

use proc_macro2::Span;

/// A configuration error in a variant definition.
///
/// All of these are definition-time failures: they abort macro expansion
/// and are never deferred to first use of the generated type.
pub enum ValidationError {
    /// The definition declares no tags at all.
    EmptyVariant { variant: String, span: Span },

    /// The same tag name appears twice in one definition.
    DuplicateTag {
        tag: String,
        variant: String,
        span: Span,
    },

    /// A tag name collides with a name the synthesis mechanism reserves.
    ReservedTag { tag: String, span: Span },

    /// A default scalar on a tag whose shape is not empty.
    DefaultOnPayloadTag { tag: String, span: Span },

    /// A default scalar without a `value:` type on the definition.
    DefaultWithoutValueType { tag: String, span: Span },

    /// A `value:` type on a definition where no tag declares a default.
    ValueTypeWithoutDefaults { variant: String, span: Span },

    /// A `value:` type on a generic definition; the reverse lookup needs
    /// a concrete scalar type.
    GenericValueLookup { variant: String, span: Span },

    /// Two tags declare the same default scalar.
    DuplicateDefault {
        value: String,
        first_tag: String,
        second_tag: String,
        span: Span,
    },

    /// A default literal of a kind that cannot be used in the lookup
    /// (currently: floats).
    UnsupportedDefaultLiteral { tag: String, span: Span },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::EmptyVariant { span, .. }
            | ValidationError::DuplicateTag { span, .. }
            | ValidationError::ReservedTag { span, .. }
            | ValidationError::DefaultOnPayloadTag { span, .. }
            | ValidationError::DefaultWithoutValueType { span, .. }
            | ValidationError::ValueTypeWithoutDefaults { span, .. }
            | ValidationError::GenericValueLookup { span, .. }
            | ValidationError::DuplicateDefault { span, .. }
            | ValidationError::UnsupportedDefaultLiteral { span, .. } => *span,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationError::EmptyVariant { variant, .. } => {
                format!("variant '{}' declares no tags; a variant needs at least one tag", variant)
            },
            ValidationError::DuplicateTag { tag, variant, .. } => {
                format!("tag '{}' is declared more than once in variant '{}'", tag, variant)
            },
            ValidationError::ReservedTag { tag, .. } => {
                format!("tag name '{}' is reserved by the variant machinery", tag)
            },
            ValidationError::DefaultOnPayloadTag { tag, .. } => {
                format!("tag '{}' declares a default scalar but has a non-empty shape; defaults are only valid on zero-arity tags", tag)
            },
            ValidationError::DefaultWithoutValueType { tag, .. } => {
                format!("tag '{}' declares a default scalar but the definition has no 'value:' type", tag)
            },
            ValidationError::ValueTypeWithoutDefaults { variant, .. } => {
                format!("variant '{}' declares a 'value:' type but no tag declares a default scalar", variant)
            },
            ValidationError::GenericValueLookup { variant, .. } => {
                format!("variant '{}' is generic; value lookup requires a non-generic definition", variant)
            },
            ValidationError::DuplicateDefault {
                value,
                first_tag,
                second_tag,
                ..
            } => {
                format!(
                    "default scalar {} is declared on both '{}' and '{}'; defaults must be unique within one variant",
                    value, first_tag, second_tag
                )
            },
            ValidationError::UnsupportedDefaultLiteral { tag, .. } => {
                format!("tag '{}' declares a float default; float scalars cannot be matched in the lookup", tag)
            },
        }
    }
}
