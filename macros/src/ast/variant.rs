use syn::{
    braced, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Generics, Ident, Lit, Result as SynResult, Token, Type,
};

/// Top-level variant definition
/// variant! { name: Foo<T>, value: u16, tags { tag(Type, ...) = default; ... } }
pub struct VariantDef {
    pub name: Ident,
    /// Type parameters of the generated enum. Empty if the variant is not generic.
    pub generics: Generics,
    /// Scalar type shared by the tag defaults, from the `value: Ty,` block.
    /// Present iff the declaration is enum-style.
    pub value_type: Option<Type>,
    pub tags: Vec<TagDef>,
}

/// One tag declaration: a name, a payload shape, and an optional default scalar
/// Syntax: `just(T);` or `ok() = 200;`
pub struct TagDef {
    pub name: Ident,
    /// Expected payload types, in declaration order. Empty for zero-arity tags.
    pub shape: Vec<Type>,
    pub default: Option<Lit>,
}

impl TagDef {
    pub fn arity(&self) -> usize {
        self.shape.len()
    }
}

impl Parse for VariantDef {
    fn parse(input: ParseStream) -> SynResult<Self> {
        // Parse: name: Identifier<Generics?>
        let name_kw = input.parse::<Ident>()?;
        if name_kw != "name" {
            return Err(syn::Error::new(name_kw.span(), "expected 'name'"));
        }
        let _ = input.parse::<Token![:]>()?;
        let name = input.parse::<Ident>()?;
        let generics = input.parse::<Generics>()?;
        let _ = input.parse::<Token![,]>()?;

        // Parse: value: Type, (optional)
        let value_type = if input.peek(Ident) {
            let lookahead = input.fork().parse::<Ident>()?;
            if lookahead == "value" {
                Some(parse_value_type(input)?)
            } else {
                None
            }
        } else {
            None
        };

        // Parse: tags { ... }
        let tags = if input.peek(Ident) {
            let lookahead = input.fork().parse::<Ident>()?;
            if lookahead == "tags" {
                parse_tags(input)?
            } else {
                Vec::new()
            }
        } else {
            Vec::new()
        };

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after variant definition"));
        }

        Ok(VariantDef {
            name,
            generics,
            value_type,
            tags,
        })
    }
}

fn parse_value_type(input: ParseStream) -> SynResult<Type> {
    let value_ident = input.parse::<Ident>()?;
    if value_ident != "value" {
        return Err(syn::Error::new(value_ident.span(), "expected 'value'"));
    }
    let _ = input.parse::<Token![:]>()?;
    let ty = input.parse::<Type>()?;
    let _ = input.parse::<Token![,]>()?;
    Ok(ty)
}

fn parse_tags(input: ParseStream) -> SynResult<Vec<TagDef>> {
    let tags_ident = input.parse::<Ident>()?;
    if tags_ident != "tags" {
        return Err(syn::Error::new(tags_ident.span(), "expected 'tags'"));
    }

    let content;
    braced!(content in input);

    let mut tags = Vec::new();
    while !content.is_empty() {
        let name = content.parse::<Ident>()?;

        // The shape must be a parenthesized type list, even when empty.
        // `just: T` style annotations are rejected here rather than at use.
        if !content.peek(syn::token::Paren) {
            return Err(syn::Error::new(
                name.span(),
                format!(
                    "tag '{}' must declare its payload shape as a parenthesized type list \
                     (write '{}()' for an empty shape)",
                    name, name
                ),
            ));
        }

        let shape_content;
        parenthesized!(shape_content in content);
        let shape: Punctuated<Type, Token![,]> =
            shape_content.parse_terminated(Type::parse, Token![,])?;

        // Optional default scalar: `= literal`
        let default = if content.peek(Token![=]) {
            let _ = content.parse::<Token![=]>()?;
            Some(content.parse::<Lit>()?)
        } else {
            None
        };

        let _ = content.parse::<Token![;]>()?;

        tags.push(TagDef {
            name,
            shape: shape.into_iter().collect(),
            default,
        });
    }

    // Optional comma after closing brace
    if input.peek(Token![,]) {
        let _ = input.parse::<Token![,]>()?;
    }

    Ok(tags)
}
