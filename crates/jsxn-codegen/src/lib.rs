// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Options read from the container-level `#[jsxn(...)]` attributes.
#[derive(Default)]
struct ContainerOptions {
    /// Explicit shape name (`name = "..."`).
    name: Option<String>,
    /// Accept a struct without fields (`allow_empty`).
    allow_empty: bool,
    /// Associated functions bound as behaviors (`behavior(a, b)`).
    behaviors: Vec<syn::Ident>,
}

/// Options read from a field-level `#[jsxn(...)]` attribute.
#[derive(Default)]
struct FieldOptions {
    /// Field name in the shape (`rename = "..."`).
    rename: Option<String>,
    /// Leave the field out of the shape (`skip`).
    skip: bool,
}

/// `#[derive(Definable)]` macro: generates `jsxn::Definable` for a struct
///
/// Every named field becomes a shape field, in declaration order, with the
/// field's Rust type recorded as its type tag. Unit structs and empty
/// structs declare no fields.
///
/// Container attributes:
/// - `#[jsxn(name = "radios")]`: shape name (defaults to the struct name)
/// - `#[jsxn(allow_empty)]`: accept a definition without fields
/// - `#[jsxn(behavior(save, hello))]`: bind associated functions of the form
///   `fn save(record: &mut jsxn::Record, args: &[jsxn::Value]) -> jsxn::Result<jsxn::Value>`
///
/// Field attributes:
/// - `#[jsxn(rename = "other")]`: shape field name
/// - `#[jsxn(skip)]`: not part of the shape
///
/// Example:
/// ```ignore
/// use jsxn::Definable;
///
/// #[derive(Definable)]
/// #[jsxn(name = "radios", behavior(save))]
/// struct Radios {
///     radio: u32,
///     rig: String,
///     input: Option<String>,
///     output: Option<String>,
/// }
/// ```
#[proc_macro_derive(Definable, attributes(jsxn))]
pub fn derive_definable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_definable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_definable(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;
    let options = parse_container_options(&input.attrs)?;
    let shape_name = options.name.unwrap_or_else(|| ident.to_string());

    // Parse struct fields
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only structs with named fields are supported",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Only structs are supported",
            ))
        }
    };

    let mut field_calls = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let field_options = parse_field_options(&field.attrs)?;
        if field_options.skip {
            continue;
        }

        let field_name = field_options
            .rename
            .unwrap_or_else(|| unraw(&field_ident.to_string()));
        let type_tag = type_tag(&field.ty);

        field_calls.push(quote! {
            .typed_field(#field_name, #type_tag)
        });
    }

    let behavior_calls = options.behaviors.iter().map(|behavior| {
        let behavior_name = unraw(&behavior.to_string());
        quote! {
            .behavior(#behavior_name, Self::#behavior)
        }
    });

    let allow_empty = options.allow_empty.then(|| quote! { .allow_empty() });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::jsxn::Definable for #ident #ty_generics #where_clause {
            fn definition() -> ::jsxn::Definition {
                ::jsxn::Definition::new(#shape_name)
                    #(#field_calls)*
                    #(#behavior_calls)*
                    #allow_empty
            }
        }
    })
}

fn parse_container_options(attrs: &[Attribute]) -> syn::Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("jsxn")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                options.name = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("allow_empty") {
                options.allow_empty = true;
                Ok(())
            } else if meta.path.is_ident("behavior") {
                meta.parse_nested_meta(|inner| match inner.path.get_ident() {
                    Some(behavior) => {
                        options.behaviors.push(behavior.clone());
                        Ok(())
                    }
                    None => Err(inner.error("behavior must be an associated function name")),
                })
            } else {
                Err(meta.error("unsupported jsxn attribute (expected name, allow_empty or behavior)"))
            }
        })?;
    }

    Ok(options)
}

fn parse_field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("jsxn")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported jsxn field attribute (expected rename or skip)"))
            }
        })?;
    }

    Ok(options)
}

/// Render a field type as its tag, e.g. `Option < String >` -> `Option<String>`
///
/// Spaces survive only between two word characters (`&'a str`, `dyn Any`).
fn type_tag(ty: &syn::Type) -> String {
    let rendered = ty.to_token_stream().to_string();
    let chars: Vec<char> = rendered.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';

    let mut tag = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = tag.chars().last();
            let next = chars.get(i + 1).copied();
            if !matches!((prev, next), (Some(p), Some(n)) if is_word(p) && is_word(n)) {
                continue;
            }
        }
        tag.push(c);
    }
    tag
}

/// Strip the raw-identifier prefix (`r#type` -> `type`)
fn unraw(name: &str) -> String {
    name.strip_prefix("r#").unwrap_or(name).to_string()
}
