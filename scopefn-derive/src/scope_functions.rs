//! Implementation of the `#[derive(ScopeFunctions)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitStr, Path, parse_macro_input, parse_quote};

/// Main implementation of the `ScopeFunctions` derive macro.
pub fn derive_scope_functions_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// Generates the empty trait implementation for `input`.
fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let crate_path = crate_path(input)?;
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_path::ScopeFunctions for #name #type_generics #where_clause {}
    })
}

/// Reads `#[scopefn(crate = "...")]`, defaulting to `::scopefn`.
fn crate_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut path: Path = parse_quote!(::scopefn);

    for attribute in input.attrs.iter().filter(|attribute| attribute.path().is_ident("scopefn")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let literal: LitStr = meta.value()?.parse()?;
                path = literal.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported scopefn attribute, expected `crate = \"...\"`"))
            }
        })?;
    }

    Ok(path)
}
