//! `#[derive(View)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, parse_macro_input};

const DEFAULT_FLAG: &str = "registered_with_context";

fn is_flag_attr(attr: &syn::Attribute) -> syn::Result<bool> {
    if !attr.path().is_ident("view") {
        return Ok(false);
    }
    let mut registered = false;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("registered") {
            registered = true;
            Ok(())
        } else {
            Err(meta.error("unknown view attribute, expected `registered`"))
        }
    })?;
    Ok(registered)
}

fn find_flag(input: &DeriveInput) -> syn::Result<Ident> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "View can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "View can only be derived for structs with named fields",
        ));
    };

    let mut marked = None;
    for field in &fields.named {
        for attr in &field.attrs {
            if is_flag_attr(attr)? {
                if marked.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "only one field can be marked #[view(registered)]",
                    ));
                }
                marked = field.ident.clone();
            }
        }
    }
    if let Some(ident) = marked {
        return Ok(ident);
    }

    fields
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .find(|ident| ident == DEFAULT_FLAG)
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "View needs a `bool` field marked #[view(registered)] or named `registered_with_context`",
            )
        })
}

/// Implementation of `#[derive(View)]`.
pub fn derive_view_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let flag = match find_flag(&input) {
        Ok(flag) => flag,
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        impl #impl_generics ::liaison::View for #name #ty_generics #where_clause {
            fn registered_with_context(&self) -> bool {
                self.#flag
            }

            fn set_registered_with_context(&mut self, registered: bool) {
                self.#flag = registered;
            }
        }
    };

    TokenStream::from(expanded)
}
