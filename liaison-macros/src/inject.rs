//! `#[derive(Injectable)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, PathArguments, Type, parse_macro_input,
};

/// `T` when `ty` is spelled `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// `self.field = ...` for one `#[inject]` field.
fn field_assignment(field: &Field) -> TokenStream2 {
    let ident = &field.ident;
    match option_inner(&field.ty) {
        Some(inner) => quote! {
            self.#ident = ::core::option::Option::Some(
                resolver.require::<#inner>(target)?,
            );
        },
        None => {
            let ty = &field.ty;
            quote! {
                self.#ident = resolver.require::<#ty>(target)?;
            }
        }
    }
}

/// Implementation of `#[derive(Injectable)]`.
pub fn derive_injectable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(
                    name,
                    "Injectable can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Injectable can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let assignments = fields
        .iter()
        .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("inject")))
        .map(|field| field_assignment(field))
        .collect::<Vec<_>>();

    let body = if assignments.is_empty() {
        quote! {
            let _ = resolver;
            ::core::result::Result::Ok(())
        }
    } else {
        quote! {
            let target = ::liaison::Injectable::type_key(self);
            #(#assignments)*
            ::core::result::Result::Ok(())
        }
    };

    let expanded = quote! {
        impl #impl_generics ::liaison::Injectable for #name #ty_generics #where_clause {
            fn inject_fields(
                &mut self,
                resolver: &dyn ::liaison::Resolver,
            ) -> ::core::result::Result<(), ::liaison::BoxError> {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}
