//! Derive macros for Liaison.
//!
//! - `#[derive(View)]` - implements `liaison::View` over a flag field
//! - `#[derive(Injectable)]` - implements `liaison::Injectable`, resolving
//!   every `#[inject]` field

use proc_macro::TokenStream;

mod inject;
mod view;

/// Derive macro for implementing the `View` trait.
///
/// The flag is the field marked `#[view(registered)]`, or else the field named
/// `registered_with_context`. It must be a `bool`.
///
/// ```rust,ignore
/// #[derive(Default, View, Injectable)]
/// struct Dialog {
///     #[view(registered)]
///     registered: bool,
/// }
/// ```
#[proc_macro_derive(View, attributes(view))]
pub fn derive_view(input: TokenStream) -> TokenStream {
    view::derive_view_impl(input)
}

/// Derive macro for implementing the `Injectable` trait.
///
/// Each field marked `#[inject]` is filled from the resolver. A field of
/// type `Option<T>` is set to `Some(value)`; any other field type `T` is
/// assigned directly. `T` must be `Clone`. A missing value fails injection
/// with `InjectionError::MissingDependency`.
///
/// ```rust,ignore
/// #[derive(Default, Injectable)]
/// struct DialogMediator {
///     #[inject]
///     session: Option<Arc<Session>>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    inject::derive_injectable_impl(input)
}
