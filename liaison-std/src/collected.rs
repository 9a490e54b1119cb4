//! Link-time collected bindings.
//!
//! Bindings can be declared next to the mediator they concern with
//! `inventory::submit!` and folded into an owned binder during configuration.
//! Collection only feeds configuration; dispatch always reads the binder it
//! was given.
//!
//! # Example
//!
//! ```rust,ignore
//! inventory::submit! {
//!     BindingRegistration::new(TypeKey::of::<Dialog>, || {
//!         vec![MediatorType::of::<DialogMediator>()]
//!     })
//! }
//!
//! let mut binder = MediationBinder::new(Container::new());
//! binder.bind_collected();
//! ```

use liaison_core::{MediatorType, TypeKey};

/// A view type and the mediators to bind to it.
pub struct BindingRegistration {
    /// The view type.
    pub view: fn() -> TypeKey,
    /// The mediator types, in instantiation order.
    pub mediators: fn() -> Vec<MediatorType>,
}

impl BindingRegistration {
    /// Create a registration entry.
    pub const fn new(view: fn() -> TypeKey, mediators: fn() -> Vec<MediatorType>) -> Self {
        Self { view, mediators }
    }
}

inventory::collect!(BindingRegistration);

/// Every submitted registration. Order across crates is unspecified.
pub fn registrations() -> impl Iterator<Item = &'static BindingRegistration> {
    inventory::iter::<BindingRegistration>.into_iter()
}
