//! Injection contract.
//!
//! Liaison does not implement dependency injection itself; it submits views
//! and mediators to an [`InjectionBinder`] at the documented points and
//! propagates whatever that binder reports.

use crate::{
    error::{BoxError, InjectionError},
    types::TypeKey,
};
use std::any::Any;

/// An object whose fields can be populated by an injector.
pub trait Injectable: Any {
    /// Exact runtime type of `self`.
    ///
    /// The provided implementation is dispatched through the vtable, so it
    /// reports the concrete type even when called on `dyn Injectable`. Do not
    /// override it.
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    /// Populate fields from `resolver`.
    ///
    /// The default has no fields to populate.
    fn inject_fields(&mut self, resolver: &dyn Resolver) -> Result<(), BoxError> {
        let _ = resolver;
        Ok(())
    }
}

/// Type-keyed source of injectable values.
pub trait Resolver {
    /// Look up the value provided for `key`.
    fn resolve_any(&self, key: TypeKey) -> Option<&dyn Any>;
}

impl dyn Resolver + '_ {
    /// Look up the value provided for `T`.
    pub fn resolve<T: Any>(&self) -> Option<&T> {
        self.resolve_any(TypeKey::of::<T>())?.downcast_ref()
    }

    /// Clone the value provided for `T`, failing on behalf of `target` if
    /// nothing was provided.
    pub fn require<T: Any + Clone>(&self, target: TypeKey) -> Result<T, InjectionError> {
        self.resolve::<T>()
            .cloned()
            .ok_or(InjectionError::MissingDependency {
                target,
                dependency: TypeKey::of::<T>(),
            })
    }
}

/// The injection system as seen by the mediation layer.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an injection binder",
    label = "missing `InjectionBinder` implementation",
    note = "Liaison needs self-registration and `inject` from the injection system."
)]
pub trait InjectionBinder {
    /// Register `key` as injectable into itself (`bind<T>().to<T>()`).
    fn bind_self(&mut self, key: TypeKey);

    /// Check whether `key` has an injection binding.
    fn is_bound(&self, key: TypeKey) -> bool;

    /// Populate `target`'s fields.
    ///
    /// With `enforce_binding_required = false` the binder must accept targets
    /// that were never bound.
    fn inject(
        &self,
        target: &mut dyn Injectable,
        enforce_binding_required: bool,
    ) -> Result<(), BoxError>;
}

impl<T: InjectionBinder + ?Sized> InjectionBinder for Box<T> {
    fn bind_self(&mut self, key: TypeKey) {
        (**self).bind_self(key)
    }

    fn is_bound(&self, key: TypeKey) -> bool {
        (**self).is_bound(key)
    }

    fn inject(
        &self,
        target: &mut dyn Injectable,
        enforce_binding_required: bool,
    ) -> Result<(), BoxError> {
        (**self).inject(target, enforce_binding_required)
    }
}
