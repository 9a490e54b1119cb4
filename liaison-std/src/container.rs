//! Reference injection container.

use liaison_core::{BoxError, InjectionBinder, InjectionError, Injectable, Resolver, TypeKey};
use std::{
    any::Any,
    collections::{HashMap, HashSet},
    fmt,
};

/// A minimal injection binder.
///
/// Holds the set of self-bound types and the values provided for injection.
/// Targets pull their dependencies in [`Injectable::inject_fields`] through
/// the [`Resolver`] interface.
///
/// # Example
/// ```rust
/// use liaison_core::{InjectionBinder, TypeKey};
/// use liaison_std::Container;
///
/// let mut container = Container::new();
/// container.provide(String::from("theme: dark"));
/// container.bind_self(TypeKey::of::<u8>());
///
/// assert!(container.is_bound(TypeKey::of::<u8>()));
/// assert_eq!(container.provided::<String>().unwrap(), "theme: dark");
/// ```
#[derive(Default)]
pub struct Container {
    bound: HashSet<TypeKey>,
    values: HashMap<TypeKey, Box<dyn Any + Send + Sync>>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide `value` to every target that asks for a `T`.
    ///
    /// A later value for the same type replaces the earlier one.
    pub fn provide<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.values.insert(TypeKey::of::<T>(), Box::new(value));
        self
    }

    /// The value provided for `T`.
    pub fn provided<T: Any>(&self) -> Option<&T> {
        self.values.get(&TypeKey::of::<T>())?.downcast_ref()
    }

    /// Get the number of self-bound types.
    pub fn bound_len(&self) -> usize {
        self.bound.len()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bound", &self.bound)
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Resolver for Container {
    fn resolve_any(&self, key: TypeKey) -> Option<&dyn Any> {
        match self.values.get(&key) {
            Some(value) => Some(&**value),
            None => None,
        }
    }
}

impl InjectionBinder for Container {
    fn bind_self(&mut self, key: TypeKey) {
        self.bound.insert(key);
    }

    fn is_bound(&self, key: TypeKey) -> bool {
        self.bound.contains(&key)
    }

    fn inject(
        &self,
        target: &mut dyn Injectable,
        enforce_binding_required: bool,
    ) -> Result<(), BoxError> {
        let key = target.type_key();
        if enforce_binding_required && !self.is_bound(key) {
            return Err(Box::new(InjectionError::Unbound { target: key }));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(target_type = %key, "Injecting fields");

        target.inject_fields(self)
    }
}
