//! The view → mediator binding registry.
//!
//! [`MediationBinder`] specialises the generic [`Binder`] table: its bindings
//! are keyed by a view's exact runtime type and hold an ordered list of
//! mediator types. Binding a view also registers it with the injection
//! system, so views are injectable whether or not any mediator is bound.

use liaison_core::{InjectionBinder, Mediator, MediatorType, TypeKey, View};
use liaison_std::binder::{Binder, Binding, RawBinding};

/// The mediator types bound to one view type.
#[derive(Debug, Clone)]
pub struct MediationBinding {
    inner: Binding<TypeKey, MediatorType>,
}

impl MediationBinding {
    /// Append mediator type `M`.
    ///
    /// Mediators are instantiated in the order they were appended.
    pub fn to<M: Mediator + Default>(&mut self) -> &mut Self {
        self.to_type(MediatorType::of::<M>())
    }

    /// Append an already resolved mediator type.
    pub fn to_type(&mut self, mediator: MediatorType) -> &mut Self {
        self.inner.to(mediator);
        self
    }

    /// The bound view type.
    pub fn view_type(&self) -> TypeKey {
        *self.inner.key()
    }

    /// The mediator types, in instantiation order.
    pub fn mediators(&self) -> &[MediatorType] {
        self.inner.values()
    }

    /// Get the number of mediator types.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no mediator type is bound.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl RawBinding for MediationBinding {
    type Key = TypeKey;

    fn new(key: TypeKey) -> Self {
        Self {
            inner: Binding::new(key),
        }
    }

    fn key(&self) -> &TypeKey {
        self.inner.key()
    }
}

/// Registry of view types and the mediators they instantiate.
///
/// Built during configuration, then shared read-only with a
/// [`MediationDispatcher`](crate::MediationDispatcher).
///
/// # Example
/// ```ignore
/// let mut binder = MediationBinder::new(Container::new());
/// binder.bind::<Dialog>().to::<DialogMediator>().to::<AnalyticsMediator>();
/// binder.bind::<Panel>();
///
/// let dispatcher = MediationDispatcher::new(binder);
/// ```
pub struct MediationBinder<I> {
    bindings: Binder<MediationBinding>,
    injector: I,
}

impl<I: InjectionBinder> MediationBinder<I> {
    /// Create an empty registry on top of `injector`.
    pub fn new(injector: I) -> Self {
        Self {
            bindings: Binder::new(),
            injector,
        }
    }

    /// Start a fresh binding for view type `V`.
    ///
    /// `V` is registered as self-injectable even if no mediator is ever
    /// appended. Binding `V` again replaces its previous binding.
    pub fn bind<V: View>(&mut self) -> &mut MediationBinding {
        self.bind_key(TypeKey::of::<V>())
    }

    /// Untyped form of [`bind`](Self::bind).
    pub fn bind_key(&mut self, view: TypeKey) -> &mut MediationBinding {
        self.injector.bind_self(view);

        #[cfg(feature = "tracing")]
        if self.bindings.contains_key(&view) {
            tracing::debug!(view_type = %view, "Replacing mediation binding");
        }

        self.bindings.bind(view)
    }

    /// Remove the binding for view type `V`.
    ///
    /// The injection registration made by `bind` is kept.
    pub fn unbind<V: View>(&mut self) -> Option<MediationBinding> {
        self.unbind_key(TypeKey::of::<V>())
    }

    /// Untyped form of [`unbind`](Self::unbind).
    pub fn unbind_key(&mut self, view: TypeKey) -> Option<MediationBinding> {
        self.bindings.unbind(&view)
    }

    /// Fold every collected [`BindingRegistration`](liaison_std::collected::BindingRegistration)
    /// into this registry. Returns the number of registrations applied.
    #[cfg(feature = "inventory")]
    pub fn bind_collected(&mut self) -> usize {
        let mut applied = 0;
        for registration in liaison_std::collected::registrations() {
            let binding = self.bind_key((registration.view)());
            for mediator in (registration.mediators)() {
                binding.to_type(mediator);
            }
            applied += 1;
        }
        applied
    }
}

impl<I> MediationBinder<I> {
    /// Exact-type lookup. A binding for `A` is never returned for another
    /// type, whatever its relationship to `A`.
    pub fn lookup(&self, view: TypeKey) -> Option<&MediationBinding> {
        self.bindings.get_binding(&view)
    }

    /// Check if view type `V` is bound.
    pub fn contains<V: View>(&self) -> bool {
        self.bindings.contains_key(&TypeKey::of::<V>())
    }

    /// Iterate over all bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &MediationBinding> {
        self.bindings.iter()
    }

    /// Get the number of bound view types.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no view type is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The injection system views and mediators are submitted to.
    pub fn injector(&self) -> &I {
        &self.injector
    }

    /// The injection system, mutably (for configuration).
    pub fn injector_mut(&mut self) -> &mut I {
        &mut self.injector
    }
}
