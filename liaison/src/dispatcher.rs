//! Lifecycle dispatch.
//!
//! The host runtime reports view lifecycle events through
//! [`MediationDispatcher::trigger`]. On `Awake` the dispatcher injects every
//! nested view below the woken one and then, if the view's exact type is
//! bound, creates its mediators. On `Destroyed` it calls `on_remove` on the
//! mediators it finds attached.
//!
//! Dispatch is synchronous and runs to completion. Nothing is rolled back on
//! failure: mediators attached before an error stay attached.

use crate::binder::{MediationBinder, MediationBinding};
use liaison_core::{
    BoxError, HookStage, HostId, InjectionBinder, MediationError, MediationEvent, MediatorType,
    SceneGraph, ViewLink,
};
use std::sync::Arc;

/// Dispatcher settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Include inactive descendants when injecting nested views.
    pub include_inactive: bool,
    /// Require mediator types to be bound with the injector.
    pub enforce_mediator_bindings: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            include_inactive: true,
            enforce_mediator_bindings: false,
        }
    }
}

/// Builder for a [`MediationDispatcher`] with non-default options.
///
/// # Example
/// ```ignore
/// let dispatcher = MediationDispatcher::builder(binder)
///     .include_inactive(false)
///     .build();
/// ```
pub struct DispatcherBuilder<I> {
    binder: Arc<MediationBinder<I>>,
    options: DispatchOptions,
}

impl<I: InjectionBinder> DispatcherBuilder<I> {
    /// Whether nested view discovery descends into inactive hosts.
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.options.include_inactive = include;
        self
    }

    /// Whether mediator injection requires an injection binding.
    pub fn enforce_mediator_bindings(mut self, enforce: bool) -> Self {
        self.options.enforce_mediator_bindings = enforce;
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> MediationDispatcher<I> {
        MediationDispatcher {
            binder: self.binder,
            options: self.options,
        }
    }
}

/// Creates and tears down mediators as the host reports view lifecycle
/// events.
///
/// The dispatcher does not deduplicate: the host must fire `Awake` exactly
/// once per view construction and `Destroyed` exactly once per destruction.
/// A second `Awake` for the same live view attaches a second set of
/// mediators.
pub struct MediationDispatcher<I> {
    binder: Arc<MediationBinder<I>>,
    options: DispatchOptions,
}

impl<I> Clone for MediationDispatcher<I> {
    fn clone(&self) -> Self {
        Self {
            binder: self.binder.clone(),
            options: self.options,
        }
    }
}

fn hook_failure(
    mediator: &MediatorType,
    stage: HookStage,
) -> impl FnOnce(BoxError) -> MediationError {
    let mediator = mediator.key();
    move |source| MediationError::Hook {
        mediator,
        stage,
        source,
    }
}

impl<I: InjectionBinder> MediationDispatcher<I> {
    /// Create a dispatcher with default options.
    pub fn new(binder: impl Into<Arc<MediationBinder<I>>>) -> Self {
        Self::builder(binder).build()
    }

    /// Start building a dispatcher.
    pub fn builder(binder: impl Into<Arc<MediationBinder<I>>>) -> DispatcherBuilder<I> {
        DispatcherBuilder {
            binder: binder.into(),
            options: DispatchOptions::default(),
        }
    }

    /// The registry this dispatcher reads.
    pub fn binder(&self) -> &MediationBinder<I> {
        &self.binder
    }

    /// The options in effect.
    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    /// Handle a lifecycle `event` for the view on host `view`.
    ///
    /// On [`Awake`](MediationEvent::Awake) the view and every nested view are
    /// marked registered, nested views are injected, then bound mediators are
    /// created in registration order. On
    /// [`Destroyed`](MediationEvent::Destroyed) bound mediators found on the
    /// host get `on_remove`. Reserved events do nothing.
    ///
    /// The view on `view` itself is marked but never injected; hosts that
    /// need a root view's fields populated must inject it themselves.
    pub fn trigger<S>(
        &self,
        scene: &mut S,
        event: MediationEvent,
        view: HostId,
    ) -> Result<(), MediationError>
    where
        S: SceneGraph + ?Sized,
    {
        let view_type = {
            let target = scene
                .view_mut(view)
                .ok_or(MediationError::UnknownView(view))?;
            if event == MediationEvent::Awake {
                target.set_registered_with_context(true);
            }
            target.type_key()
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(%event, host = %view, view_type = %view_type, "Mediation trigger");

        if event == MediationEvent::Awake {
            self.init_children(scene, view)?;
        }

        let Some(binding) = self.binder.lookup(view_type) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(view_type = %view_type, "View type is not bound, skipping mediation");
            return Ok(());
        };

        match event {
            MediationEvent::Awake => self.map_view(scene, view, binding),
            MediationEvent::Destroyed => self.unmap_view(scene, view, binding),
            MediationEvent::Enabled | MediationEvent::Disabled => Ok(()),
        }
    }

    /// Mark and inject every view below `view`, without mediating them.
    fn init_children<S>(&self, scene: &mut S, view: HostId) -> Result<(), MediationError>
    where
        S: SceneGraph + ?Sized,
    {
        let injector = self.binder.injector();
        for host in scene.views_in_children(view, self.options.include_inactive) {
            if host == view {
                continue;
            }
            let Some(nested) = scene.view_mut(host) else {
                continue;
            };
            nested.set_registered_with_context(true);

            #[cfg(feature = "tracing")]
            tracing::trace!(host = %host, view_type = %nested.type_key(), "Injecting nested view");

            injector
                .inject(nested, false)
                .map_err(MediationError::Injection)?;
        }
        Ok(())
    }

    fn map_view<S>(
        &self,
        scene: &mut S,
        view: HostId,
        binding: &MediationBinding,
    ) -> Result<(), MediationError>
    where
        S: SceneGraph + ?Sized,
    {
        let injector = self.binder.injector();
        let link = ViewLink {
            host: view,
            view_type: binding.view_type(),
        };
        for mediator_type in binding.mediators() {
            let mediator = scene.add_mediator(view, mediator_type.instantiate())?;
            mediator.set_view_component(link);
            mediator
                .pre_register()
                .map_err(hook_failure(mediator_type, HookStage::PreRegister))?;
            injector
                .inject(&mut *mediator, self.options.enforce_mediator_bindings)
                .map_err(MediationError::Injection)?;
            mediator
                .on_register()
                .map_err(hook_failure(mediator_type, HookStage::OnRegister))?;

            #[cfg(feature = "tracing")]
            tracing::trace!(host = %view, mediator = %mediator_type.key(), "Mediator registered");
        }
        Ok(())
    }

    fn unmap_view<S>(
        &self,
        scene: &mut S,
        view: HostId,
        binding: &MediationBinding,
    ) -> Result<(), MediationError>
    where
        S: SceneGraph + ?Sized,
    {
        for mediator_type in binding.mediators() {
            let Some(mediator) = scene.mediator_mut(view, mediator_type.key()) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    host = %view,
                    mediator = %mediator_type.key(),
                    "No mediator to remove"
                );
                continue;
            };
            mediator
                .on_remove()
                .map_err(hook_failure(mediator_type, HookStage::OnRemove))?;

            #[cfg(feature = "tracing")]
            tracing::trace!(host = %view, mediator = %mediator_type.key(), "Mediator removed");
        }
        Ok(())
    }
}
