//! Host scene graph contract.

use crate::{
    error::SceneError,
    mediator::Mediator,
    types::{HostId, TypeKey},
    view::View,
};

/// The host runtime's scene graph, as far as mediation needs it.
///
/// Every operation is addressed by the [`HostId`] of a host object. A host
/// object carries at most one view and any number of mediators.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a SceneGraph",
    label = "missing `SceneGraph` implementation",
    note = "Implement `SceneGraph` for your host runtime's object tree."
)]
pub trait SceneGraph {
    /// Hosts carrying a view in `host`'s subtree, in preorder.
    ///
    /// `host` itself is included when it carries a view. Inactive hosts (and
    /// everything below them) are skipped unless `include_inactive` is set.
    fn views_in_children(&self, host: HostId, include_inactive: bool) -> Vec<HostId>;

    /// The view carried by `host`.
    fn view_mut(&mut self, host: HostId) -> Option<&mut dyn View>;

    /// Attach `mediator` to `host` and return it.
    fn add_mediator(
        &mut self,
        host: HostId,
        mediator: Box<dyn Mediator>,
    ) -> Result<&mut dyn Mediator, SceneError>;

    /// The first mediator of exactly `mediator_type` attached to `host`.
    fn mediator_mut(&mut self, host: HostId, mediator_type: TypeKey) -> Option<&mut dyn Mediator>;
}

impl<S: SceneGraph + ?Sized> SceneGraph for &mut S {
    fn views_in_children(&self, host: HostId, include_inactive: bool) -> Vec<HostId> {
        (**self).views_in_children(host, include_inactive)
    }

    fn view_mut(&mut self, host: HostId) -> Option<&mut dyn View> {
        (**self).view_mut(host)
    }

    fn add_mediator(
        &mut self,
        host: HostId,
        mediator: Box<dyn Mediator>,
    ) -> Result<&mut dyn Mediator, SceneError> {
        (**self).add_mediator(host, mediator)
    }

    fn mediator_mut(&mut self, host: HostId, mediator_type: TypeKey) -> Option<&mut dyn Mediator> {
        (**self).mediator_mut(host, mediator_type)
    }
}
