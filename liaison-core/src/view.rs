//! View contract.

use crate::inject::Injectable;

/// A presentation object living in the host runtime's scene graph.
///
/// Views are injected whenever an enclosing view wakes up, whether or not
/// they are bound to any mediator. Implement it by hand or with
/// `#[derive(View)]` from `liaison-macros`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a View",
    label = "missing `View` implementation",
    note = "Views must expose the `registered_with_context` flag and implement `Injectable`."
)]
pub trait View: Injectable {
    /// Whether the mediation layer has processed this view.
    fn registered_with_context(&self) -> bool;

    /// Set by the mediation layer when it processes this view.
    fn set_registered_with_context(&mut self, registered: bool);
}
