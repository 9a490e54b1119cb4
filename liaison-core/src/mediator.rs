//! Mediator contract.

use crate::{error::BoxError, inject::Injectable, types::ViewLink};

/// An application-logic controller attached to a single view instance.
///
/// On creation the hooks run in this order, each mediator finishing before
/// the next one starts:
///
/// 1. [`set_view_component`](Mediator::set_view_component)
/// 2. [`pre_register`](Mediator::pre_register)
/// 3. field injection
/// 4. [`on_register`](Mediator::on_register)
///
/// [`on_remove`](Mediator::on_remove) runs when the view is destroyed.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct DialogMediator {
///     view: Option<ViewLink>,
/// }
///
/// impl Injectable for DialogMediator {}
///
/// impl Mediator for DialogMediator {
///     fn set_view_component(&mut self, view: ViewLink) {
///         self.view = Some(view);
///     }
///
///     fn on_register(&mut self) -> Result<(), BoxError> {
///         // subscribe to application signals
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Mediator",
    label = "missing `Mediator` implementation",
    note = "Mediators must implement `set_view_component` and `Injectable`."
)]
pub trait Mediator: Injectable {
    /// Link the mediator back to its view.
    fn set_view_component(&mut self, view: ViewLink);

    /// Runs before field injection.
    fn pre_register(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Runs after field injection.
    fn on_register(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Runs when the view is destroyed.
    fn on_remove(&mut self) -> Result<(), BoxError> {
        Ok(())
    }
}
