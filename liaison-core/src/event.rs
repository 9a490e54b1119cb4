//! Lifecycle signals.

use std::fmt;

/// Lifecycle signal fired by the host runtime for a single view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediationEvent {
    /// The view was constructed and entered the live scene graph.
    Awake,
    /// The view is being destroyed.
    Destroyed,
    /// Reserved. The view's host object was enabled.
    Enabled,
    /// Reserved. The view's host object was disabled.
    Disabled,
}

impl fmt::Display for MediationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MediationEvent::Awake => "awake",
            MediationEvent::Destroyed => "destroyed",
            MediationEvent::Enabled => "enabled",
            MediationEvent::Disabled => "disabled",
        })
    }
}

/// The mediator hook that was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    /// [`Mediator::pre_register`](crate::Mediator::pre_register)
    PreRegister,
    /// [`Mediator::on_register`](crate::Mediator::on_register)
    OnRegister,
    /// [`Mediator::on_remove`](crate::Mediator::on_remove)
    OnRemove,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookStage::PreRegister => "pre_register",
            HookStage::OnRegister => "on_register",
            HookStage::OnRemove => "on_remove",
        })
    }
}
