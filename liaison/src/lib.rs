//! # liaison - View/Mediator Binding
//!
//! `liaison` associates view types with mediator types and keeps mediator
//! instances in step with the views the host runtime creates and destroys.
//! The host owns the scene graph and decides when views live; it reports
//! each construction and destruction through a single entry point,
//! [`MediationDispatcher::trigger`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use liaison::prelude::*;
//!
//! // Configuration: bind view types to mediators.
//! let mut binder = MediationBinder::new(Container::new());
//! binder.bind::<Dialog>().to::<DialogMediator>();
//!
//! let dispatcher = MediationDispatcher::new(binder);
//!
//! // Host runtime: report lifecycle events.
//! dispatcher.trigger(&mut scene, MediationEvent::Awake, dialog_host)?;
//! dispatcher.trigger(&mut scene, MediationEvent::Destroyed, dialog_host)?;
//! ```
//!
//! ## Crate Features
//!
//! - `tracing` (default): structured logs through the `tracing` crate
//! - `macros`: `#[derive(View)]` and `#[derive(Injectable)]`
//! - `inventory`: link-time collected bindings

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binder;
mod dispatcher;

pub use binder::{MediationBinder, MediationBinding};
pub use dispatcher::{DispatchOptions, DispatcherBuilder, MediationDispatcher};

pub use liaison_core::{
    // Errors
    BoxError,
    InjectionError,
    MediationError,
    SceneError,
    // Lifecycle
    HookStage,
    MediationEvent,
    // Identity
    HostId,
    MediatorType,
    TypeKey,
    ViewLink,
    // Participants
    Injectable,
    Mediator,
    View,
    // Collaborators
    InjectionBinder,
    Resolver,
    SceneGraph,
};

pub use liaison_std::{Binder, Binding, Container, RawBinding, SceneTree};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use liaison_std::testing::*;
}

/// Link-time collected bindings.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use liaison_std::collected::{BindingRegistration, registrations};
}

/// Prelude module - common imports for Liaison.
///
/// # Usage
///
/// ```rust,ignore
/// use liaison::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Container, HostId, InjectionBinder, Injectable, MediationBinder,
        MediationDispatcher, MediationError, MediationEvent, Mediator, Resolver, SceneGraph,
        SceneTree, TypeKey, View, ViewLink,
    };
}

#[cfg(feature = "macros")]
pub use liaison_macros::{Injectable, View};

#[cfg(feature = "inventory")]
pub use inventory;
