//! # liaison-core
//!
//! Core traits for the Liaison view mediation framework.
//!
//! This crate has minimal dependencies and is designed to be imported by host
//! runtimes and application code that only need the contracts, not the
//! standard implementations shipped in `liaison-std`.
//!
//! # Participants
//!
//! ## Views ([`View`])
//!
//! Presentation objects owned by the host runtime's scene graph. The host
//! decides when they are constructed and destroyed; Liaison only reacts.
//!
//! ## Mediators ([`Mediator`])
//!
//! Application-logic controllers created for a view instance and attached to
//! the same host object. Their lifetime is bounded by the view's.
//!
//! ## Injection ([`InjectionBinder`], [`Injectable`], [`Resolver`])
//!
//! Field population applied to views and mediators alike, independent of
//! whether a view is mediated.
//!
//! ## Scene graph ([`SceneGraph`])
//!
//! The only window into the host runtime: nested view discovery and mediator
//! component attachment/lookup, addressed by [`HostId`].
//!
//! # Error Types
//!
//! - [`MediationError`] - Everything `trigger` can return
//! - [`InjectionError`] - Failures of the standard injection contract
//! - [`SceneError`] - Failures reported by a scene graph

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod inject;
mod mediator;
mod scene;
mod types;
mod view;

// Re-exports
pub use error::{BoxError, InjectionError, MediationError, SceneError};
pub use event::{HookStage, MediationEvent};
pub use inject::{InjectionBinder, Injectable, Resolver};
pub use mediator::Mediator;
pub use scene::SceneGraph;
pub use types::{HostId, MediatorType, TypeKey, ViewLink};
pub use view::View;
