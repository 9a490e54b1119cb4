//! Error types for Liaison.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`MediationError`] - Everything a lifecycle dispatch can fail with
//! - [`InjectionError`] - Failures of the standard injection contract
//! - [`SceneError`] - Failures reported by a scene graph
//!
//! Collaborators (injectors, mediator hooks) hand their failures over as a
//! [`BoxError`], so the dispatcher can pass them through untouched.

use crate::{
    event::HookStage,
    types::{HostId, TypeKey},
};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by a lifecycle dispatch.
#[derive(Error, Debug)]
pub enum MediationError {
    /// The host object has no view component.
    #[error("no view is attached to host {0}")]
    UnknownView(HostId),

    /// The injection system failed. Display and source are the injector's own.
    #[error(transparent)]
    Injection(BoxError),

    /// The scene graph refused an operation.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// A mediator lifecycle hook failed.
    #[error("mediator `{mediator}` failed during {stage}")]
    Hook {
        /// Exact type of the failing mediator.
        mediator: TypeKey,
        /// The hook that was running.
        stage: HookStage,
        /// The hook's error.
        #[source]
        source: BoxError,
    },
}

impl MediationError {
    /// Borrow the injector's original error, if this is an injection failure.
    pub fn injection_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            MediationError::Injection(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Errors that can occur while injecting an object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectionError {
    /// The target type was never bound and the caller required a binding.
    #[error("type `{target}` is not bound for injection")]
    Unbound {
        /// The target's type.
        target: TypeKey,
    },

    /// A field dependency could not be resolved.
    #[error("cannot inject `{target}`: no value provided for `{dependency}`")]
    MissingDependency {
        /// The object being injected.
        target: TypeKey,
        /// The dependency that was requested.
        dependency: TypeKey,
    },
}

/// Errors that can occur in scene graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The host object does not exist (or was already destroyed).
    #[error("host {0} does not exist")]
    MissingHost(HostId),

    /// The host object exists but carries no view.
    #[error("host {0} has no view component")]
    MissingView(HostId),
}

// Convenience conversions
impl From<InjectionError> for MediationError {
    fn from(err: InjectionError) -> Self {
        MediationError::Injection(Box::new(err))
    }
}
