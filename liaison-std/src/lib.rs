//! # liaison-std
//!
//! Standard implementations for the Liaison view mediation framework.
//!
//! This crate provides:
//! - **Generic binding table**: [`Binder`], [`Binding`], [`RawBinding`]
//! - **Reference host**: [`SceneTree`], an in-memory scene graph
//! - **Reference injector**: [`Container`]
//! - **Collected registrations**: `collected` (with the `inventory` feature)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use liaison_core;

// Modules
pub mod binder;
#[cfg(feature = "inventory")]
pub mod collected;
pub mod container;
pub mod scene;
pub mod testing;

pub use binder::{Binder, Binding, RawBinding};
pub use container::Container;
pub use scene::SceneTree;

#[cfg(feature = "inventory")]
pub use inventory;
