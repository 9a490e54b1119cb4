//! Testing utilities for Liaison.
//!
//! This module provides utilities to make testing mediators and dispatch
//! choreography easier.
//!
//! # Features
//!
//! - [`Journal`]: A per-thread log that hooks and injectors append to
//! - [`RecordingInjector`]: An injection binder that records what it injects
//! - [`RecordingMediator`]: A mediator that journals every hook call
//!
//! Mediators are built by the dispatcher through `Default`, so they cannot be
//! handed a shared handle at construction. They write to the thread-local
//! [`Journal`] instead, which keeps parallel tests isolated.

use liaison_core::{
    BoxError, InjectionBinder, Injectable, Mediator, Resolver, TypeKey, ViewLink,
};
use std::{
    cell::RefCell,
    marker::PhantomData,
    sync::{Arc, Mutex},
};

/// The last path segment of a type name, without generic arguments.
///
/// `my_app::ui::RecordingMediator<my_app::First>` becomes `First` when
/// passed the tag type, `Dialog` for `my_app::ui::Dialog`.
pub fn short_name(key: TypeKey) -> &'static str {
    let name = key.name();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// Journal
// ============================================================================

thread_local! {
    static JOURNAL: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// A thread-local, append-only log of lifecycle activity.
///
/// # Example
///
/// ```rust
/// use liaison_std::testing::Journal;
///
/// Journal::clear();
/// Journal::record("First on_register");
/// assert_eq!(Journal::take(), vec!["First on_register".to_string()]);
/// assert!(Journal::entries().is_empty());
/// ```
pub struct Journal;

impl Journal {
    /// Append an entry.
    pub fn record(entry: impl Into<String>) {
        let entry = entry.into();
        JOURNAL.with(|j| j.borrow_mut().push(entry));
    }

    /// Get a copy of all entries.
    pub fn entries() -> Vec<String> {
        JOURNAL.with(|j| j.borrow().clone())
    }

    /// Remove and return all entries.
    pub fn take() -> Vec<String> {
        JOURNAL.with(|j| std::mem::take(&mut *j.borrow_mut()))
    }

    /// Remove all entries.
    pub fn clear() {
        JOURNAL.with(|j| j.borrow_mut().clear());
    }

    /// Count entries equal to `entry`.
    pub fn count(entry: &str) -> usize {
        JOURNAL.with(|j| j.borrow().iter().filter(|e| *e == entry).count())
    }
}

// ============================================================================
// Recording Injector
// ============================================================================

/// A single `inject` call seen by a [`RecordingInjector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionRecord {
    /// The target's exact type.
    pub target: TypeKey,
    /// The flag the caller passed.
    pub enforce_binding_required: bool,
}

/// The error a [`RecordingInjector`] returns for types it was told to reject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("injection of `{0}` rejected by test injector")]
pub struct RejectedInjection(pub TypeKey);

#[derive(Default)]
struct RecorderState {
    bound: Vec<TypeKey>,
    injected: Vec<InjectionRecord>,
    reject: Vec<TypeKey>,
}

/// An injection binder that records every call.
///
/// Clones share state, so keep a clone to inspect after the original has
/// been moved into a binder. Each successful `inject` also journals
/// `"inject <Type>"` so injection can be ordered against mediator hooks.
///
/// # Example
///
/// ```rust,ignore
/// let injector = RecordingInjector::new();
/// let probe = injector.clone();
///
/// let mut binder = MediationBinder::new(injector);
/// binder.bind::<Dialog>();
///
/// assert_eq!(probe.bound(), vec![TypeKey::of::<Dialog>()]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingInjector {
    state: Arc<Mutex<RecorderState>>,
}

impl RecordingInjector {
    /// Create a new recording injector that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `inject` call for exactly `T` fail.
    pub fn reject<T: Injectable>(&self) -> &Self {
        self.state.lock().unwrap().reject.push(TypeKey::of::<T>());
        self
    }

    /// Types registered through `bind_self`, in call order.
    pub fn bound(&self) -> Vec<TypeKey> {
        self.state.lock().unwrap().bound.clone()
    }

    /// Every `inject` call, in call order (including rejected ones).
    pub fn injected(&self) -> Vec<InjectionRecord> {
        self.state.lock().unwrap().injected.clone()
    }

    /// Get the number of `inject` calls for exactly `T`.
    pub fn injected_count<T: Injectable>(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .injected
            .iter()
            .filter(|r| r.target.is::<T>())
            .count()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.bound.clear();
        state.injected.clear();
    }
}

impl Resolver for RecordingInjector {
    fn resolve_any(&self, _key: TypeKey) -> Option<&dyn std::any::Any> {
        None
    }
}

impl InjectionBinder for RecordingInjector {
    fn bind_self(&mut self, key: TypeKey) {
        self.state.lock().unwrap().bound.push(key);
    }

    fn is_bound(&self, key: TypeKey) -> bool {
        self.state.lock().unwrap().bound.contains(&key)
    }

    fn inject(
        &self,
        target: &mut dyn Injectable,
        enforce_binding_required: bool,
    ) -> Result<(), BoxError> {
        let key = target.type_key();
        {
            let mut state = self.state.lock().unwrap();
            state.injected.push(InjectionRecord {
                target: key,
                enforce_binding_required,
            });
            if state.reject.contains(&key) {
                return Err(Box::new(RejectedInjection(key)));
            }
        }
        Journal::record(format!("inject {}", short_name(key)));
        target.inject_fields(self)
    }
}

// ============================================================================
// Recording Mediator
// ============================================================================

/// A mediator that journals each hook as `"<Tag> <hook>"`.
///
/// The tag type only gives each instantiation its own identity, so
/// `RecordingMediator<First>` and `RecordingMediator<Second>` are distinct
/// mediator types. Injection is journaled as `"inject RecordingMediator"` by
/// [`RecordingInjector`].
pub struct RecordingMediator<Tag: 'static> {
    view: Option<ViewLink>,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag: 'static> RecordingMediator<Tag> {
    /// The view this mediator was linked to.
    pub fn view(&self) -> Option<ViewLink> {
        self.view
    }

    fn record(hook: &str) {
        Journal::record(format!("{} {}", short_name(TypeKey::of::<Tag>()), hook));
    }
}

impl<Tag: 'static> Default for RecordingMediator<Tag> {
    fn default() -> Self {
        Self {
            view: None,
            _tag: PhantomData,
        }
    }
}

impl<Tag: 'static> Injectable for RecordingMediator<Tag> {}

impl<Tag: 'static> Mediator for RecordingMediator<Tag> {
    fn set_view_component(&mut self, view: ViewLink) {
        Self::record("set_view_component");
        self.view = Some(view);
    }

    fn pre_register(&mut self) -> Result<(), BoxError> {
        Self::record("pre_register");
        Ok(())
    }

    fn on_register(&mut self) -> Result<(), BoxError> {
        Self::record("on_register");
        Ok(())
    }

    fn on_remove(&mut self) -> Result<(), BoxError> {
        Self::record("on_remove");
        Ok(())
    }
}
