//! Generic key/value binding table.
//!
//! A [`Binder`] maps each key to exactly one binding. Bindings are created
//! through the [`RawBinding`] factory so specialised binders can store their
//! own binding type while reusing the table.
//!
//! # Example
//!
//! ```rust
//! use liaison_std::{Binder, Binding};
//!
//! let mut binder: Binder<Binding<&str, u32>> = Binder::new();
//! binder.bind("evens").to(2).to(4);
//! binder.bind("odds").to(1);
//!
//! assert_eq!(binder.get_binding(&"evens").unwrap().values(), &[2, 4]);
//! ```

use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
};

/// A binding that a [`Binder`] can create from a bare key.
pub trait RawBinding {
    /// The key the binding is stored under.
    type Key: Hash + Eq + Clone;

    /// Create an empty binding for `key`.
    fn new(key: Self::Key) -> Self;

    /// The binding's key.
    fn key(&self) -> &Self::Key;
}

/// A key with an ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Binding<K, V> {
    /// Append a value. Values keep the order they were added in.
    pub fn to(&mut self, value: V) -> &mut Self {
        self.values.push(value);
        self
    }

    /// The bound values, in registration order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Get the number of bound values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no value has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Hash + Eq + Clone, V> RawBinding for Binding<K, V> {
    type Key = K;

    fn new(key: K) -> Self {
        Self {
            key,
            values: Vec::new(),
        }
    }

    fn key(&self) -> &K {
        &self.key
    }
}

/// A table of bindings, at most one per key.
pub struct Binder<B: RawBinding> {
    bindings: HashMap<B::Key, B>,
}

impl<B: RawBinding> Binder<B> {
    /// Create a new empty binder.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Start a fresh binding for `key`.
    ///
    /// An existing binding for the same key is replaced, not extended: the
    /// last registration wins.
    pub fn bind(&mut self, key: B::Key) -> &mut B {
        let binding = B::new(key.clone());
        match self.bindings.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(binding);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(binding),
        }
    }

    /// Get the binding for `key`.
    pub fn get_binding(&self, key: &B::Key) -> Option<&B> {
        self.bindings.get(key)
    }

    /// Get the binding for `key` mutably.
    pub fn get_binding_mut(&mut self, key: &B::Key) -> Option<&mut B> {
        self.bindings.get_mut(key)
    }

    /// Check if `key` is bound.
    pub fn contains_key(&self, key: &B::Key) -> bool {
        self.bindings.contains_key(key)
    }

    /// Remove and return the binding for `key`.
    pub fn unbind(&mut self, key: &B::Key) -> Option<B> {
        self.bindings.remove(key)
    }

    /// Iterate over all bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.bindings.values()
    }

    /// Get the number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<B: RawBinding> Default for Binder<B> {
    fn default() -> Self {
        Self::new()
    }
}
