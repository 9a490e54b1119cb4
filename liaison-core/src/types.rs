//! Identity types shared by every layer.

use crate::mediator::Mediator;
use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// Exact runtime type identity.
///
/// Wraps a [`TypeId`] together with the type name for diagnostics. Equality
/// and hashing only consider the `TypeId`, so two keys are equal exactly when
/// they name the same concrete type. There is no notion of subtyping: a
/// newtype around `Dialog` has a different key than `Dialog`.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this key names `T`.
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Handle of a host object in the scene graph.
///
/// A host object carries at most one view component and any number of
/// mediator components. Host runtimes map their own object handles onto this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(pub u64);

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Back-reference handed to a mediator so it can reach its view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewLink {
    /// Host object carrying both the view and the mediator.
    pub host: HostId,
    /// Exact runtime type of the view.
    pub view_type: TypeKey,
}

/// A bindable mediator type: its key plus a constructor for fresh instances.
///
/// Only types implementing [`Mediator`] and [`Default`] can be turned into a
/// `MediatorType`, so a binding can never hold a value that is not a mediator.
#[derive(Clone, Copy)]
pub struct MediatorType {
    key: TypeKey,
    create: fn() -> Box<dyn Mediator>,
}

fn create_default<M: Mediator + Default>() -> Box<dyn Mediator> {
    Box::new(M::default())
}

impl MediatorType {
    /// The mediator type `M`.
    pub fn of<M: Mediator + Default>() -> Self {
        Self {
            key: TypeKey::of::<M>(),
            create: create_default::<M>,
        }
    }

    /// The mediator's type key.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Construct a fresh, not yet registered instance.
    pub fn instantiate(&self) -> Box<dyn Mediator> {
        (self.create)()
    }
}

impl PartialEq for MediatorType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for MediatorType {}

impl Hash for MediatorType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for MediatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MediatorType").field(&self.key.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dialog;
    struct FancyDialog(#[allow(dead_code)] Dialog);

    #[test]
    fn test_type_key_is_exact() {
        assert_eq!(TypeKey::of::<Dialog>(), TypeKey::of::<Dialog>());
        assert_ne!(TypeKey::of::<Dialog>(), TypeKey::of::<FancyDialog>());
        assert!(TypeKey::of::<Dialog>().is::<Dialog>());
        assert!(!TypeKey::of::<FancyDialog>().is::<Dialog>());
    }

    #[test]
    fn test_type_key_display_uses_name() {
        let key = TypeKey::of::<Dialog>();
        assert!(key.to_string().ends_with("Dialog"));
        assert_eq!(key.name(), key.to_string());
    }

    #[test]
    fn test_host_id_display() {
        assert_eq!(HostId(7).to_string(), "#7");
    }
}
