//! In-memory scene graph.
//!
//! [`SceneTree`] is a small arena of host objects implementing
//! [`SceneGraph`]. Headless hosts and tests use it in place of an engine's
//! object tree.

use liaison_core::{HostId, Mediator, SceneError, SceneGraph, TypeKey, View};
use std::{any::Any, collections::HashMap};

struct Node {
    parent: Option<HostId>,
    children: Vec<HostId>,
    active: bool,
    view: Option<Box<dyn View>>,
    mediators: Vec<Box<dyn Mediator>>,
}

impl Node {
    fn new(parent: Option<HostId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            active: true,
            view: None,
            mediators: Vec::new(),
        }
    }
}

/// An arena-backed tree of host objects.
///
/// # Example
/// ```rust,ignore
/// let mut scene = SceneTree::new();
/// let panel = scene.spawn_root();
/// let dialog = scene.spawn_child(panel)?;
/// scene.attach_view(panel, Panel::default())?;
/// scene.attach_view(dialog, Dialog::default())?;
/// ```
#[derive(Default)]
pub struct SceneTree {
    nodes: HashMap<HostId, Node>,
    next_id: u64,
}

impl SceneTree {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, parent: Option<HostId>) -> HostId {
        self.next_id += 1;
        let id = HostId(self.next_id);
        self.nodes.insert(id, Node::new(parent));
        id
    }

    fn node(&self, host: HostId) -> Result<&Node, SceneError> {
        self.nodes.get(&host).ok_or(SceneError::MissingHost(host))
    }

    fn node_mut(&mut self, host: HostId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(&host).ok_or(SceneError::MissingHost(host))
    }

    /// Create a host object without a parent.
    pub fn spawn_root(&mut self) -> HostId {
        self.allocate(None)
    }

    /// Create a host object as the last child of `parent`.
    pub fn spawn_child(&mut self, parent: HostId) -> Result<HostId, SceneError> {
        self.node(parent)?;
        let id = self.allocate(Some(parent));
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Put `view` on `host`, replacing any view already there.
    pub fn attach_view<V: View>(&mut self, host: HostId, view: V) -> Result<(), SceneError> {
        self.node_mut(host)?.view = Some(Box::new(view));
        Ok(())
    }

    /// Enable or disable `host`. Disabling hides its whole subtree from
    /// lookups that exclude inactive objects.
    pub fn set_active(&mut self, host: HostId, active: bool) -> Result<(), SceneError> {
        self.node_mut(host)?.active = active;
        Ok(())
    }

    /// Whether `host` itself is enabled.
    pub fn is_active(&self, host: HostId) -> bool {
        self.nodes.get(&host).is_some_and(|n| n.active)
    }

    /// Remove `host` and its whole subtree, dropping their views and
    /// mediators. Returns the removed hosts, children before parents.
    pub fn destroy(&mut self, host: HostId) -> Result<Vec<HostId>, SceneError> {
        let parent = self.node(host)?.parent;
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != host);
        }

        let mut removed = Vec::new();
        let mut stack = vec![(host, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                self.nodes.remove(&id);
                removed.push(id);
                continue;
            }
            stack.push((id, true));
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev().map(|c| (*c, false)));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(host = %host, removed = removed.len(), "Destroyed host subtree");

        Ok(removed)
    }

    /// Check if `host` exists.
    pub fn contains(&self, host: HostId) -> bool {
        self.nodes.contains_key(&host)
    }

    /// The parent of `host`.
    pub fn parent(&self, host: HostId) -> Option<HostId> {
        self.nodes.get(&host).and_then(|n| n.parent)
    }

    /// The children of `host`, in creation order.
    pub fn children(&self, host: HostId) -> &[HostId] {
        self.nodes
            .get(&host)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// The view on `host`, if it has exactly type `V`.
    pub fn view<V: View>(&self, host: HostId) -> Option<&V> {
        let view: &dyn Any = self.nodes.get(&host)?.view.as_deref()?;
        view.downcast_ref()
    }

    /// The view on `host`, as a trait object.
    pub fn view_dyn(&self, host: HostId) -> Option<&dyn View> {
        self.nodes.get(&host)?.view.as_deref()
    }

    /// All mediators attached to `host`, in attachment order.
    pub fn mediators(&self, host: HostId) -> &[Box<dyn Mediator>] {
        self.nodes
            .get(&host)
            .map(|n| n.mediators.as_slice())
            .unwrap_or(&[])
    }

    /// Every mediator of exactly type `M` attached to `host`.
    pub fn mediators_of<M: Mediator>(&self, host: HostId) -> impl Iterator<Item = &M> + '_ {
        self.mediators(host).iter().filter_map(|m| {
            let m: &dyn Any = &**m;
            m.downcast_ref::<M>()
        })
    }

    /// The first mediator of exactly type `M` attached to `host`.
    pub fn mediator<M: Mediator>(&self, host: HostId) -> Option<&M> {
        self.mediators_of::<M>(host).next()
    }

    /// Get the number of mediators attached to `host`.
    pub fn mediator_count(&self, host: HostId) -> usize {
        self.mediators(host).len()
    }

    /// Get the number of host objects.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the scene has no host objects.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneGraph for SceneTree {
    fn views_in_children(&self, host: HostId, include_inactive: bool) -> Vec<HostId> {
        let mut found = Vec::new();
        let mut stack = vec![host];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if !include_inactive && !node.active {
                continue;
            }
            if node.view.is_some() {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn view_mut(&mut self, host: HostId) -> Option<&mut dyn View> {
        match self.nodes.get_mut(&host)?.view.as_mut() {
            Some(view) => Some(&mut **view),
            None => None,
        }
    }

    fn add_mediator(
        &mut self,
        host: HostId,
        mediator: Box<dyn Mediator>,
    ) -> Result<&mut dyn Mediator, SceneError> {
        let node = self.node_mut(host)?;
        node.mediators.push(mediator);
        match node.mediators.last_mut() {
            Some(mediator) => Ok(&mut **mediator),
            None => Err(SceneError::MissingHost(host)),
        }
    }

    fn mediator_mut(&mut self, host: HostId, mediator_type: TypeKey) -> Option<&mut dyn Mediator> {
        let node = self.nodes.get_mut(&host)?;
        for mediator in node.mediators.iter_mut() {
            if mediator.type_key() == mediator_type {
                return Some(&mut **mediator);
            }
        }
        None
    }
}
