// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small hierarchy of renderable boxes that answers child-union bounds queries.

use alloc::vec;
use alloc::vec::Vec;

use glam::Vec3;

use crate::{Aabb3, BoundsProvider, UnionSeed, union_bounds};

/// Identifier for a node in a [`BoundsTree`].
///
/// A slot index plus a generation counter. Removing a node frees its slot;
/// reusing the slot bumps the generation, so stale ids never alias a newer node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-node flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node and its subtree contribute to bounds queries.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    flags: NodeFlags,
    renderable: Option<Aabb3>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Hierarchy of optional world-space renderable boxes.
///
/// This is a reference [`BoundsProvider`] for hosts that do not have a scene
/// graph of their own, and for tests. Each node may carry a renderable box
/// (already in world space) and any number of children.
/// [`compute_bounds`](BoundsProvider::compute_bounds) unions the renderable
/// boxes of the anchor and every visible descendant.
///
/// A node without [`NodeFlags::VISIBLE`] hides its whole subtree.
///
/// ```
/// use glam::Vec3;
/// use understory_bounds::{Aabb3, BoundsProvider, BoundsTree};
///
/// let mut tree = BoundsTree::new();
/// let level = tree.insert(None, None);
/// tree.insert(Some(level), Some(Aabb3::from_center_size(Vec3::ZERO, Vec3::splat(20.0))));
///
/// let bounds = tree.compute_bounds(&level);
/// assert_eq!(bounds.size(), Vec3::splat(20.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoundsTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    seed: UnionSeed,
}

impl BoundsTree {
    /// Creates an empty tree using [`UnionSeed::Origin`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree using the given union seed.
    #[must_use]
    pub fn with_seed(seed: UnionSeed) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Returns the union seed used by bounds queries.
    #[must_use]
    pub fn seed(&self) -> UnionSeed {
        self.seed
    }

    /// Sets the union seed used by bounds queries.
    pub fn set_seed(&mut self, seed: UnionSeed) {
        self.seed = seed;
    }

    /// Inserts a node under `parent` (or as a root) and returns its id.
    ///
    /// A stale `parent` is ignored and the node becomes a root.
    pub fn insert(&mut self, parent: Option<NodeId>, renderable: Option<Aabb3>) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let node = Node {
            parent,
            children: Vec::new(),
            flags: NodeFlags::default(),
            renderable,
        };
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        };
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.push(id);
        }
        id
    }

    /// Removes `id` and its whole subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).map(|n| n.parent) else {
            return;
        };
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|&c| c != id);
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let slot = &mut self.slots[next.idx()];
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
                self.free.push(next.0);
            }
        }
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the parent of a live node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the children of a live node, in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns the flags of a live node.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node(id).map(|n| n.flags)
    }

    /// Sets the flags of a live node.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(node) = self.node_mut(id) {
            node.flags = flags;
        }
    }

    /// Returns the renderable box of a live node.
    #[must_use]
    pub fn renderable(&self, id: NodeId) -> Option<Aabb3> {
        self.node(id).and_then(|n| n.renderable)
    }

    /// Sets or clears the renderable box of a live node.
    pub fn set_renderable(&mut self, id: NodeId, renderable: Option<Aabb3>) {
        if let Some(node) = self.node_mut(id) {
            node.renderable = renderable;
        }
    }

    /// Moves every renderable box in the subtree rooted at `id` by `offset`.
    pub fn translate_subtree(&mut self, id: NodeId, offset: Vec3) {
        if !self.is_alive(id) {
            return;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.node_mut(next) {
                node.renderable = node.renderable.map(|b| b.translated(offset));
                stack.extend_from_slice(&node.children);
            }
        }
    }

    /// Calls `f` with every visible renderable box under `anchor`, in pre-order.
    pub fn visit_visible(&self, anchor: NodeId, mut f: impl FnMut(NodeId, Aabb3)) {
        let mut stack = vec![anchor];
        while let Some(next) = stack.pop() {
            let Some(node) = self.node(next) else {
                continue;
            };
            if !node.flags.contains(NodeFlags::VISIBLE) {
                continue;
            }
            if let Some(bounds) = node.renderable {
                f(next, bounds);
            }
            stack.extend(node.children.iter().rev());
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.node.as_mut())
    }
}

impl BoundsProvider<NodeId> for BoundsTree {
    fn compute_bounds(&self, anchor: &NodeId) -> Aabb3 {
        let mut boxes = Vec::new();
        self.visit_visible(*anchor, |_, b| boxes.push(b));
        union_bounds(boxes, self.seed)
    }
}
