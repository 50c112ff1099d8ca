//! Node-ring backend: preallocated nodes linked into a fixed cycle
//!
//! 节点环后端：预分配的节点连接成固定的环
//!
//! Nodes live in an arena and link to their successor by [`NodeId`], so the
//! cycle owns every node as a unit and no reference cycle exists. Nodes are
//! only created when the cycle is built (construction, resize, copy); `add`
//! and `get` just move the cursors along the links.
//!
//! 节点存放在 arena 中，通过 [`NodeId`] 链接到后继节点，因此整个环作为一个整体
//! 拥有所有节点，不存在引用环。节点只在构建环时创建（构造、resize、复制）；
//! `add` 和 `get` 只沿链接移动游标。

use crate::core::Backend;
use crate::ring::Ring;

/// Thread-safe ring buffer backed by a cycle of preallocated nodes
///
/// 基于预分配节点环的线程安全环形缓冲区
///
/// Behaves exactly like [`ArrayRing`](crate::ArrayRing); only the storage differs.
///
/// 行为与 [`ArrayRing`](crate::ArrayRing) 完全一致，仅存储方式不同。
///
/// # Examples
///
/// ```
/// use lockring::NodeRing;
///
/// let ring = NodeRing::new(2);
/// ring.add("teatea").unwrap();
/// ring.add("teitei").unwrap();
/// assert_eq!(ring.add("toatoa"), Ok(Some("teatea")));
///
/// assert_eq!(ring.try_get(), Some("teitei"));
/// assert_eq!(ring.try_get(), Some("toatoa"));
/// assert_eq!(ring.try_get(), None);
/// ```
pub type NodeRing<T> = Ring<NodeCycle<T>>;

/// Identifies one node of a [`NodeCycle`]
///
/// 标识 [`NodeCycle`] 中的一个节点
///
/// Only meaningful for the cycle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Node<T> {
    value: Option<T>,
    next: NodeId,
}

/// Cycle of nodes, each holding one value slot and a forward link
///
/// 节点组成的环，每个节点包含一个值槽位和一个前向链接
pub struct NodeCycle<T> {
    nodes: Vec<Node<T>>,
    head: NodeId,
}

impl<T> NodeCycle<T> {
    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> Backend for NodeCycle<T> {
    type Item = T;
    type Cursor = NodeId;

    /// Create `capacity` nodes, link each to the next and the last back to the first
    fn with_capacity(capacity: usize) -> Self {
        let nodes = (0..capacity)
            .map(|index| Node {
                value: None,
                next: NodeId(if index + 1 == capacity { 0 } else { index + 1 }),
            })
            .collect();

        Self {
            nodes,
            head: NodeId(0),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn head(&self) -> NodeId {
        self.head
    }

    #[inline]
    fn advance(&self, cursor: NodeId) -> NodeId {
        self.node(cursor).next
    }

    fn distance(&self, from: NodeId, to: NodeId) -> usize {
        let mut steps = 0;
        let mut current = from;

        // Bounded by the cycle length so a foreign id cannot spin forever.
        while current != to && steps < self.nodes.len() {
            current = self.advance(current);
            steps += 1;
        }

        steps
    }

    fn cursor_at(&self, offset: usize) -> NodeId {
        if self.nodes.is_empty() {
            return self.head;
        }

        (0..offset % self.nodes.len()).fold(self.head, |current, _| self.advance(current))
    }

    #[inline]
    fn slot_mut(&mut self, cursor: NodeId) -> &mut Option<T> {
        &mut self.nodes[cursor.0].value
    }

    fn duplicate(&self, start: NodeId, len: usize) -> (Self, NodeId, NodeId)
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.nodes.len());

        // Ids are private to each cycle, so the start is located by its
        // position from the head and the arc is then walked in lockstep.
        let new_start = copy.cursor_at(self.distance(self.head, start));
        let mut source = start;
        let mut target = new_start;
        for _ in 0..len {
            copy.nodes[target.0].value = self.node(source).value.clone();
            source = self.advance(source);
            target = copy.advance(target);
        }

        (copy, new_start, target)
    }
}
