//! Fixed-size circular doubly-linked ring.
//!
//! Nodes live in a single arena and link to their neighbours by index, so the
//! cycle needs no shared ownership. The ring is immutable once built.

use crate::error::RaffleError;

/// Identity of a node within the ring that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in the sequence the ring was built from.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

/// A circular arrangement of values with next/previous traversal.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Ring<T> {
    /// Build a ring over `values`, preserving their order as adjacency.
    ///
    /// The node at index `i` of `N` links forward to `(i + 1) mod N` and back
    /// to `(i - 1 + N) mod N`.
    pub fn build(values: impl IntoIterator<Item = T>) -> Result<Self, RaffleError> {
        let values: Vec<T> = values.into_iter().collect();
        let len = values.len();
        if len == 0 {
            return Err(RaffleError::EmptyRing);
        }

        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                next: (i + 1) % len,
                prev: (i + len - 1) % len,
            })
            .collect();

        Ok(Self { nodes })
    }

    /// Number of nodes in the ring. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Node seeded from position `index` of the input, if in range.
    pub fn node(&self, index: usize) -> Option<NodeId> {
        (index < self.nodes.len()).then_some(NodeId(index))
    }

    /// Node at `index` of the input, wrapping around the ring.
    pub fn wrapping_node(&self, index: usize) -> NodeId {
        NodeId(index % self.nodes.len())
    }

    /// All node ids in input order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn get(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    pub fn next(&self, id: NodeId) -> NodeId {
        NodeId(self.nodes[id.0].next)
    }

    pub fn prev(&self, id: NodeId) -> NodeId {
        NodeId(self.nodes[id.0].prev)
    }

    /// Follow `next` `steps` times.
    pub fn step_forward(&self, id: NodeId, steps: usize) -> NodeId {
        (0..steps).fold(id, |node, _| self.next(node))
    }

    /// Follow `prev` `steps` times.
    pub fn step_backward(&self, id: NodeId, steps: usize) -> NodeId {
        (0..steps).fold(id, |node, _| self.prev(node))
    }
}
