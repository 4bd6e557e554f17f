//! Crate private access to tree internals, for the validator, the DOT
//! exporter and the fixture builder. Ordinary callers only see the map
//! API on [`Rbtree`].

use std::cmp::Ordering;

use crate::compare::Compare;
use crate::node::{Node, NIL};
use crate::rbtree::Rbtree;

#[cfg(any(test, feature = "builder"))]
use crate::node::{self, Color, Side};

/// Read-only view over the linked structure.
pub(crate) trait RawTree<K, V> {
    fn name(&self) -> String;

    /// Arena, the sentinel lives at [`NIL`].
    fn nodes(&self) -> &[Node<K, V>];

    fn root(&self) -> usize;

    /// Number of entries as counted by the tree.
    fn count(&self) -> usize;

    fn compare_keys(&self, a: &K, b: &K) -> Ordering;

    #[inline]
    fn sentinel(&self) -> &Node<K, V> {
        &self.nodes()[NIL]
    }
}

impl<K, V, C> RawTree<K, V> for Rbtree<K, V, C>
where
    C: Compare<K>,
{
    fn name(&self) -> String {
        self.id()
    }

    fn nodes(&self) -> &[Node<K, V>] {
        &self.nodes
    }

    fn root(&self) -> usize {
        self.root_node()
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn compare_keys(&self, a: &K, b: &K) -> Ordering {
        self.compare().compare(a, b)
    }
}

/// Construct nodes bypassing insertion, for hand-made fixtures.
#[cfg(any(test, feature = "builder"))]
pub(crate) trait RawBuild<K, V>: RawTree<K, V> {
    /// Allocate a node with every link at the sentinel.
    fn new_detached(&mut self, key: K, value: V, color: Color) -> usize;

    /// Hang `child` under `parent` at `side` and count it.
    fn link_child(&mut self, parent: usize, side: Side, child: usize);

    /// Make `node` the root and count it.
    fn install_root(&mut self, node: usize);

    /// Recompute the sentinel's cached root and minimum from whatever
    /// structure was assembled.
    fn finalize(&mut self);
}

#[cfg(any(test, feature = "builder"))]
impl<K, V, C> RawBuild<K, V> for Rbtree<K, V, C>
where
    C: Compare<K>,
{
    fn new_detached(&mut self, key: K, value: V, color: Color) -> usize {
        let mut node = Node::new(key, value);
        node.color = color;
        self.alloc(node)
    }

    fn link_child(&mut self, parent: usize, side: Side, child: usize) {
        assert!(
            self.nodes[parent].child(side) == NIL,
            "link_child(): {:?} slot of {} is taken",
            side,
            parent
        );
        self.nodes[parent].set_child(side, child);
        self.nodes[child].parent = parent;
        self.inc_count();
    }

    fn install_root(&mut self, node: usize) {
        assert!(self.root_node() == NIL, "install_root(): tree has a root");
        self.nodes[node].parent = NIL;
        self.set_root(node);
        self.inc_count();
    }

    fn finalize(&mut self) {
        let root = self.root_node();
        self.set_root(root);
        let min = node::most_extreme(&self.nodes, root, Side::Left);
        self.set_min(min);
        log::trace!("{}: finalized fixture, root {} min {}", self.id(), root, min);
    }
}
