//! Fluent construction of hand-made trees, for fixtures that must start
//! from an exact shape and coloring.
//!
//! ```ignore
//! let mut tree: Rbtree<i64, i64> = Rbtree::new("fixture");
//! Builder::new(&mut tree)
//!     .root(50, Color::Black)
//!     .add_node(30, Color::Red, 50, Side::Left)
//!     .finalize();
//! ```
//!
//! Nodes are linked exactly as asked, nothing is rebalanced; the result
//! is not guaranteed to be a valid red-black tree. Misuse panics.

use crate::compare::Compare;
use crate::node::{Color, Side};
use crate::raw::{RawBuild, RawTree};
use crate::rbtree::Rbtree;

pub struct Builder<'a, K, V, C> {
    tree: &'a mut Rbtree<K, V, C>,
}

impl<'a, K, V, C> Builder<'a, K, V, C>
where
    V: Default,
    C: Compare<K>,
{
    /// Start building into `tree`, which must be empty.
    pub fn new(tree: &'a mut Rbtree<K, V, C>) -> Builder<'a, K, V, C> {
        assert!(tree.is_empty(), "Builder::new(): tree must be empty");
        Builder { tree }
    }

    /// Create the root node, with a default value.
    pub fn root(self, key: K, color: Color) -> Self {
        let node = self.tree.new_detached(key, V::default(), color);
        self.tree.install_root(node);
        self
    }

    /// Create a node with a default value and hang it on `side` of the
    /// node holding `parent`.
    pub fn add_node(self, key: K, color: Color, parent: K, side: Side) -> Self {
        let parent = {
            let pos = self.tree.find(&parent);
            assert!(!pos.is_end(), "add_node(): missing parent");
            pos.0
        };
        let node = self.tree.new_detached(key, V::default(), color);
        self.tree.link_child(parent, side, node);
        self
    }

    /// Recompute sentinel caches and hand the tree back.
    pub fn finalize(self) -> &'a mut Rbtree<K, V, C> {
        self.tree.finalize();
        log::trace!(
            "{}: fixture with {} entries",
            self.tree.name(),
            self.tree.len()
        );
        self.tree
    }
}
