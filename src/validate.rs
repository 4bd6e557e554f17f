use std::{cmp::Ordering, mem};

use crate::compare::Compare;
use crate::depth::Depth;
use crate::error::Error;
use crate::node::{self, Node, Side, NIL};
use crate::raw::RawTree;
use crate::rbtree::Rbtree;

/// Statistics on [`Rbtree`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbtree::stats`] method.
/// * To get full statisics via [`Rbtree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    /// Return number entries in [`Rbtree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return arena slot size, including link overhead, for this
    /// key and value type.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes on every root to sentinel path,
    /// the sentinel itself not counted.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, available only after a full
    /// [`Rbtree::validate`].
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

impl<K, V, C> Rbtree<K, V, C>
where
    K: Clone,
    C: Compare<K>,
{
    /// Return quickly with basic statisics, only entries() and
    /// node_size() are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }

    /// Validate the red-black tree with following rules:
    ///
    /// * Sentinel is black, carries no entry, caches root and minimum.
    /// * Every child links back to its parent, root links to sentinel.
    /// * No red node has a red child.
    /// * Number of blacks is the same on every root to sentinel path.
    /// * Keys are in strictly increasing order, per the comparator.
    /// * Entry count matches the nodes reachable from root.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        match validate_tree::<K, V, _>(self) {
            Ok(stats) => {
                log::debug!(
                    "{}: validated {} entries, blacks {:?}",
                    self.id(),
                    stats.entries(),
                    stats.blacks()
                );
                Ok(stats)
            }
            Err(err) => {
                log::warn!("{}: validation failed", self.id());
                Err(err)
            }
        }
    }
}

struct Walk<'a, K, V, T> {
    tree: &'a T,
    nodes: &'a [Node<K, V>],
    depths: Depth,
    reach: usize,
    prev: usize, // last node visited in order.
}

pub(crate) fn validate_tree<K, V, T>(tree: &T) -> Result<Stats, Error<K>>
where
    K: Clone,
    T: RawTree<K, V>,
{
    let nodes = tree.nodes();
    let sentinel = tree.sentinel();
    if sentinel.is_red() {
        return Err(Error::SentinelRed);
    }
    if sentinel.entry.is_some() {
        return Err(Error::BrokenLink("sentinel carries an entry".to_string()));
    }

    let root = tree.root();
    if sentinel.left != root {
        let msg = format!("root {} cached as {}", root, sentinel.left);
        return Err(Error::StaleCache(msg));
    }
    if root != NIL && nodes[root].parent != NIL {
        let msg = format!("root {} has parent {}", root, nodes[root].parent);
        return Err(Error::BrokenLink(msg));
    }
    let mut walk = Walk {
        tree,
        nodes,
        depths: Depth::new(),
        reach: 0,
        prev: NIL,
    };
    let blacks = walk.visit(root, false, 0)?;
    if walk.reach != tree.count() {
        return Err(Error::CountMismatch(tree.count(), walk.reach));
    }

    // links are known to be acyclic only after the walk.
    let min = node::most_extreme(nodes, root, Side::Left);
    if sentinel.right != min {
        let msg = format!("minimum {} cached as {}", min, sentinel.right);
        return Err(Error::StaleCache(msg));
    }

    let mut stats = Stats::new(tree.count(), mem::size_of::<Node<K, V>>());
    stats.blacks = Some(blacks);
    stats.depths = Some(walk.depths);
    Ok(stats)
}

impl<'a, K, V, T> Walk<'a, K, V, T>
where
    K: Clone,
    T: RawTree<K, V>,
{
    // in-order walk, return number of blacks from node down to sentinel.
    fn visit(&mut self, node: usize, fromred: bool, depth: usize) -> Result<usize, Error<K>> {
        if node == NIL {
            self.depths.sample(depth);
            return Ok(0);
        }
        let nodes: &'a [Node<K, V>] = self.nodes;
        if node >= nodes.len() || depth > nodes.len() {
            let msg = format!("node {} out of arena or on a cycle", node);
            return Err(Error::BrokenLink(msg));
        }

        let nref = &nodes[node];
        if nref.entry.is_none() {
            let msg = format!("node {} is linked but has no entry", node);
            return Err(Error::BrokenLink(msg));
        }
        if fromred && nref.is_red() {
            return Err(Error::ConsecutiveReds);
        }
        for &child in [nref.left, nref.right].iter() {
            if child != NIL && child < nodes.len() && nodes[child].parent != node {
                let parent = nodes[child].parent;
                let msg = format!("child {} of {} links back to {}", child, node, parent);
                return Err(Error::BrokenLink(msg));
            }
        }

        let lblacks = self.visit(nref.left, nref.is_red(), depth + 1)?;

        self.reach += 1;
        if self.prev != NIL {
            let (prev, key) = (nodes[self.prev].key(), nref.key());
            if self.tree.compare_keys(prev, key) != Ordering::Less {
                return Err(Error::SortError(prev.clone(), key.clone()));
            }
        }
        self.prev = node;

        let rblacks = self.visit(nref.right, nref.is_red(), depth + 1)?;
        if lblacks != rblacks {
            let err = format!("node: {} left: {} right: {}", node, lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks + if nref.is_black() { 1 } else { 0 })
    }
}
