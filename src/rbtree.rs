use std::{cmp::Ordering, fmt, mem};

use rand::Rng;

use crate::compare::{Compare, Natural};
use crate::error::Error;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::node::{self, Color, Node, Side, NIL};

/// Rbtree manage a single instance of in-memory index using
/// [red-black][rbtree] tree.
///
/// Nodes are held in an arena owned by the tree and linked through
/// handles. Slot zero is the sentinel: its left slot caches the root and
/// its right slot caches the minimum, so [`Rbtree::begin`] and
/// [`Rbtree::rbegin`] need no descent.
///
/// The tree is single-owner and not thread-safe. Callers sharing it across
/// threads must wrap it in their own lock.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbtree<K, V, C = Natural> {
    name: String,
    pub(crate) nodes: Vec<Node<K, V>>,
    free: Vec<usize>, // recycled arena slots.
    root: usize,
    n_count: usize, // number of entries in the tree.
    compare: C,
}

/// Position is a cursor into [`Rbtree`], the moral equivalent of a
/// bidirectional iterator. Positions compare by node identity.
///
/// A position does not borrow the tree. It stays valid across insertions
/// and across erasure of *other* entries; erasing its own entry makes it
/// stale, and using a stale position, or a position from another tree, is
/// a contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) usize);

impl Position {
    /// Return true if this is the past-the-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == NIL
    }
}

/// Different ways to construct a new Rbtree instance.
impl<K, V> Rbtree<K, V>
where
    K: Ord,
{
    /// Create an empty instance of Rbtree, identified by `name`, using
    /// the natural order of keys.
    pub fn new<S>(name: S) -> Rbtree<K, V>
    where
        S: AsRef<str>,
    {
        Rbtree::with_compare(name, Natural)
    }

    /// Same as [`Rbtree::new`], with arena space for `capacity` entries
    /// reserved upfront.
    pub fn with_capacity<S>(name: S, capacity: usize) -> Rbtree<K, V>
    where
        S: AsRef<str>,
    {
        let mut tree = Rbtree::new(name);
        tree.nodes.reserve(capacity);
        tree
    }

    /// Create a new instance of Rbtree and load it with entries from
    /// `iter`. Note that iterator should return (key, value) tuples,
    /// where key must be ``unique``.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Rbtree<K, V>, Error<K>>
    where
        S: AsRef<str>,
        I: Iterator<Item = (K, V)>,
    {
        let mut tree = Rbtree::new(name);
        for (key, value) in iter {
            if !tree.insert(key, value).1 {
                return Err(Error::OverwriteKey);
            }
        }
        Ok(tree)
    }
}

impl<K, V, C> Rbtree<K, V, C>
where
    C: Compare<K>,
{
    /// Create an empty instance of Rbtree ordered by `compare`.
    pub fn with_compare<S>(name: S, compare: C) -> Rbtree<K, V, C>
    where
        S: AsRef<str>,
    {
        Rbtree {
            name: name.as_ref().to_string(),
            nodes: vec![Node::sentinel()],
            free: Default::default(),
            root: NIL,
            n_count: Default::default(),
            compare,
        }
    }
}

/// Maintenance API.
impl<K, V, C> Rbtree<K, V, C> {
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbtree instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Remove all entries. Arena memory is kept for reuse.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[NIL] = Node::sentinel();
        self.free.clear();
        self.root = NIL;
        self.n_count = 0;
    }
}

/// Cursor API, stepping over entries in key order.
impl<K, V, C> Rbtree<K, V, C> {
    /// Position of the smallest entry, or [`Rbtree::end`] when empty.
    #[inline]
    pub fn begin(&self) -> Position {
        Position(self.min_node())
    }

    /// Past-the-end position.
    #[inline]
    pub fn end(&self) -> Position {
        Position(NIL)
    }

    /// Position of the largest entry, or [`Rbtree::rend`] when empty.
    #[inline]
    pub fn rbegin(&self) -> Position {
        self.prev(self.end())
    }

    /// Before-the-beginning position for reverse walks, it is the same
    /// sentinel as [`Rbtree::end`].
    #[inline]
    pub fn rend(&self) -> Position {
        Position(NIL)
    }

    /// Step to the next entry in key order. Stepping from the last entry
    /// gives `end()`, stepping from `end()` stays there.
    #[inline]
    pub fn next(&self, pos: Position) -> Position {
        Position(node::successor(&self.nodes, pos.0))
    }

    /// Step to the previous entry in key order. Stepping from `end()`
    /// gives the last entry, stepping from the first entry gives `end()`.
    #[inline]
    pub fn prev(&self, pos: Position) -> Position {
        Position(node::predecessor(&self.nodes, pos.0))
    }

    /// Dereference a position, `None` for `end()`.
    pub fn entry(&self, pos: Position) -> Option<(&K, &V)> {
        if pos.0 == NIL {
            return None;
        }
        self.nodes[pos.0].entry.as_ref().map(|(k, v)| (k, v))
    }

    /// Dereference a position for update. Only the value can be changed,
    /// keys stay fixed once inserted.
    pub fn entry_mut(&mut self, pos: Position) -> Option<(&K, &mut V)> {
        if pos.0 == NIL {
            return None;
        }
        self.nodes[pos.0].entry.as_mut().map(|(k, v)| (&*k, v))
    }

    /// Return the smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry(self.begin())
    }

    /// Return the largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry(self.rbegin())
    }
}

/// Read operations on Rbtree instance.
impl<K, V, C> Rbtree<K, V, C>
where
    C: Compare<K>,
{
    /// Position of the first entry whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Position {
        Position(self.bound(key, |ord| ord != Ordering::Less))
    }

    /// Position of the first entry whose key is greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Position {
        Position(self.bound(key, |ord| ord == Ordering::Greater))
    }

    /// Pair of [`Rbtree::lower_bound`] and [`Rbtree::upper_bound`],
    /// spanning zero or one entry.
    pub fn equal_range(&self, key: &K) -> (Position, Position) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Position of `key`, or `end()` when missing.
    pub fn find(&self, key: &K) -> Position {
        let node = self.bound(key, |ord| ord != Ordering::Less);
        if node == NIL {
            return Position(NIL);
        }
        match self.compare.compare(key, self.nodes[node].key()) {
            Ordering::Equal => Position(node),
            _ => Position(NIL),
        }
    }

    /// Check whether `key` is present.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    /// Return 1 if `key` is present, else 0.
    #[inline]
    pub fn count(&self, key: &K) -> usize {
        if self.contains(key) {
            1
        } else {
            0
        }
    }

    /// Get the value for key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entry(self.find(key)).map(|(_, v)| v)
    }

    /// Get the value for key, for update.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.find(key);
        self.entry_mut(pos).map(|(_, v)| v)
    }

    /// Checked access, fail with [`Error::KeyNotFound`] when key is
    /// missing.
    pub fn at(&self, key: &K) -> Result<&V, Error<K>> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Checked access for update.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, Error<K>> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let mut node = self.root;
        if node == NIL {
            return None;
        }

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => self.nodes[node].left,
                1 => self.nodes[node].right,
                _ => unreachable!(),
            };
            if at_depth == 0 || next == NIL {
                break Some(self.nodes[node].as_refs());
            }
            at_depth -= 1;
            node = next;
        }
    }

    // descend from root, remembering the last node accepted by `take`
    // and turning left at it, right otherwise.
    fn bound<F>(&self, key: &K, take: F) -> usize
    where
        F: Fn(Ordering) -> bool,
    {
        let (mut node, mut best) = (self.root, NIL);
        while node != NIL {
            let nref = &self.nodes[node];
            if take(self.compare.compare(nref.key(), key)) {
                best = node;
                node = nref.left;
            } else {
                node = nref.right;
            }
        }
        best
    }

    // Ok(node) if key is present, else Err((parent, side)) where a new
    // leaf for key shall be attached.
    fn locate(&self, key: &K) -> Result<usize, (usize, Side)> {
        let (mut node, mut at) = (self.root, (NIL, Side::Left));
        while node != NIL {
            let nref = &self.nodes[node];
            node = match self.compare.compare(key, nref.key()) {
                Ordering::Less => {
                    at = (node, Side::Left);
                    nref.left
                }
                Ordering::Greater => {
                    at = (node, Side::Right);
                    nref.right
                }
                Ordering::Equal => return Ok(node),
            };
        }
        Err(at)
    }
}

/// Write operations on Rbtree instance.
impl<K, V, C> Rbtree<K, V, C>
where
    C: Compare<K>,
{
    /// Insert a new {key, value} entry. If key is already present the
    /// tree is left unchanged and `(position_of_existing, false)` is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        match self.locate(&key) {
            Ok(node) => (Position(node), false),
            Err((parent, side)) => {
                let node = self.alloc(Node::new(key, value));
                self.attach(node, parent, side);
                (Position(node), true)
            }
        }
    }

    /// Same as [`Rbtree::insert`], but report allocation failure as
    /// [`Error::AllocFailed`] instead of aborting. On failure the tree is
    /// exactly as it was before the call.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(Position, bool), Error<K>> {
        if self.free.is_empty() && self.nodes.try_reserve(1).is_err() {
            return Err(Error::AllocFailed);
        }
        Ok(self.insert(key, value))
    }

    /// Construct the entry through `make`, then insert it. The entry and
    /// its arena slot exist before keys are compared; on a duplicate key
    /// both are released and the existing position is returned.
    pub fn emplace<F>(&mut self, make: F) -> (Position, bool)
    where
        F: FnOnce() -> (K, V),
    {
        let (key, value) = make();
        let node = self.alloc(Node::new(key, value));
        match self.locate(self.nodes[node].key()) {
            Ok(existing) => {
                self.release(node);
                (Position(existing), false)
            }
            Err((parent, side)) => {
                self.attach(node, parent, side);
                (Position(node), true)
            }
        }
    }

    /// Return a mutable reference to the value for `key`, inserting
    /// `V::default()` first if key is missing.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let node = match self.locate(&key) {
            Ok(node) => node,
            Err((parent, side)) => {
                let node = self.alloc(Node::new(key, V::default()));
                self.attach(node, parent, side);
                node
            }
        };
        self.nodes[node].as_mut_refs().1
    }

    /// Erase the entry at `pos` and return the position of its in-order
    /// successor. Other positions remain valid.
    ///
    /// `pos` must refer to a live entry of this tree; passing `end()` or
    /// a stale position is a contract violation, caught only by debug
    /// assertions.
    pub fn erase(&mut self, pos: Position) -> Position {
        debug_assert!(pos.0 != NIL, "erase(): end position");
        debug_assert!(
            pos.0 < self.nodes.len() && self.nodes[pos.0].entry.is_some(),
            "erase(): stale position"
        );
        let next = node::successor(&self.nodes, pos.0);
        self.unlink(pos.0);
        Position(next)
    }

    /// Erase entry for `key`, return number of entries removed, 0 or 1.
    pub fn erase_key(&mut self, key: &K) -> usize {
        match self.find(key) {
            pos if pos.is_end() => 0,
            pos => {
                self.unlink(pos.0);
                1
            }
        }
    }

    /// Erase the half open range `[first, last)` and return `last`.
    pub fn erase_range(&mut self, mut first: Position, last: Position) -> Position {
        while first != last {
            first = self.erase(first);
        }
        last
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then remove is effectively a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.find(key) {
            pos if pos.is_end() => None,
            pos => Some(self.unlink(pos.0).1),
        }
    }

    /// Keep only the entries for which `f` returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut pos = self.begin();
        while !pos.is_end() {
            let keep = {
                let (key, value) = self.nodes[pos.0].as_mut_refs();
                f(key, value)
            };
            pos = if keep { self.next(pos) } else { self.erase(pos) };
        }
    }
}

/// Iteration API.
impl<K, V, C> Rbtree<K, V, C> {
    /// Return an iterator over all entries in key order. The iterator is
    /// double ended, `iter().rev()` walks from the largest key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.min_node(), self.max_node(), self.n_count)
    }

    /// Return an iterator over all entries in key order, values can be
    /// updated in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let order = self.in_order();
        IterMut::new(&mut self.nodes, order)
    }

    /// Return an iterator over keys, in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Return an iterator over values, in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    pub(crate) fn in_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.n_count);
        let mut node = self.min_node();
        while node != NIL {
            order.push(node);
            node = node::successor(&self.nodes, node);
        }
        order
    }
}

impl<K, V, C> IntoIterator for Rbtree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        let order = self.in_order();
        IntoIter::new(mem::take(&mut self.nodes), order)
    }
}

impl<'a, K, V, C> IntoIterator for &'a Rbtree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for Rbtree<K, V, C>
where
    C: Compare<K>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> fmt::Debug for Rbtree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Trees compare lexicographically over their in-order (key, value)
// sequence, the comparator is not part of the comparison.

impl<K, V, C> PartialEq for Rbtree<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.n_count == other.n_count && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Rbtree<K, V, C>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, C> PartialOrd for Rbtree<K, V, C>
where
    K: PartialOrd,
    V: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K, V, C> Ord for Rbtree<K, V, C>
where
    K: Ord,
    V: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

// Arena and sentinel bookkeeping.
impl<K, V, C> Rbtree<K, V, C> {
    #[inline]
    pub(crate) fn root_node(&self) -> usize {
        self.root
    }

    #[inline]
    pub(crate) fn min_node(&self) -> usize {
        self.nodes[NIL].right
    }

    #[inline]
    fn max_node(&self) -> usize {
        node::most_extreme(&self.nodes, self.root, Side::Right)
    }

    #[inline]
    pub(crate) fn set_root(&mut self, node: usize) {
        self.root = node;
        self.nodes[NIL].left = node;
    }

    #[inline]
    pub(crate) fn set_min(&mut self, node: usize) {
        self.nodes[NIL].right = node;
    }

    #[inline]
    pub(crate) fn compare(&self) -> &C {
        &self.compare
    }

    #[cfg(any(test, feature = "builder"))]
    #[inline]
    pub(crate) fn inc_count(&mut self) {
        self.n_count += 1;
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    // return the slot to the free list, handing back its entry.
    fn release(&mut self, slot: usize) -> (K, V) {
        let entry = mem::replace(&mut self.nodes[slot], Node::sentinel()).entry;
        self.free.push(slot);
        match entry {
            Some(entry) => entry,
            None => panic!("release(): empty slot {}, call the programmer", slot),
        }
    }

    // rewrite whichever child slot of node's parent points at node, the
    // root cache stands in for the parent of root.
    fn replace_in_parent(&mut self, node: usize, child: usize) {
        let parent = self.nodes[node].parent;
        if parent == NIL {
            self.set_root(child)
        } else if self.nodes[parent].left == node {
            self.nodes[parent].left = child
        } else {
            self.nodes[parent].right = child
        }
    }
}

// Insertion and deletion engines.
impl<K, V, C> Rbtree<K, V, C> {
    // link a detached red leaf under parent and rebalance.
    fn attach(&mut self, node: usize, parent: usize, side: Side) {
        self.nodes[node].parent = parent;
        if parent == NIL {
            self.set_root(node);
        } else {
            self.nodes[parent].set_child(side, node);
        }
        // a new minimum can only hang left of the old one.
        let min = self.min_node();
        if min == NIL || (parent == min && side == Side::Left) {
            self.set_min(node);
        }
        self.n_count += 1;
        self.insert_fixup(node);
    }

    fn insert_fixup(&mut self, mut current: usize) {
        while self.nodes[self.nodes[current].parent].is_red() {
            let mut parent = self.nodes[current].parent;
            let grandparent = self.nodes[parent].parent;
            let side = if self.nodes[grandparent].left == parent {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.nodes[grandparent].child(side.flip());

            if self.nodes[uncle].is_red() {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                current = grandparent;
            } else {
                if self.nodes[parent].child(side.flip()) == current {
                    self.rotate(parent, side.flip());
                    mem::swap(&mut parent, &mut current);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate(grandparent, side);
            }
        }
        let root = self.root;
        self.nodes[root].color = Color::Black;
    }

    //              (p)                         (p)
    //               |                           |
    //              node                       child
    //              /  \                        /  \
    //          child   b       side=Left      a   node
    //           /  \           ------->           /  \
    //          a   inner                      inner   b
    //
    // lift node's `side` child into node's place. Mirror for Right.
    fn rotate(&mut self, node: usize, side: Side) {
        let child = self.nodes[node].child(side);
        if child == NIL {
            panic!("rotate(): lifting the sentinel ? call the programmer");
        }

        self.nodes[child].parent = self.nodes[node].parent;
        self.replace_in_parent(node, child);
        self.nodes[node].parent = child;

        let inner = self.nodes[child].child(side.flip());
        self.nodes[node].set_child(side, inner);
        if inner != NIL {
            self.nodes[inner].parent = node;
        }
        self.nodes[child].set_child(side.flip(), node);
    }

    // remove node from the tree, free its slot and return its entry.
    fn unlink(&mut self, delete: usize) -> (K, V) {
        let (left, right) = (self.nodes[delete].left, self.nodes[delete].right);
        let instead = if left == NIL || right == NIL {
            delete
        } else {
            node::most_extreme(&self.nodes, right, Side::Left)
        };
        let restored = match self.nodes[instead].left {
            NIL => self.nodes[instead].right,
            left => left,
        };
        // color of the slot that physically leaves the tree.
        let removed_color = self.nodes[instead].color;

        // the minimum has no left child, so it is always spliced directly
        // and its successor is either below it or its parent.
        let new_min = if self.min_node() == delete {
            match restored {
                NIL => self.nodes[delete].parent,
                restored => node::most_extreme(&self.nodes, restored, Side::Left),
            }
        } else {
            self.min_node()
        };

        // splice restored into instead's place, restored may be the
        // sentinel whose parent slot is borrowed for the fixup walk.
        self.nodes[restored].parent = self.nodes[instead].parent;
        self.replace_in_parent(instead, restored);

        if instead != delete {
            self.transplant(delete, instead);
            if self.nodes[restored].parent == delete {
                self.nodes[restored].parent = instead;
            }
        }

        if removed_color == Color::Black {
            self.erase_fixup(restored);
        }

        self.set_min(new_min);
        self.nodes[NIL].parent = NIL;
        self.n_count -= 1;
        self.release(delete)
    }

    // move `to` into the structural position of `from`, taking over its
    // links and color while keeping its own entry.
    fn transplant(&mut self, from: usize, to: usize) {
        let (parent, left, right, color) = {
            let n = &self.nodes[from];
            (n.parent, n.left, n.right, n.color)
        };
        self.replace_in_parent(from, to);
        {
            let n = &mut self.nodes[to];
            n.parent = parent;
            n.left = left;
            n.right = right;
            n.color = color;
        }
        if left != NIL {
            self.nodes[left].parent = to;
        }
        if right != NIL {
            self.nodes[right].parent = to;
        }
    }

    fn erase_fixup(&mut self, mut current: usize) {
        while current != self.root && self.nodes[current].is_black() {
            let parent = self.nodes[current].parent;
            let side = if self.nodes[parent].left == current {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self.nodes[parent].child(side.flip());

            if self.nodes[sibling].is_red() {
                self.nodes[sibling].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                self.rotate(parent, side.flip());
                sibling = self.nodes[parent].child(side.flip());
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(side.flip());
            if self.nodes[near].is_black() && self.nodes[far].is_black() {
                self.nodes[sibling].color = Color::Red;
                current = parent;
                continue;
            }

            if self.nodes[far].is_black() {
                self.nodes[near].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, side);
                sibling = self.nodes[parent].child(side.flip());
            }
            let far = self.nodes[sibling].child(side.flip());
            self.nodes[sibling].color = self.nodes[parent].color;
            self.nodes[parent].color = Color::Black;
            self.nodes[far].color = Color::Black;
            self.rotate(parent, side.flip());
            current = self.root;
        }
        self.nodes[current].color = Color::Black;
    }
}
