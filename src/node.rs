/// Handle of the sentinel node. Every tree keeps its sentinel in the first
/// arena slot, standing in for "no child", "no parent" and past-the-end.
pub(crate) const NIL: usize = 0;

/// Color of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Names one of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Node is a single arena record. Links are handles into the same arena,
/// never dangling: absent neighbours point to [`NIL`].
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) parent: usize,
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) color: Color,
    // None for the sentinel and for slots on the free list.
    pub(crate) entry: Option<(K, V)>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn sentinel() -> Node<K, V> {
        Node {
            parent: NIL,
            left: NIL,
            right: NIL,
            color: Color::Black,
            entry: None,
        }
    }

    // CREATE operation, a fresh node is always a detached red leaf.
    pub(crate) fn new(key: K, value: V) -> Node<K, V> {
        Node {
            parent: NIL,
            left: NIL,
            right: NIL,
            color: Color::Red,
            entry: Some((key, value)),
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: usize) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        match &self.entry {
            Some((key, _)) => key,
            None => panic!("key(): node without entry, call the programmer"),
        }
    }

    #[inline]
    pub(crate) fn as_refs(&self) -> (&K, &V) {
        match &self.entry {
            Some((key, value)) => (key, value),
            None => panic!("as_refs(): node without entry, call the programmer"),
        }
    }

    #[inline]
    pub(crate) fn as_mut_refs(&mut self) -> (&K, &mut V) {
        match &mut self.entry {
            Some((key, value)) => (&*key, value),
            None => panic!("as_mut_refs(): node without entry, call the programmer"),
        }
    }
}

/// Descend from `node` towards `side` until the next step would hit the
/// sentinel. Returns NIL when starting from NIL.
pub(crate) fn most_extreme<K, V>(nodes: &[Node<K, V>], mut node: usize, side: Side) -> usize {
    if node == NIL {
        return NIL;
    }
    loop {
        let next = nodes[node].child(side);
        if next == NIL {
            break node;
        }
        node = next;
    }
}

/// In-order neighbour of `node` towards `side`, `Side::Right` being the
/// successor. Stepping past either end lands on the sentinel.
///
/// From the sentinel, stepping left yields the maximum, because the
/// sentinel's left slot holds the root. Stepping right from the sentinel
/// stays on the sentinel.
pub(crate) fn step<K, V>(nodes: &[Node<K, V>], node: usize, side: Side) -> usize {
    if node == NIL {
        return match side {
            Side::Left => most_extreme(nodes, nodes[NIL].left, Side::Right),
            Side::Right => NIL,
        };
    }

    let child = nodes[node].child(side);
    if child != NIL {
        return most_extreme(nodes, child, side.flip());
    }

    // climb while we are the `side` child, stop at the first parent we
    // reach from its other side.
    let mut current = node;
    loop {
        let parent = nodes[current].parent;
        if parent == NIL || nodes[parent].child(side.flip()) == current {
            break parent;
        }
        current = parent;
    }
}

#[inline]
pub(crate) fn successor<K, V>(nodes: &[Node<K, V>], node: usize) -> usize {
    step(nodes, node, Side::Right)
}

#[inline]
pub(crate) fn predecessor<K, V>(nodes: &[Node<K, V>], node: usize) -> usize {
    step(nodes, node, Side::Left)
}
