use crate::node::{self, Node, NIL};

/// Iterator over [`Rbtree`](crate::Rbtree) entries in key order. Walks the
/// parent links directly, no auxiliary stack is kept.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        nodes: &'a [Node<K, V>],
        front: usize,
        back: usize,
        remaining: usize, // front and back meet after this many steps.
    ) -> Iter<'a, K, V> {
        Iter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.front == NIL {
            return None;
        }
        let nodes: &'a [Node<K, V>] = self.nodes;
        let item = nodes[self.front].as_refs();
        self.front = node::successor(nodes, self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.back == NIL {
            return None;
        }
        let nodes: &'a [Node<K, V>] = self.nodes;
        let item = nodes[self.back].as_refs();
        self.back = node::predecessor(nodes, self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Mutable iterator over [`Rbtree`](crate::Rbtree) entries in key order.
/// Entries are resolved upfront into a batch.
pub struct IterMut<'a, K, V> {
    node_iter: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(nodes: &'a mut [Node<K, V>], order: Vec<usize>) -> IterMut<'a, K, V> {
        let mut slots: Vec<Option<(&'a K, &'a mut V)>> = nodes
            .iter_mut()
            .map(|n| n.entry.as_mut().map(|(k, v)| (&*k, v)))
            .collect();
        let batch: Vec<(&'a K, &'a mut V)> = order
            .into_iter()
            .filter_map(|slot| slots[slot].take())
            .collect();
        IterMut {
            node_iter: batch.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.node_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.node_iter.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// Owning iterator over [`Rbtree`](crate::Rbtree) entries in key order.
pub struct IntoIter<K, V> {
    node_iter: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(mut nodes: Vec<Node<K, V>>, order: Vec<usize>) -> IntoIter<K, V> {
        let batch: Vec<(K, V)> = order
            .into_iter()
            .filter_map(|slot| nodes[slot].entry.take())
            .collect();
        IntoIter {
            node_iter: batch.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.node_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.node_iter.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
