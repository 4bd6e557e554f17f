use std::cmp::Ordering;

/// Total order over keys used by [`Rbtree`](crate::Rbtree).
///
/// The order must be a strict weak ordering, and it must not change while
/// keys are held in the tree. Violating either is a contract violation;
/// the tree does not detect it.
pub trait Compare<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural order of keys, via [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K> Compare<K> for Natural
where
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
