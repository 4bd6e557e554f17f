/// Can be used while indexing keys without values, like
/// ``Rbtree<K, Empty>``, turning the map into an ordered set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Empty;
