//! Ordered map on a classic [red-black tree][rbtree], with a shared
//! sentinel node and parent-linked bidirectional cursors.
//!
//! ```
//! use rbtree_index::Rbtree;
//!
//! let mut index: Rbtree<u64, &str> = Rbtree::new("example");
//! index.insert(20, "twenty");
//! index.insert(10, "ten");
//! assert_eq!(index.insert(10, "again"), (index.find(&10), false));
//!
//! let keys: Vec<u64> = index.keys().cloned().collect();
//! assert_eq!(keys, vec![10, 20]);
//!
//! let pos = index.erase(index.begin());
//! assert_eq!(index.entry(pos), Some((&20, &"twenty")));
//! assert!(index.validate().is_ok());
//! ```
//!
//! [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

mod compare;
mod depth;
mod dot;
mod empty;
mod error;
mod iter;
mod node;
mod raw;
mod rbtree;
mod validate;

#[cfg(any(test, feature = "builder"))]
pub mod builder;

pub use crate::compare::{Compare, Natural};
pub use crate::depth::Depth;
pub use crate::empty::Empty;
pub use crate::error::Error;
pub use crate::iter::{IntoIter, Iter, IterMut};
pub use crate::node::{Color, Side};
pub use crate::rbtree::{Position, Rbtree};
pub use crate::validate::Stats;

#[cfg(test)]
mod dot_test;
