use std::{error, fmt};

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum Error<K> {
    /// Returned by load_from() when the same key shows up twice.
    OverwriteKey,
    /// Returned by checked access, like at(), when key is missing.
    KeyNotFound,
    /// Arena could not grow for a new entry, tree is left untouched.
    AllocFailed,
    /// Fatal case, sentinel is not black.
    SentinelRed,
    /// Fatal case, a red node has a red child.
    ConsecutiveReds,
    /// Fatal case, black-height differs between two paths. The String
    /// component of this variant can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, parent and child links disagree.
    BrokenLink(String),
    /// Fatal case, sentinel's cached root or minimum is out of date.
    StaleCache(String),
    /// Fatal case, (counted entries, reachable nodes) differ.
    CountMismatch(usize, usize),
}

impl<K> fmt::Display for Error<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OverwriteKey => write!(f, "key already present"),
            Error::KeyNotFound => write!(f, "key not found"),
            Error::AllocFailed => write!(f, "allocation failed"),
            Error::SentinelRed => write!(f, "sentinel is red"),
            Error::ConsecutiveReds => write!(f, "consecutive red nodes"),
            Error::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks, {}", msg),
            Error::SortError(a, b) => write!(f, "sort error, {:?} against {:?}", a, b),
            Error::BrokenLink(msg) => write!(f, "broken link, {}", msg),
            Error::StaleCache(msg) => write!(f, "stale sentinel cache, {}", msg),
            Error::CountMismatch(count, reach) => {
                write!(f, "count {} but {} reachable nodes", count, reach)
            }
        }
    }
}

impl<K> error::Error for Error<K> where K: fmt::Debug {}
