use std::fmt::{self, Display};
use std::ops::Deref;

/// A dense index identifying a node inside one [`crate::graph::Graph`].
///
/// Node ids supplied by callers (`N`) are interned to `NodeIdx` once, at
/// graph-build time, so every later lookup (oracle distances, arc caches,
/// candidate paths) is a plain array index instead of a hash lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeIdx(pub(crate) usize);

impl NodeIdx {
    pub(crate) fn new(idx: usize) -> Self {
        NodeIdx(idx)
    }
}

impl Deref for NodeIdx {
    type Target = usize;

    fn deref(&self) -> &usize {
        &self.0
    }
}

impl Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
