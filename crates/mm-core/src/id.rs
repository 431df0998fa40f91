use petgraph::graph::NodeIndex;
use std::fmt;

/// Stable handle to an idea in a [`crate::MindMap`].
///
/// Wraps the arena slot; stays valid across removals of other ideas.
/// 4 bytes, `Copy`, O(1) hashing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdeaId(pub(crate) NodeIndex);

impl IdeaId {
    /// Rebuild a handle from [`IdeaId::index`], e.g. one passed through a
    /// host boundary. The map still has to confirm the idea exists.
    pub fn from_index(index: usize) -> Self {
        IdeaId(NodeIndex::new(index))
    }

    pub fn index(self) -> usize {
        self.0.index()
    }

    pub(crate) fn node(self) -> NodeIndex {
        self.0
    }
}

impl From<NodeIndex> for IdeaId {
    fn from(idx: NodeIndex) -> Self {
        IdeaId(idx)
    }
}

impl fmt::Debug for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
