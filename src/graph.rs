use std::hash::{BuildHasherDefault, Hash};

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::node::NodeIdx;

type FxIndexSet<N> = IndexSet<N, BuildHasherDefault<FxHasher>>;

/// A plain directed, edge-weighted graph.
///
/// Node ids (`N`) are opaque to the engine; they only need to be cloneable
/// and hashable. They are interned to dense [`NodeIdx`]s the first time they
/// are mentioned to a [`GraphBuilder`], and iteration order (hence tie
/// breaking wherever node order matters) follows first-mention order.
///
/// Edge weights are assumed finite and non-negative; nothing here checks
/// that, per the engine's documented assumption that the graph is
/// well-formed before it is handed to an [`crate::Engine`].
#[derive(Clone, Debug)]
pub struct Graph<N> {
    nodes: FxIndexSet<N>,
    out_edges: Vec<Vec<(NodeIdx, f64)>>,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up the dense index for a node id, if the node exists.
    pub fn idx_of(&self, id: &N) -> Option<NodeIdx> {
        self.nodes.get_index_of(id).map(NodeIdx::new)
    }

    /// Looks up the node id for a dense index. Panics if out of range,
    /// which cannot happen for an index this graph itself produced.
    pub fn id_of(&self, idx: NodeIdx) -> &N {
        self.nodes
            .get_index(*idx)
            .expect("NodeIdx should always be in range for the graph it was produced from")
    }

    /// Iterates every node's dense index, in interning order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIdx> {
        (0..self.nodes.len()).map(NodeIdx::new)
    }

    /// Outgoing arcs of `u`, as `(head, weight)` pairs, in the order they
    /// were added to the builder.
    pub fn out_edges(&self, u: NodeIdx) -> &[(NodeIdx, f64)] {
        &self.out_edges[*u]
    }

    /// Builds the reverse graph G': same nodes (same `NodeIdx` assignment),
    /// every arc flipped, weight preserved.
    pub fn reverse(&self) -> Graph<N> {
        let mut rev_out_edges = vec![Vec::new(); self.nodes.len()];
        for u in self.node_indices() {
            for &(v, weight) in self.out_edges(u) {
                rev_out_edges[*v].push((u, weight));
            }
        }
        Graph {
            nodes: self.nodes.clone(),
            out_edges: rev_out_edges,
        }
    }
}

/// Accumulates nodes and edges before producing an immutable [`Graph`].
///
/// Mirrors the teacher's proto-node/proto-edge builder: nodes are added
/// implicitly the first time they appear in a `push_edge` call, and the
/// graph is only interned once, at [`GraphBuilder::build`].
pub struct GraphBuilder<N> {
    nodes: FxIndexSet<N>,
    out_edges: Vec<Vec<(NodeIdx, f64)>>,
}

impl<N> GraphBuilder<N>
where
    N: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        GraphBuilder {
            nodes: FxIndexSet::default(),
            out_edges: Vec::new(),
        }
    }

    fn intern(&mut self, id: N) -> NodeIdx {
        if let Some(idx) = self.nodes.get_index_of(&id) {
            return NodeIdx::new(idx);
        }
        let (idx, _) = self.nodes.insert_full(id);
        self.out_edges.push(Vec::new());
        NodeIdx::new(idx)
    }

    /// Adds `src` (if new), `dst` (if new), and the arc `src -> dst` with
    /// the given non-negative weight.
    pub fn push_edge(&mut self, src: N, dst: N, weight: f64) -> &mut Self {
        let src_idx = self.intern(src);
        let dst_idx = self.intern(dst);
        self.out_edges[*src_idx].push((dst_idx, weight));
        self
    }

    /// Ensures `id` is a node of the graph even if it has no incident arcs.
    pub fn push_node(&mut self, id: N) -> &mut Self {
        self.intern(id);
        self
    }

    pub fn build(self) -> Graph<N> {
        Graph {
            nodes: self.nodes,
            out_edges: self.out_edges,
        }
    }
}

impl<N> Default for GraphBuilder<N>
where
    N: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
