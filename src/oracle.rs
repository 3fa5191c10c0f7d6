use crate::dijkstra;
use crate::error::Error;
use crate::graph::Graph;
use crate::node::NodeIdx;

/// Precomputed single-target shortest-path information: for every node
/// that can reach `target`, its distance to `target` and the node sequence
/// realizing that distance.
///
/// Built once per [`crate::Engine`] (on the reverse graph, from `target`)
/// and never mutated afterwards — the graph is treated as immutable for
/// the engine's lifetime, per spec.md's lifecycle note.
pub(crate) struct Oracle {
    target: NodeIdx,
    dist: Vec<Option<f64>>,
    path: Vec<Option<Vec<NodeIdx>>>,
}

impl Oracle {
    /// Runs Dijkstra from `target` on `reverse_graph`, then flips every
    /// recorded path back into source -> ... -> target order.
    pub(crate) fn build<N>(reverse_graph: &Graph<N>, target: NodeIdx) -> Oracle
    where
        N: Clone + Eq + std::hash::Hash,
    {
        let (dist, mut path) = dijkstra::single_source(reverse_graph, target, &[], &[]);
        for entry in path.iter_mut() {
            if let Some(nodes) = entry {
                nodes.reverse();
            }
        }
        Oracle { target, dist, path }
    }

    pub(crate) fn new_checked<N>(
        graph: &Graph<N>,
        reverse_graph: &Graph<N>,
        target: &N,
    ) -> Result<Oracle, Error>
    where
        N: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    {
        let target_idx = graph
            .idx_of(target)
            .ok_or_else(|| Error::TargetNotFound(format!("{:?}", target)))?;
        Ok(Oracle::build(reverse_graph, target_idx))
    }

    pub(crate) fn target(&self) -> NodeIdx {
        self.target
    }

    pub(crate) fn reachable(&self, v: NodeIdx) -> bool {
        self.dist[*v].is_some()
    }

    pub(crate) fn dist(&self, v: NodeIdx) -> Option<f64> {
        self.dist[*v]
    }

    pub(crate) fn path(&self, v: NodeIdx) -> Option<&[NodeIdx]> {
        self.path[*v].as_deref()
    }
}
