use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;

use crate::graph::Graph;
use crate::helpers::ApproxCmp;
use crate::node::NodeIdx;
use crate::oracle::Oracle;

/// One tail node's cached, sorted outgoing arcs.
pub(crate) struct ArcsEntry {
    /// `(reduced_cost, head)` pairs, sorted ascending by `reduced_cost`,
    /// except that index 0 always holds the tail's best successor
    /// (`oracle.path(tail)[1]`), swapped into place if the natural sort
    /// didn't already put it there.
    by_reduced_cost: Vec<(f64, NodeIdx)>,
    head_to_index: HashMap<NodeIdx, usize>,
}

impl ArcsEntry {
    pub(crate) fn entries(&self) -> &[(f64, NodeIdx)] {
        &self.by_reduced_cost
    }

    pub(crate) fn index_of(&self, head: NodeIdx) -> usize {
        self.head_to_index[&head]
    }
}

/// Lazily computes and memoizes each tail node's [`ArcsEntry`], additive
/// and never invalidated for the engine's lifetime (the graph is treated
/// as immutable once the engine is built).
///
/// A single-thread-per-engine resource model (spec.md §5) makes a
/// `RefCell` sufficient here; sharing one engine's cache across threads
/// needs external synchronization, which is outside this crate's scope.
pub(crate) struct ArcsCache {
    entries: RefCell<Vec<Option<ArcsEntry>>>,
}

impl ArcsCache {
    pub(crate) fn new(node_count: usize) -> ArcsCache {
        ArcsCache {
            entries: RefCell::new((0..node_count).map(|_| None).collect()),
        }
    }

    /// Returns `u`'s sorted arcs, computing and memoizing them on first
    /// use. `u` must be reachable to the target; the caller ensures this.
    pub(crate) fn arcs_of<N>(
        &self,
        u: NodeIdx,
        graph: &Graph<N>,
        oracle: &Oracle,
    ) -> std::cell::Ref<'_, ArcsEntry>
    where
        N: Clone + Eq + std::hash::Hash,
    {
        {
            let entries = self.entries.borrow();
            if entries[*u].is_some() {
                return std::cell::Ref::map(entries, |e| e[*u].as_ref().unwrap());
            }
        }

        debug!("filling sorted-arcs cache for tail node {}", u);
        let tail_dist = oracle
            .dist(u)
            .expect("arcs_of called on a tail node not reachable to the target");
        let best_head = oracle
            .path(u)
            .expect("arcs_of called on a tail node not reachable to the target")[1];

        let mut by_reduced_cost: Vec<(f64, NodeIdx)> = graph
            .out_edges(u)
            .iter()
            .filter_map(|&(head, weight)| {
                oracle
                    .dist(head)
                    .map(|head_dist| (head_dist - tail_dist + weight, head))
            })
            .collect();
        by_reduced_cost.sort_by(|a, b| a.0.approx_cmp(&b.0));

        // Swap the best successor into index 0, per the tie-breaking
        // discipline spec.md requires: deviations at a node scan the
        // suffix strictly after the current successor's index, which only
        // yields "all arcs worse than the current successor" if the
        // current successor sits at index 0.
        if let Some(best_pos) = by_reduced_cost.iter().position(|&(_, h)| h == best_head) {
            if best_pos != 0 {
                by_reduced_cost.swap(0, best_pos);
            }
        }

        let head_to_index = by_reduced_cost
            .iter()
            .enumerate()
            .map(|(idx, &(_, head))| (head, idx))
            .collect();

        let entry = ArcsEntry {
            by_reduced_cost,
            head_to_index,
        };

        let mut entries = self.entries.borrow_mut();
        entries[*u] = Some(entry);
        drop(entries);

        let entries = self.entries.borrow();
        std::cell::Ref::map(entries, |e| e[*u].as_ref().unwrap())
    }
}
