use std::collections::HashSet;

use log::trace;

use crate::arcs::ArcsCache;
use crate::buffer::{Candidate, CandidateBuffer};
use crate::graph::Graph;
use crate::oracle::Oracle;

/// Applies the Martins-Pascoal-Santos deviation rule to a popped candidate,
/// pushing zero or more new candidates onto `buffer`.
///
/// `graph` supplies each tail node's outgoing arcs (for the sorted-arcs
/// cache); `reverse_graph` supplies in-degree-in-G counts for the pruning
/// check (a node's predecessor count in G equals its out-neighbor count in
/// G', since G' is G with every arc reversed).
pub(crate) fn generate<N>(
    candidate: &Candidate,
    graph: &Graph<N>,
    reverse_graph: &Graph<N>,
    oracle: &Oracle,
    arcs_cache: &ArcsCache,
    buffer: &mut CandidateBuffer,
) where
    N: Clone + Eq + std::hash::Hash,
{
    let path = &candidate.path;
    let len = path.len();
    if len < 2 {
        return;
    }

    for i in candidate.deviation_index..(len - 1) {
        let v_i = path[i];
        let v_j = path[i + 1];
        let root_path = &path[..=i];

        // Pruning: if every node from the tail back down to (but excluding)
        // v_i has exactly one predecessor in G, no alternative routing
        // exists past v_i and extending this candidate further is futile.
        let no_other_path = path[(i + 1)..len]
            .iter()
            .rev()
            .all(|&node| reverse_graph.out_edges(node).len() <= 1);
        if no_other_path {
            break;
        }

        // A repeated node in the root means we're branching off a prefix
        // that already cycles; don't explore deviations from inside it.
        let mut seen = HashSet::with_capacity(root_path.len());
        if !root_path.iter().all(|&node| seen.insert(node)) {
            break;
        }

        let entry = arcs_cache.arcs_of(v_i, graph, oracle);
        let vj_index = entry.index_of(v_j);
        let entries = entry.entries();

        for &(c, w) in &entries[(vj_index + 1)..] {
            if root_path.contains(&w) {
                continue;
            }
            let mut new_path = root_path.to_vec();
            new_path.extend_from_slice(oracle.path(w).expect("arc head must be in the oracle"));

            let (pushed_cost, reference_cost) = if i == candidate.deviation_index {
                (candidate.deviation_path_cost + c, candidate.deviation_path_cost)
            } else {
                (candidate.cost + c, candidate.cost)
            };
            trace!(
                "deviation at position {}: +{} over {} -> new candidate cost {}",
                i, c, reference_cost, pushed_cost
            );
            buffer.push(pushed_cost, new_path, i, reference_cost);
            break;
        }
    }
}
