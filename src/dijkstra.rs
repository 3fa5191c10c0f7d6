use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::helpers::ApproxCmp;
use crate::node::NodeIdx;

/// One run of single-source Dijkstra from `src`, restricted to arcs whose
/// head is not in `excluded_nodes` and whose `(tail, head)` pair is not in
/// `excluded_edges`.
///
/// Returns, for every node reachable from `src` under those restrictions,
/// its distance and a shortest path to it (as a node-idx sequence starting
/// at `src`). Mirrors the teacher's `Dijkstra` in spirit (a
/// `BinaryHeap<Reverse<CostNode>>` over dense, `NodeIdx`-indexed cost
/// arrays) but single-directional and without the contraction-hierarchy
/// bookkeeping, since this engine's graphs are never contracted.
///
/// `excluded_nodes`/`excluded_edges` exist for Yen's algorithm, which needs
/// to run Dijkstra on a graph with some nodes and edges temporarily removed
/// without mutating the shared `Graph`. The oracle's own construction call
/// passes empty exclusion sets.
pub(crate) fn single_source<N>(
    graph: &Graph<N>,
    src: NodeIdx,
    excluded_nodes: &[NodeIdx],
    excluded_edges: &[(NodeIdx, NodeIdx)],
) -> (Vec<Option<f64>>, Vec<Option<Vec<NodeIdx>>>)
where
    N: Clone + Eq + std::hash::Hash,
{
    let n = graph.node_count();
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut predecessor: Vec<Option<NodeIdx>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue: BinaryHeap<std::cmp::Reverse<CostNode>> = BinaryHeap::new();

    if excluded_nodes.contains(&src) {
        return (dist, vec![None; n]);
    }

    dist[*src] = Some(0.0);
    queue.push(std::cmp::Reverse(CostNode {
        idx: src,
        cost: 0.0,
    }));

    while let Some(std::cmp::Reverse(current)) = queue.pop() {
        if visited[*current.idx] {
            continue;
        }
        visited[*current.idx] = true;

        for &(head, weight) in graph.out_edges(current.idx) {
            if excluded_nodes.contains(&head) || excluded_edges.contains(&(current.idx, head)) {
                continue;
            }
            let new_cost = current.cost + weight;
            let improves = match dist[*head] {
                Some(existing) => new_cost < existing,
                None => true,
            };
            if improves {
                dist[*head] = Some(new_cost);
                predecessor[*head] = Some(current.idx);
                queue.push(std::cmp::Reverse(CostNode {
                    idx: head,
                    cost: new_cost,
                }));
            }
        }
    }

    let mut path: Vec<Option<Vec<NodeIdx>>> = vec![None; n];
    for idx in graph.node_indices() {
        if dist[*idx].is_none() {
            continue;
        }
        let mut nodes = vec![idx];
        let mut cur = idx;
        while let Some(pred) = predecessor[*cur] {
            nodes.push(pred);
            cur = pred;
        }
        nodes.reverse();
        path[*idx] = Some(nodes);
    }

    (dist, path)
}

#[derive(Clone, Copy, Debug)]
struct CostNode {
    idx: NodeIdx,
    cost: f64,
}

impl Eq for CostNode {}

impl PartialEq for CostNode {
    fn eq(&self, other: &CostNode) -> bool {
        self.idx == other.idx && self.cost.approx_eq(&other.cost)
    }
}

impl Ord for CostNode {
    fn cmp(&self, other: &CostNode) -> Ordering {
        self.cost.approx_cmp(&other.cost).then_with(|| self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for CostNode {
    fn partial_cmp(&self, other: &CostNode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
