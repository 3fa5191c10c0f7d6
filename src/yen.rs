use std::hash::Hash;

use log::debug;

use crate::buffer::CandidateBuffer;
use crate::dijkstra;
use crate::graph::Graph;
use crate::node::NodeIdx;

/// Yen's loopless-paths algorithm, driven one path at a time.
///
/// The engine falls back to this when the MPS deviation generator's
/// consecutive non-simple-candidate streak exceeds the configured cycle
/// budget (spec.md §9); unlike the deviation generator, Yen's never
/// produces a non-simple candidate in the first place, at the cost of one
/// Dijkstra run per path per node on the previous path instead of one
/// memoized arc lookup.
pub(crate) struct YenFallback {
    source: NodeIdx,
    target: NodeIdx,
    found: Vec<Vec<NodeIdx>>,
    candidates: CandidateBuffer,
    exhausted: bool,
}

impl YenFallback {
    pub(crate) fn new(source: NodeIdx, target: NodeIdx) -> YenFallback {
        YenFallback {
            source,
            target,
            found: Vec::new(),
            candidates: CandidateBuffer::new(),
            exhausted: false,
        }
    }

    /// Returns the next loopless path from `source` to `target`, or `None`
    /// once none remain.
    pub(crate) fn next<N>(&mut self, graph: &Graph<N>) -> Option<Vec<NodeIdx>>
    where
        N: Clone + Eq + Hash,
    {
        if self.found.is_empty() {
            let (_, path) = dijkstra::single_source(graph, self.source, &[], &[]);
            return match path[*self.target].clone() {
                Some(p) => {
                    self.found.push(p.clone());
                    Some(p)
                }
                None => {
                    self.exhausted = true;
                    None
                }
            };
        }
        if self.exhausted {
            return None;
        }

        let prev = self.found.last().unwrap().clone();
        for i in 0..prev.len().saturating_sub(1) {
            let spur_node = prev[i];
            let root_path = &prev[..=i];

            let excluded_edges: Vec<(NodeIdx, NodeIdx)> = self
                .found
                .iter()
                .filter(|p| p.len() > i + 1 && &p[..=i] == root_path)
                .map(|p| (p[i], p[i + 1]))
                .collect();
            let excluded_nodes: Vec<NodeIdx> = prev[..i].to_vec();

            let (_, path) = dijkstra::single_source(graph, spur_node, &excluded_nodes, &excluded_edges);
            if let Some(spur_path) = &path[*self.target] {
                let mut total = prev[..i].to_vec();
                total.extend_from_slice(spur_path);
                if !self.found.contains(&total) {
                    let cost = path_cost(graph, &total);
                    self.candidates.push(cost, total, 0, 0.0);
                }
            }
        }

        if self.candidates.is_empty() {
            debug!("yen fallback exhausted after {} paths", self.found.len());
            self.exhausted = true;
            return None;
        }
        let next = self.candidates.pop();
        self.found.push(next.path.clone());
        Some(next.path)
    }
}

fn path_cost<N>(graph: &Graph<N>, path: &[NodeIdx]) -> f64
where
    N: Clone + Eq + Hash,
{
    path.windows(2)
        .map(|w| {
            graph
                .out_edges(w[0])
                .iter()
                .find(|&&(head, _)| head == w[1])
                .map(|&(_, weight)| weight)
                .expect("yen-constructed path must use real graph edges")
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn six_node_graph() -> Graph<i32> {
        let mut b = GraphBuilder::new();
        b.push_edge(1, 3, 0.0);
        b.push_edge(1, 2, 0.0);
        b.push_edge(1, 4, 0.0);
        b.push_edge(2, 3, 1.0);
        b.push_edge(2, 4, 2.0);
        b.push_edge(3, 5, 2.0);
        b.push_edge(3, 6, 2.0);
        b.push_edge(4, 5, 1.0);
        b.push_edge(4, 6, 1.0);
        b.push_edge(5, 2, 1.0);
        b.push_edge(5, 6, 0.0);
        b.build()
    }

    #[test]
    fn first_path_is_the_plain_shortest_path() {
        let graph = six_node_graph();
        let one = graph.idx_of(&1).unwrap();
        let six = graph.idx_of(&6).unwrap();

        let mut yen = YenFallback::new(one, six);
        let first = yen.next(&graph).unwrap();
        assert_eq!(first[0], one);
        assert_eq!(*first.last().unwrap(), six);
        assert_eq!(path_cost(&graph, &first), 1.0);
    }

    #[test]
    fn successive_paths_are_non_decreasing_in_cost_and_distinct() {
        let graph = six_node_graph();
        let one = graph.idx_of(&1).unwrap();
        let six = graph.idx_of(&6).unwrap();

        let mut yen = YenFallback::new(one, six);
        let mut seen = Vec::new();
        let mut last_cost = 0.0;
        for _ in 0..4 {
            match yen.next(&graph) {
                Some(p) => {
                    let cost = path_cost(&graph, &p);
                    assert!(cost >= last_cost - 1e-9);
                    last_cost = cost;
                    assert!(!seen.contains(&p));
                    seen.push(p);
                }
                None => break,
            }
        }
        assert!(seen.len() >= 2);
    }

    #[test]
    fn exhausts_cleanly_when_target_is_unreachable() {
        let mut b = GraphBuilder::new();
        b.push_edge(1, 2, 1.0);
        b.push_node(3);
        let graph = b.build();
        let one = graph.idx_of(&1).unwrap();
        let three = graph.idx_of(&3).unwrap();

        let mut yen = YenFallback::new(one, three);
        assert_eq!(yen.next(&graph), None);
        assert_eq!(yen.next(&graph), None);
    }
}
