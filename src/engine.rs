use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

use crate::arcs::ArcsCache;
use crate::buffer::CandidateBuffer;
use crate::config::EngineConfig;
use crate::deviation;
use crate::error::Error;
use crate::graph::Graph;
use crate::node::NodeIdx;
use crate::oracle::Oracle;
use crate::yen::YenFallback;

/// Bound to one target; answers `shortest_simple_paths` queries for any
/// number of sources over its lifetime.
///
/// Holds the graph, its reverse, the shortest-path oracle and the sorted-arcs
/// cache (both built once, on construction, and reused across every query).
pub struct Engine<N> {
    graph: Graph<N>,
    reverse_graph: Graph<N>,
    oracle: Oracle,
    arcs_cache: ArcsCache,
    config: EngineConfig,
}

impl<N> Engine<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Full constructor: caller supplies both the graph and its reverse.
    pub fn new(
        graph: Graph<N>,
        reverse_graph: Graph<N>,
        target: &N,
        config: EngineConfig,
    ) -> Result<Engine<N>, Error> {
        let oracle = Oracle::new_checked(&graph, &reverse_graph, target)?;
        let arcs_cache = ArcsCache::new(graph.node_count());
        Ok(Engine {
            graph,
            reverse_graph,
            oracle,
            arcs_cache,
            config,
        })
    }

    /// Convenience constructor: computes the reverse graph for the caller.
    pub fn from_graph(graph: Graph<N>, target: &N, config: EngineConfig) -> Result<Engine<N>, Error> {
        let reverse_graph = graph.reverse();
        Engine::new(graph, reverse_graph, target, config)
    }

    /// Returns the lazy sequence of loopless `source -> target` paths, in
    /// non-decreasing weight order. An unreachable (but valid) source
    /// yields an empty sequence; an unknown source is an error.
    pub fn shortest_simple_paths(&self, source: &N) -> Result<PathIter<'_, N>, Error> {
        let source_idx = self
            .graph
            .idx_of(source)
            .ok_or_else(|| Error::SourceNotFound(format!("{:?}", source)))?;

        let mut buffer = CandidateBuffer::new();
        if self.oracle.reachable(source_idx) {
            let seed_path = self.oracle.path(source_idx).unwrap().to_vec();
            buffer.push(0.0, seed_path, 0, 0.0);
        }

        Ok(PathIter {
            engine: self,
            source_idx,
            buffer,
            consecutive_cycles: 0,
            simple_paths_found: HashSet::new(),
            mode: Mode::Mps,
        })
    }

    fn materialize(&self, path: &[NodeIdx]) -> Vec<N> {
        path.iter().map(|&idx| self.graph.id_of(idx).clone()).collect()
    }
}

enum Mode {
    Mps,
    Fallback(YenFallback),
    Done,
}

/// The lazy sequence returned by [`Engine::shortest_simple_paths`].
///
/// Drives the MPS pop/filter/generate loop (spec.md §4.5) until the cycle
/// budget is exhausted, then switches to pulling from the Yen fallback,
/// filtering out paths already yielded by MPS. Dropping this value mid-
/// sequence releases its buffer; the engine retains no trace of it.
pub struct PathIter<'a, N> {
    engine: &'a Engine<N>,
    source_idx: NodeIdx,
    buffer: CandidateBuffer,
    consecutive_cycles: usize,
    simple_paths_found: HashSet<Vec<NodeIdx>>,
    mode: Mode,
}

impl<'a, N> Iterator for PathIter<'a, N>
where
    N: Clone + Eq + Hash + Debug,
{
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Vec<N>> {
        loop {
            match &mut self.mode {
                Mode::Mps => {
                    if self
                        .engine
                        .config
                        .cycle_budget
                        .is_exhausted(self.consecutive_cycles)
                    {
                        warn!(
                            "cycle budget exhausted after {} consecutive non-simple candidates, escalating to yen fallback",
                            self.consecutive_cycles
                        );
                        self.mode = Mode::Fallback(YenFallback::new(
                            self.source_idx,
                            self.engine.oracle.target(),
                        ));
                        continue;
                    }
                    if self.buffer.is_empty() {
                        self.mode = Mode::Done;
                        continue;
                    }

                    let candidate = self.buffer.pop();
                    let simple = is_loopless(&candidate.path);
                    deviation::generate(
                        &candidate,
                        &self.engine.graph,
                        &self.engine.reverse_graph,
                        &self.engine.oracle,
                        &self.engine.arcs_cache,
                        &mut self.buffer,
                    );

                    if simple {
                        self.consecutive_cycles = 0;
                        self.simple_paths_found.insert(candidate.path.clone());
                        return Some(self.engine.materialize(&candidate.path));
                    }
                    self.consecutive_cycles += 1;
                }
                Mode::Fallback(yen) => match yen.next(&self.engine.graph) {
                    Some(path) => {
                        if self.simple_paths_found.contains(&path) {
                            continue;
                        }
                        self.simple_paths_found.insert(path.clone());
                        return Some(self.engine.materialize(&path));
                    }
                    None => {
                        self.mode = Mode::Done;
                    }
                },
                Mode::Done => return None,
            }
        }
    }
}

fn is_loopless(path: &[NodeIdx]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|&node| seen.insert(node))
}
