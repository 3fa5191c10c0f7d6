use kspath_mps::{Graph, GraphBuilder};

/// The six-node fixture used throughout this crate's tests and docs.
/// Target is always node `6`.
pub fn six_node_graph() -> Graph<i32> {
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

pub fn weight_of(graph: &Graph<i32>, path: &[i32]) -> f64 {
    path.windows(2)
        .map(|w| {
            let u = graph.idx_of(&w[0]).unwrap();
            let v = graph.idx_of(&w[1]).unwrap();
            graph
                .out_edges(u)
                .iter()
                .find(|&&(head, _)| head == v)
                .unwrap()
                .1
        })
        .sum()
}

/// Brute-force reference: every simple `source -> target` path in `graph`,
/// found by exhaustive DFS. Used as the "correct Yen implementation" spec.md
/// §8's completeness-equivalence property compares against.
pub fn all_simple_paths(graph: &Graph<i32>, source: i32, target: i32) -> Vec<Vec<i32>> {
    let mut results = Vec::new();
    let mut path = vec![source];
    dfs(graph, source, target, &mut path, &mut results);
    results
}

fn dfs(graph: &Graph<i32>, current: i32, target: i32, path: &mut Vec<i32>, results: &mut Vec<Vec<i32>>) {
    if current == target {
        results.push(path.clone());
        return;
    }
    let u = match graph.idx_of(&current) {
        Some(u) => u,
        None => return,
    };
    for &(head, _) in graph.out_edges(u) {
        let next = *graph.id_of(head);
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        dfs(graph, next, target, path, results);
        path.pop();
    }
}

/// Groups paths by total weight, as multisets of node sequences, so that
/// within-weight-tier ordering (which the spec leaves unspecified) doesn't
/// make comparisons flaky.
pub fn group_by_weight(graph: &Graph<i32>, paths: &[Vec<i32>]) -> Vec<(f64, Vec<Vec<i32>>)> {
    let mut groups: Vec<(f64, Vec<Vec<i32>>)> = Vec::new();
    for p in paths {
        let w = weight_of(graph, p);
        if let Some(group) = groups.iter_mut().find(|(gw, _)| (*gw - w).abs() < 1e-9) {
            group.1.push(p.clone());
        } else {
            groups.push((w, vec![p.clone()]));
        }
    }
    groups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for (_, g) in groups.iter_mut() {
        g.sort();
    }
    groups
}
