use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kspath_mps::{Engine, EngineConfig, GraphBuilder};

fn init_logging(quietly: bool) {
    let mut builder = env_logger::Builder::new();
    // minimum filter-level: `warn`
    builder.filter(None, log::LevelFilter::Warn);
    if !quietly {
        builder.filter(Some(env!("CARGO_PKG_NAME")), log::LevelFilter::Info);
    }
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// A layered graph (`layers` ranks of `width` nodes each) with every node
/// wired to several nodes in the next layer, giving Dijkstra a nontrivial
/// fan-out and the deviation generator plenty of alternative routing to
/// discover. Node ids are `layer * width + offset`; the target is the
/// single node of the last layer.
fn layered_graph(layers: usize, width: usize) -> (kspath_mps::Graph<u32>, u32) {
    let mut b = GraphBuilder::new();
    for layer in 0..(layers - 1) {
        for offset in 0..width {
            let u = (layer * width + offset) as u32;
            for fanout in 0..3.min(width) {
                let v_offset = (offset + 1 + fanout) % width;
                let v = ((layer + 1) * width + v_offset) as u32;
                let weight = 1.0 + ((offset + fanout) % 5) as f64;
                b.push_edge(u, v, weight);
            }
        }
    }
    let target = ((layers - 1) * width) as u32;
    b.push_node(target);
    (b.build(), target)
}

fn criterion_benchmark(c: &mut Criterion) {
    init_logging(true);

    let (graph, target) = layered_graph(12, 6);
    let source = 0u32;

    c.bench_function("engine construction (12x6 layered graph)", |b| {
        b.iter(|| {
            Engine::from_graph(black_box(graph.clone()), black_box(&target), EngineConfig::default())
                .unwrap()
        })
    });

    let engine = Engine::from_graph(graph.clone(), &target, EngineConfig::default()).unwrap();

    for k in [1usize, 10, 50] {
        c.bench_function(&format!("first {} simple paths", k), |b| {
            b.iter(|| {
                engine
                    .shortest_simple_paths(black_box(&source))
                    .unwrap()
                    .take(k)
                    .count()
            })
        });
    }

    let tiny_budget = EngineConfig {
        cycle_budget: kspath_mps::CycleBudget::Limited(5),
    };
    let fallback_engine = Engine::from_graph(graph, &target, tiny_budget).unwrap();
    c.bench_function("first 10 paths, forced into yen fallback early", |b| {
        b.iter(|| {
            fallback_engine
                .shortest_simple_paths(black_box(&source))
                .unwrap()
                .take(10)
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
