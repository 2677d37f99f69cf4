use modclust::community::CommunityDetection;
use modclust::{metrics, Adjacency, ModularityClustering};
use petgraph::graph::UnGraph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two dense groups joined by a single light edge.
    //
    // This example is gated behind `required-features = ["community"]` in `Cargo.toml`.
    let mut graph = UnGraph::<&str, f64>::new_undirected();
    let a: Vec<_> = ["a0", "a1", "a2", "a3"].iter().map(|n| graph.add_node(*n)).collect();
    let b: Vec<_> = ["b0", "b1", "b2", "b3"].iter().map(|n| graph.add_node(*n)).collect();
    for group in [&a, &b] {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                graph.add_edge(group[i], group[j], 3.0);
            }
        }
    }
    graph.add_edge(a[3], b[0], 0.5);

    let clusterer = ModularityClustering::new();
    let partition = clusterer.detect_weighted(&graph)?;
    println!(
        "n_nodes={} n_edges={} clusters={} modularity={:.4} levels={}",
        graph.node_count(),
        graph.edge_count(),
        partition.nclusters,
        partition.modularity,
        partition.levels
    );
    for (cid, members) in partition.clusters().iter().enumerate() {
        let names: Vec<_> = members.iter().map(|&i| graph[petgraph::graph::NodeIndex::new(i)]).collect();
        println!("  cluster {}: {:?}", cid, names);
    }

    // Same graph, unit weights, forced down to a single cluster.
    let labels = ModularityClustering::new().with_target(1).detect(&graph)?;
    println!("target=1 labels={:?}", labels);

    // Cross-check the reported modularity.
    let adj = Adjacency::from_weighted_graph(&graph);
    if let Some(m) = adj.as_real() {
        let direct = metrics::modularity(m, &partition.assignment)?;
        println!("direct modularity={:.4}", direct);
    }

    Ok(())
}
