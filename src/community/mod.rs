//! Community detection on petgraph graphs.
//!
//! Given a graph, find natural groupings where nodes within groups are
//! densely connected, and connections between groups are sparse.
//!
//! ## The Modularity Objective
//!
//! The multilevel engine maximizes **modularity** Q, which compares the
//! actual edge weight within communities to the expected weight in a random
//! graph with the same degree sequence:
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij - (k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = total edge weight (sum of all edges)
//! - A_ij = edge weight between i and j
//! - k_i = degree of node i
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! **Intuition**: For each pair in the same community, we add (actual edges) -
//! (expected edges). A good partition has Q > 0, meaning more internal edges
//! than expected by chance.
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use modclust::community::CommunityDetection;
//! use modclust::ModularityClustering;
//!
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! let c = graph.add_node(());
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//!
//! let communities = ModularityClustering::new().detect(&graph).unwrap();
//! // communities[i] = community ID for node i
//! assert_eq!(communities.len(), 3);
//! ```
//!
//! Graphs with `f64` edge weights go through
//! [`ModularityClustering::detect_weighted`](crate::ModularityClustering::detect_weighted),
//! which also returns the achieved modularity.

mod detect;
mod traits;

pub use traits::CommunityDetection;
