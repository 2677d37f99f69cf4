//! # modclust
//!
//! Multilevel modularity clustering of weighted undirected graphs.
//!
//! A greedy matcher pairs vertices by modularity gain, the matching is turned
//! into restriction / prolongation operators, and the graph is coarsened by a
//! Galerkin product. This repeats until no merge helps; the coarsest partition
//! is then projected back onto the original vertices.
//!
//! The engine works on sparse adjacency matrices ([`Adjacency`]). The
//! `community` feature (default) adds a petgraph adapter.
//!
//! ```rust
//! use modclust::{modularity_clustering, Adjacency};
//!
//! let mut adj = Adjacency::from_triplets(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
//! let partition = modularity_clustering(&mut adj, false, 0).unwrap();
//! assert_eq!(partition.assignment.len(), 3);
//! assert!(partition.nclusters >= 1);
//! ```

#[cfg(feature = "community")]
pub mod community;
/// Error types used across `modclust`.
pub mod error;
pub mod metrics;
pub mod multilevel;
pub mod sparse;

#[cfg(test)]
mod clustering_tests;

pub use error::{Error, Result};
pub use metrics::modularity;
pub use multilevel::{modularity_clustering, ModularityClustering, Partition};
pub use sparse::Adjacency;

#[cfg(feature = "community")]
pub use community::CommunityDetection;
