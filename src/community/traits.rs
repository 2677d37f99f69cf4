//! Community detection traits.

use crate::error::Result;
use petgraph::graph::UnGraph;

/// Trait for community detection on petgraph graphs.
pub trait CommunityDetection {
    /// Detect communities in a graph.
    ///
    /// Returns a mapping from node index to community ID.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;

    /// Requested community count, if any.
    fn target(&self) -> Option<usize> {
        None
    }
}
