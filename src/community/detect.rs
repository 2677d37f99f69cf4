//! petgraph adapter for the multilevel engine.

use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use crate::multilevel::{ModularityClustering, Partition};
use crate::sparse::Adjacency;
use petgraph::graph::UnGraph;

impl ModularityClustering {
    /// Cluster a graph whose edge weights are `f64`.
    pub fn detect_weighted<N>(&self, graph: &UnGraph<N, f64>) -> Result<Partition> {
        if graph.node_count() == 0 {
            return Err(Error::EmptyInput);
        }
        self.cluster(&Adjacency::from_weighted_graph(graph))
    }
}

impl CommunityDetection for ModularityClustering {
    /// Unit edge weights; parallel edges add up.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        if graph.node_count() == 0 {
            return Err(Error::EmptyInput);
        }
        let partition = self.cluster(&Adjacency::from_graph(graph))?;
        Ok(partition.assignment)
    }

    fn target(&self) -> Option<usize> {
        ModularityClustering::target(self)
    }
}
