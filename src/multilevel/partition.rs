//! Clustering result.

/// Partition of a graph's vertices into clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Number of clusters; every id in `0..nclusters` is used.
    pub nclusters: usize,
    /// Cluster id per original vertex.
    pub assignment: Vec<usize>,
    /// Modularity achieved by `assignment`.
    pub modularity: f64,
    /// Levels in the hierarchy that produced this partition, finest included.
    pub levels: usize,
}

impl Partition {
    /// Vertex count per cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.nclusters];
        for &c in &self.assignment {
            sizes[c] += 1;
        }
        sizes
    }

    /// Vertices assigned to `cluster`, ascending.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cluster)
            .map(|(i, _)| i)
            .collect()
    }

    /// Vertices grouped by cluster.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.nclusters];
        for (i, &c) in self.assignment.iter().enumerate() {
            groups[c].push(i);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_helpers() {
        let p = Partition {
            nclusters: 2,
            assignment: vec![1, 0, 1, 1],
            modularity: 0.0,
            levels: 2,
        };
        assert_eq!(p.cluster_sizes(), vec![1, 3]);
        assert_eq!(p.members(1), vec![0, 2, 3]);
        assert_eq!(p.clusters(), vec![vec![1], vec![0, 2, 3]]);
    }
}
