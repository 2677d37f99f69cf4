//! Caller-facing adjacency matrix.

use super::ops;
use crate::error::{Error, Result};
use sprs::{CsMat, TriMat};
use std::borrow::Cow;

#[cfg(feature = "community")]
use petgraph::graph::UnGraph;
#[cfg(feature = "community")]
use petgraph::visit::EdgeRef;

/// Square sparse adjacency matrix of a weighted graph.
///
/// Real matrices carry edge weights. Integer matrices are pattern-only: when
/// clustered, every stored entry counts as an edge of weight 1.
#[derive(Debug, Clone, PartialEq)]
pub enum Adjacency {
    /// Real-valued entries, used as edge weights.
    Real(CsMat<f64>),
    /// Integer-valued entries; only the sparsity pattern is meaningful.
    Integer(CsMat<i64>),
}

impl Adjacency {
    /// Build an `n × n` real matrix from `(row, col, weight)` triplets.
    ///
    /// Duplicate coordinates are summed. Triplets are taken as given: pass
    /// both `(i, j)` and `(j, i)` for a symmetric matrix, or let
    /// [`Adjacency::symmetrize`] add the transpose.
    pub fn from_triplets(n: usize, entries: &[(usize, usize, f64)]) -> Result<Self> {
        let mut tri = TriMat::with_capacity((n, n), entries.len());
        for &(row, col, w) in entries {
            if row >= n || col >= n {
                return Err(Error::IndexOutOfBounds { row, col, n });
            }
            tri.add_triplet(row, col, w);
        }
        Ok(Adjacency::Real(tri.to_csr()))
    }

    /// Build an `n × n` integer (pattern) matrix from triplets.
    pub fn from_integer_triplets(n: usize, entries: &[(usize, usize, i64)]) -> Result<Self> {
        let mut tri = TriMat::with_capacity((n, n), entries.len());
        for &(row, col, v) in entries {
            if row >= n || col >= n {
                return Err(Error::IndexOutOfBounds { row, col, n });
            }
            tri.add_triplet(row, col, v);
        }
        Ok(Adjacency::Integer(tri.to_csr()))
    }

    /// Symmetric unit-weight adjacency of an undirected petgraph graph.
    ///
    /// Parallel edges accumulate; self-loops are kept as diagonal entries.
    #[cfg(feature = "community")]
    pub fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        Self::collect_graph(graph, |_| 1.0)
    }

    /// Symmetric adjacency of an undirected graph with `f64` edge weights.
    #[cfg(feature = "community")]
    pub fn from_weighted_graph<N>(graph: &UnGraph<N, f64>) -> Self {
        Self::collect_graph(graph, |w| *w)
    }

    #[cfg(feature = "community")]
    fn collect_graph<N, E>(graph: &UnGraph<N, E>, weight: impl Fn(&E) -> f64) -> Self {
        let n = graph.node_count();
        let mut tri = TriMat::with_capacity((n, n), 2 * graph.edge_count());
        for edge in graph.edge_references() {
            let i = edge.source().index();
            let j = edge.target().index();
            let w = weight(edge.weight());
            tri.add_triplet(i, j, w);
            if i != j {
                tri.add_triplet(j, i, w);
            }
        }
        Adjacency::Real(tri.to_csr())
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Adjacency::Real(m) => m.shape(),
            Adjacency::Integer(m) => m.shape(),
        }
    }

    /// Vertex count (row count).
    pub fn n(&self) -> usize {
        self.shape().0
    }

    /// Stored entry count, diagonal included.
    pub fn nnz(&self) -> usize {
        match self {
            Adjacency::Real(m) => m.nnz(),
            Adjacency::Integer(m) => m.nnz(),
        }
    }

    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.shape();
        rows == cols
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Adjacency::Real(_))
    }

    /// Exact value symmetry.
    pub fn is_symmetric(&self) -> bool {
        match self {
            Adjacency::Real(m) => ops::is_symmetric(m),
            Adjacency::Integer(m) => ops::is_symmetric(m),
        }
    }

    /// Real matrix, if this adjacency carries weights.
    pub fn as_real(&self) -> Option<&CsMat<f64>> {
        match self {
            Adjacency::Real(m) => Some(m),
            Adjacency::Integer(_) => None,
        }
    }

    /// `A + Aᵀ`, or `None` when the matrix is already symmetric.
    pub fn symmetrize(&self) -> Option<Adjacency> {
        match self {
            Adjacency::Real(m) => match ops::symmetrize(m) {
                Cow::Borrowed(_) => None,
                Cow::Owned(s) => Some(Adjacency::Real(s)),
            },
            Adjacency::Integer(m) => match ops::symmetrize_integer(m) {
                Cow::Borrowed(_) => None,
                Cow::Owned(s) => Some(Adjacency::Integer(s)),
            },
        }
    }

    /// Copy with all diagonal entries removed.
    pub fn remove_diagonal(&self) -> Adjacency {
        match self {
            Adjacency::Real(m) => Adjacency::Real(ops::remove_diagonal(m)),
            Adjacency::Integer(m) => Adjacency::Integer(ops::remove_diagonal(m)),
        }
    }

    /// Same pattern, every entry weighted `1.0`.
    pub fn to_unit_real(&self) -> CsMat<f64> {
        match self {
            Adjacency::Real(m) => ops::unit_weights(m),
            Adjacency::Integer(m) => ops::unit_weights(m),
        }
    }

    /// Unit-weight matrix whose pattern is the union of `A` and `Aᵀ`.
    pub fn real_symmetrized(&self) -> CsMat<f64> {
        match self {
            Adjacency::Real(m) => ops::pattern_symmetrized(m),
            Adjacency::Integer(m) => ops::pattern_symmetrized(m),
        }
    }

    /// Matrix the engine clusters, borrowed when this adjacency already
    /// qualifies (real and symmetric) and derived otherwise.
    pub(crate) fn clustering_matrix(&self) -> Cow<'_, CsMat<f64>> {
        match self {
            Adjacency::Real(m) if ops::is_symmetric(m) => Cow::Borrowed(m),
            other => Cow::Owned(other.real_symmetrized()),
        }
    }
}

impl From<CsMat<f64>> for Adjacency {
    fn from(m: CsMat<f64>) -> Self {
        Adjacency::Real(m)
    }
}

impl From<CsMat<i64>> for Adjacency {
    fn from(m: CsMat<i64>) -> Self {
        Adjacency::Integer(m)
    }
}
