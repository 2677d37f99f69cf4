//! Restriction / prolongation operators and the Galerkin coarse matrix.
//!
//! For a matching of `n` vertices into `nc` clusters:
//!
//! ```text
//! R  (nc × n):  R[matching[i], i] = 1
//! P  (n × nc):  Rᵀ
//! A' (nc × nc): R · A · P
//! ```
//!
//! `A'[c, d]` sums the edge weight between clusters `c` and `d`; the diagonal
//! `A'[c, c]` collects the weight inside `c` (both directions), which the next
//! level reads as its self-loop term.

use crate::error::{Error, Result};
use crate::sparse::ops;
use sprs::{CsMat, TriMat};

/// Operators produced by one coarsening step.
#[derive(Debug, Clone)]
pub(crate) struct Operators {
    pub prolongation: CsMat<f64>,
    pub coarse: CsMat<f64>,
}

/// 0/1 restriction matrix of a finalized matching.
pub(crate) fn restriction(matching: &[usize], nclusters: usize) -> Result<CsMat<f64>> {
    let n = matching.len();
    let mut tri = TriMat::with_capacity((nclusters, n), n);
    for (i, &c) in matching.iter().enumerate() {
        if c >= nclusters {
            return Err(Error::Coarsening(format!(
                "vertex {i} assigned to cluster {c}, only {nclusters} clusters"
            )));
        }
        tri.add_triplet(c, i, 1.0);
    }
    Ok(tri.to_csr())
}

/// Build `P` and `R · A · P` for `matrix` under `matching`.
pub(crate) fn build(matrix: &CsMat<f64>, matching: &[usize], nclusters: usize) -> Result<Operators> {
    if matching.len() != matrix.rows() {
        return Err(Error::DimensionMismatch {
            expected: matrix.rows(),
            found: matching.len(),
        });
    }
    let r = restriction(matching, nclusters)?;
    let p: CsMat<f64> = r.transpose_view().to_csr();
    let ra = ops::multiply(&r, matrix)?;
    let coarse = ops::multiply(&ra, &p)?;
    Ok(Operators {
        prolongation: p,
        coarse,
    })
}
