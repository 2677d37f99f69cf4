//! Partition quality measures.
//!
//! # Modularity
//!
//! For a symmetric weighted adjacency `A` with degrees `dᵢ = Σⱼ Aᵢⱼ` and
//! `D = max(Σᵢ dᵢ, 1)`:
//!
//! ```text
//! Q = Σ_c [ in_c / D − (d_c / D)² ]
//! ```
//!
//! where `in_c` sums `Aᵢⱼ` over ordered pairs inside cluster `c` (diagonal
//! included) and `d_c` sums the degrees of its vertices. This is the same
//! normalization the multilevel engine uses, so its reported modularity can be
//! checked against [`modularity`] directly.
//!
//! # Example
//!
//! ```rust
//! use modclust::metrics::modularity;
//! use modclust::Adjacency;
//!
//! let adj = Adjacency::from_triplets(2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
//! let m = adj.as_real().unwrap();
//!
//! assert_eq!(modularity(m, &[0, 0]).unwrap(), 0.0);
//! assert_eq!(modularity(m, &[0, 1]).unwrap(), -0.5);
//! ```

use crate::error::{Error, Result};
use sprs::CsMat;

/// Modularity of `assignment` on `matrix`.
///
/// Cluster ids need not be contiguous.
pub fn modularity(matrix: &CsMat<f64>, assignment: &[usize]) -> Result<f64> {
    let n = matrix.rows();
    if assignment.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: assignment.len(),
        });
    }
    let k = assignment.iter().copied().max().map_or(0, |c| c + 1);

    let mut internal = vec![0.0; k];
    let mut degree = vec![0.0; k];
    for (i, row) in matrix.outer_iterator().enumerate() {
        let ci = assignment[i];
        for (j, &w) in row.iter() {
            degree[ci] += w;
            if assignment[j] == ci {
                internal[ci] += w;
            }
        }
    }

    let total = degree.iter().sum::<f64>().max(1.0);
    Ok(internal
        .iter()
        .zip(&degree)
        .map(|(&inner, &d)| inner / total - (d / total) * (d / total))
        .sum())
}

/// Modularity of the all-singletons partition.
pub fn baseline_modularity(matrix: &CsMat<f64>) -> f64 {
    let identity: Vec<usize> = (0..matrix.rows()).collect();
    // length always matches
    modularity(matrix, &identity).unwrap_or(0.0)
}

/// Whether `assignment` maps every vertex into `0..nclusters` and uses every id.
pub fn covers(assignment: &[usize], nclusters: usize) -> bool {
    let mut used = vec![false; nclusters];
    for &c in assignment {
        match used.get_mut(c) {
            Some(slot) => *slot = true,
            None => return false,
        }
    }
    used.into_iter().all(|u| u)
}
