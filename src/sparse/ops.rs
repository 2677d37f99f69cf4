//! Free functions over CSR matrices shared by the engine.

use crate::error::{Error, Result};
use sprs::{CsMat, TriMat};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Whether `m` is square and `m[i,j] == m[j,i]` for every stored entry.
///
/// Comparison is exact, so a matrix symmetrized by [`symmetrize`] always
/// passes.
pub(crate) fn is_symmetric<N: PartialEq>(m: &CsMat<N>) -> bool {
    if m.rows() != m.cols() {
        return false;
    }
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, v) in row.iter() {
            match m.get(j, i) {
                Some(u) if u == v => {}
                _ => return false,
            }
        }
    }
    true
}

/// `A + Aᵀ`, or `A` itself when it is already symmetric.
pub(crate) fn symmetrize(m: &CsMat<f64>) -> Cow<'_, CsMat<f64>> {
    if is_symmetric(m) {
        return Cow::Borrowed(m);
    }
    let t: CsMat<f64> = m.transpose_view().to_csr();
    Cow::Owned(m + &t)
}

/// Integer counterpart of [`symmetrize`].
pub(crate) fn symmetrize_integer(m: &CsMat<i64>) -> Cow<'_, CsMat<i64>> {
    if is_symmetric(m) {
        return Cow::Borrowed(m);
    }
    let t: CsMat<i64> = m.transpose_view().to_csr();
    Cow::Owned(m + &t)
}

/// Copy of `m` with every diagonal entry dropped.
pub(crate) fn remove_diagonal<N: Clone + std::ops::Add<Output = N>>(m: &CsMat<N>) -> CsMat<N> {
    let mut tri = TriMat::with_capacity(m.shape(), m.nnz());
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, v) in row.iter() {
            if i != j {
                tri.add_triplet(i, j, v.clone());
            }
        }
    }
    tri.to_csr()
}

/// Same sparsity pattern as `m`, every stored entry set to `1.0`.
pub(crate) fn unit_weights<N>(m: &CsMat<N>) -> CsMat<f64> {
    let mut tri = TriMat::with_capacity(m.shape(), m.nnz());
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, _) in row.iter() {
            tri.add_triplet(i, j, 1.0);
        }
    }
    tri.to_csr()
}

/// Unit-weight matrix whose pattern is the union of `m` and `mᵀ`.
///
/// Used when the driver receives a matrix that is not symmetric or not real.
pub(crate) fn pattern_symmetrized<N>(m: &CsMat<N>) -> CsMat<f64> {
    let mut pattern = BTreeSet::new();
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, _) in row.iter() {
            pattern.insert((i, j));
            pattern.insert((j, i));
        }
    }
    let n = m.rows().max(m.cols());
    let mut tri = TriMat::with_capacity((n, n), pattern.len());
    for (i, j) in pattern {
        tri.add_triplet(i, j, 1.0);
    }
    tri.to_csr()
}

/// Weighted degree of every row, diagonal included.
pub(crate) fn row_sums(m: &CsMat<f64>) -> Vec<f64> {
    m.outer_iterator().map(|row| row.iter().map(|(_, &v)| v).sum()).collect()
}

/// Diagonal entry of every row (0 where absent).
pub(crate) fn diagonal(m: &CsMat<f64>) -> Vec<f64> {
    let mut diag = vec![0.0; m.rows()];
    for (i, row) in m.outer_iterator().enumerate() {
        for (j, &v) in row.iter() {
            if i == j {
                diag[i] = v;
            }
        }
    }
    diag
}

/// Sparse product `a · b`, refusing mismatched inner dimensions.
pub(crate) fn multiply(a: &CsMat<f64>, b: &CsMat<f64>) -> Result<CsMat<f64>> {
    if a.cols() != b.rows() {
        return Err(Error::Coarsening(format!(
            "cannot multiply {}x{} by {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    Ok(a * b)
}

/// Sparse matrix-vector product `m · x`.
pub(crate) fn multiply_vector(m: &CsMat<f64>, x: &[f64]) -> Result<Vec<f64>> {
    if m.cols() != x.len() {
        return Err(Error::DimensionMismatch {
            expected: m.cols(),
            found: x.len(),
        });
    }
    Ok(m.outer_iterator()
        .map(|row| row.iter().map(|(j, &v)| v * x[j]).sum())
        .collect())
}
