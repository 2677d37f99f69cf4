//! One level of the coarsening hierarchy.

use crate::sparse::ops;
use sprs::CsMat;
use std::borrow::Cow;

/// Cluster id of a vertex the matcher has not placed yet.
pub(crate) const UNMATCHED: usize = usize::MAX;

/// A graph at one resolution, plus the statistics the matcher needs.
///
/// Level 0 holds the (possibly caller-owned) input matrix; every coarser level
/// owns the Galerkin product `R · A · P` built from its parent's matching.
#[derive(Debug)]
pub(crate) struct Level<'a> {
    /// Position in the hierarchy, 0 = finest.
    pub index: usize,
    pub matrix: Cow<'a, CsMat<f64>>,
    /// Cluster id per vertex; [`UNMATCHED`] until the level is finalized.
    pub matching: Vec<usize>,
    /// Weighted degree per vertex, self-loop weight included.
    pub degree: Vec<f64>,
    /// Sum of all degrees at the finest level, floored at 1.
    pub degree_total: f64,
    /// Cumulative modularity up to and including this level.
    pub modularity: f64,
    /// Maps this level's clusters back onto its own vertices. Present iff a
    /// coarser level was built from this one.
    pub prolongation: Option<CsMat<f64>>,
    /// Accept the best merge even when its gain is not positive.
    pub forced_agglomeration: bool,
    /// Index of the coarser successor.
    pub next: Option<usize>,
}

impl<'a> Level<'a> {
    /// Finest level: degrees, normalizer, and baseline modularity from `matrix`.
    ///
    /// ```text
    /// Q₀ = Σᵢ (Aᵢᵢ − dᵢ² / D) / D,   D = max(Σᵢ dᵢ, 1)
    /// ```
    pub fn finest(matrix: Cow<'a, CsMat<f64>>) -> Self {
        let degree = ops::row_sums(&matrix);
        let self_loops = ops::diagonal(&matrix);
        let degree_total = degree.iter().sum::<f64>().max(1.0);

        let modularity = self_loops
            .iter()
            .zip(&degree)
            .map(|(&sl, &d)| (sl - d * d / degree_total) / degree_total)
            .sum();

        let n = matrix.rows();
        Self {
            index: 0,
            matrix,
            matching: vec![UNMATCHED; n],
            degree,
            degree_total,
            modularity,
            prolongation: None,
            forced_agglomeration: false,
            next: None,
        }
    }

    /// Coarser level whose statistics are carried over from the pass that
    /// produced it rather than recomputed.
    pub fn coarse(
        index: usize,
        matrix: CsMat<f64>,
        degree: Vec<f64>,
        degree_total: f64,
        modularity: f64,
    ) -> Self {
        let n = matrix.rows();
        Self {
            index,
            matrix: Cow::Owned(matrix),
            matching: vec![UNMATCHED; n],
            degree,
            degree_total,
            modularity,
            prolongation: None,
            forced_agglomeration: false,
            next: None,
        }
    }

    /// Vertex count.
    pub fn n(&self) -> usize {
        self.matrix.rows()
    }

    /// Index of the finer predecessor.
    pub fn prev(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Whether this level's matrix was created by the engine.
    pub fn owns_matrix(&self) -> bool {
        matches!(self.matrix, Cow::Owned(_))
    }

    /// Make this level terminal: every vertex is its own cluster.
    pub fn finalize_identity(&mut self) {
        self.matching = (0..self.n()).collect();
        self.prolongation = None;
        self.next = None;
    }

    pub fn is_finalized(&self) -> bool {
        !self.matching.contains(&UNMATCHED)
    }
}
