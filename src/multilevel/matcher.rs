//! Greedy gain-maximizing matching for one level.
//!
//! Vertices are visited in index order. An unmatched vertex `i` joins the
//! neighbour (or the neighbour's cluster) with the largest modularity gain:
//!
//! ```text
//! unmatched j:   ΔQ = (2·w(i,j) − 2·dᵢ·dⱼ / D) / D
//! cluster c:     ΔQ = (2·w(i,c) − 2·dᵢ·d_c / D) / D
//! ```
//!
//! The factor 2 accounts for both `(i, j)` and `(j, i)` in a symmetric matrix.
//! The merge happens when the gain is positive, or unconditionally when the
//! level is in forced-agglomeration mode.

use super::level::UNMATCHED;
use sprs::CsMat;

/// Result of one matching pass.
#[derive(Debug, Clone)]
pub(crate) struct Pass {
    /// Cluster id per vertex, in `[0, nclusters)`.
    pub matching: Vec<usize>,
    pub nclusters: usize,
    /// Summed degree of each cluster; becomes the coarser level's degree.
    pub cluster_degree: Vec<f64>,
    /// Modularity gained by every accepted merge.
    pub total_gain: f64,
}

/// Per-cluster scratch stamped with the vertex that last touched it, so it
/// never needs clearing between vertices.
struct ClusterScratch {
    owner: Vec<usize>,
    evaluated: Vec<usize>,
    weight: Vec<f64>,
}

impl ClusterScratch {
    fn new(n: usize) -> Self {
        Self {
            owner: vec![UNMATCHED; n],
            evaluated: vec![UNMATCHED; n],
            weight: vec![0.0; n],
        }
    }

    /// Add an edge of weight `w` from vertex `i` into cluster `c`.
    fn accumulate(&mut self, c: usize, i: usize, w: f64) {
        if self.owner[c] != i {
            self.owner[c] = i;
            self.weight[c] = w;
        } else {
            self.weight[c] += w;
        }
    }

    /// Weight from `i` into `c`, handed out once per `(i, c)`.
    fn take(&mut self, c: usize, i: usize) -> Option<f64> {
        if self.owner[c] != i || self.evaluated[c] == i {
            return None;
        }
        self.evaluated[c] = i;
        Some(self.weight[c])
    }
}

/// Run one greedy pass over `matrix`.
///
/// Ties between candidates resolve to the first one in scan order.
pub(crate) fn greedy_pass(
    matrix: &CsMat<f64>,
    degree: &[f64],
    degree_total: f64,
    forced: bool,
) -> Pass {
    let n = matrix.rows();
    let inv_total = 1.0 / degree_total;
    let mut matching = vec![UNMATCHED; n];
    let mut cluster_degree = vec![0.0; n];
    let mut scratch = ClusterScratch::new(n);
    let mut nclusters = 0;
    let mut total_gain = 0.0;

    for (i, row) in matrix.outer_iterator().enumerate() {
        if matching[i] != UNMATCHED {
            continue;
        }

        for (j, &w) in row.iter() {
            if j == i {
                continue;
            }
            let c = matching[j];
            if c != UNMATCHED {
                scratch.accumulate(c, i, w);
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for (j, &w) in row.iter() {
            if j == i {
                continue;
            }
            let gain = match matching[j] {
                UNMATCHED => (2.0 * w - 2.0 * degree[i] * degree[j] * inv_total) * inv_total,
                c => match scratch.take(c, i) {
                    Some(w_c) if w_c > 0.0 => {
                        (2.0 * w_c - 2.0 * degree[i] * cluster_degree[c] * inv_total) * inv_total
                    }
                    _ => continue,
                },
            };
            if best.map_or(true, |(_, g)| gain > g) {
                best = Some((j, gain));
            }
        }

        match best {
            Some((j, gain)) if gain > 0.0 || forced => {
                total_gain += gain;
                match matching[j] {
                    UNMATCHED => {
                        matching[i] = nclusters;
                        matching[j] = nclusters;
                        cluster_degree[nclusters] = degree[i] + degree[j];
                        nclusters += 1;
                    }
                    c => {
                        cluster_degree[c] += degree[i];
                        matching[i] = c;
                    }
                }
            }
            _ => {
                matching[i] = nclusters;
                cluster_degree[nclusters] = degree[i];
                nclusters += 1;
            }
        }
    }

    cluster_degree.truncate(nclusters);
    Pass {
        matching,
        nclusters,
        cluster_degree,
        total_gain,
    }
}

/// What the driver does with a level after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Target reached closer at this level's own size: identity, stop.
    Stabilize,
    /// Build a coarser level from the pass.
    ProceedToCoarser,
    /// Too many clusters and nothing merged: redo the level, forced.
    ForceAgglomerate,
    /// No beneficial merge left: identity, stop.
    Terminal,
}

impl Decision {
    /// Whether a level of `n` vertices already satisfies the target.
    pub fn target_reached(n: usize, target: Option<usize>) -> bool {
        target.is_some_and(|t| n <= t)
    }

    /// Decide after a pass that turned `n` vertices into `nc` clusters.
    ///
    /// When `nc ≤ target ≤ n` the nearer of `n` and `nc` wins; a tie keeps `n`.
    pub fn after_pass(
        n: usize,
        nc: usize,
        total_gain: f64,
        forced: bool,
        target: Option<usize>,
    ) -> Self {
        if let Some(t) = target {
            if n <= t {
                return Decision::Stabilize;
            }
            if nc <= t && n - t <= t - nc {
                return Decision::Stabilize;
            }
        }
        if nc >= 1 && (total_gain > 0.0 || nc < n) {
            return Decision::ProceedToCoarser;
        }
        match target {
            Some(t) if nc > t && !forced => Decision::ForceAgglomerate,
            _ => Decision::Terminal,
        }
    }
}
