//! Multilevel modularity clustering.
//!
//! Greedy matching plus algebraic-multigrid-style coarsening, in the spirit
//! of Noack & Rotta's multilevel modularity clustering.
//!
//! ## The Scheme
//!
//! ```text
//! level 0   A₀ ──match──► R₀ ──► A₁ = R₀ A₀ R₀ᵀ
//! level 1   A₁ ──match──► R₁ ──► A₂ = R₁ A₁ R₁ᵀ
//!   ⋮
//! level k   Aₖ: no beneficial merge left → identity partition
//! ```
//!
//! 1. **Match**: one greedy pass pairs each unmatched vertex with the
//!    neighbour (or neighbouring cluster) of largest modularity gain.
//! 2. **Coarsen**: clusters become the vertices of the next level. The
//!    Galerkin product folds intra-cluster weight onto the diagonal, where it
//!    acts as a self-loop in the modularity of the coarser graph.
//! 3. **Project**: the identity partition of the coarsest level is pushed back
//!    through every prolongation `Pₖ = Rₖᵀ` to the original vertices.
//!
//! Modularity is tracked incrementally: the baseline of level 0 plus the gain
//! of every accepted merge. It equals the modularity of the returned
//! partition evaluated directly on the input (see [`crate::metrics::modularity`]).
//!
//! ## Target Cluster Count
//!
//! Without a target the hierarchy stops as soon as a pass neither gains
//! modularity nor merges anything. With a target `t`:
//!
//! - a level with `n ≤ t` vertices stops immediately;
//! - a pass landing on `nc ≤ t ≤ n` keeps whichever of `n` and `nc` is
//!   nearer to `t` (a tie keeps `n`);
//! - a pass that merges nothing while `nc > t` is repeated with forced
//!   agglomeration, accepting the best merge whatever its gain.
//!
//! ## Usage
//!
//! ```rust
//! use modclust::{Adjacency, ModularityClustering};
//!
//! // Two heavy pairs joined by a light edge.
//! let adj = Adjacency::from_triplets(4, &[
//!     (0, 1, 5.0), (1, 0, 5.0),
//!     (2, 3, 5.0), (3, 2, 5.0),
//!     (0, 2, 1.0), (2, 0, 1.0),
//! ]).unwrap();
//!
//! let partition = ModularityClustering::new().cluster(&adj).unwrap();
//! assert_eq!(partition.nclusters, 2);
//! assert_eq!(partition.assignment[0], partition.assignment[1]);
//! assert_ne!(partition.assignment[0], partition.assignment[2]);
//! ```
//!
//! ## References
//!
//! - Noack & Rotta (2009). "Multi-level algorithms for modularity clustering."
//! - Newman (2006). "Modularity and community structure in networks."

mod coarsen;
mod hierarchy;
mod level;
mod matcher;
mod partition;
mod projector;

pub(crate) use hierarchy::Hierarchy;
pub use partition::Partition;

use crate::error::{Error, Result};
use crate::sparse::Adjacency;
use std::borrow::Cow;
use tracing::debug;

/// Multilevel modularity clustering.
#[derive(Debug, Clone, Default)]
pub struct ModularityClustering {
    /// Desired cluster count; `None` maximizes modularity.
    target: Option<usize>,
    /// Let [`ModularityClustering::cluster_mut`] normalize the caller's matrix.
    inplace: bool,
}

impl ModularityClustering {
    /// Create a clusterer that maximizes modularity with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aim for roughly `target` clusters. `0` means no target.
    ///
    /// Merges are forced past the modularity optimum when there are too many
    /// clusters, so modularity may end lower than without a target.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = (target > 0).then_some(target);
        self
    }

    /// Allow [`ModularityClustering::cluster_mut`] to overwrite an already
    /// symmetric input with its normalized form (diagonal stripped, real
    /// weights).
    pub fn with_inplace(mut self, inplace: bool) -> Self {
        self.inplace = inplace;
        self
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn inplace(&self) -> bool {
        self.inplace
    }

    /// Cluster `adjacency` without modifying it.
    pub fn cluster(&self, adjacency: &Adjacency) -> Result<Partition> {
        let (normalized, _) = normalize(adjacency)?;
        run(&normalized, self.target)
    }

    /// Cluster `adjacency`, normalizing it in place when configured with
    /// [`with_inplace(true)`](Self::with_inplace) and the input was already
    /// symmetric. A non-symmetric input is never modified.
    pub fn cluster_mut(&self, adjacency: &mut Adjacency) -> Result<Partition> {
        let (normalized, was_symmetric) = normalize(adjacency)?;
        if self.inplace && was_symmetric {
            *adjacency = normalized;
            return run(adjacency, self.target);
        }
        run(&normalized, self.target)
    }
}

/// Cluster `adjacency` to maximize modularity.
///
/// `ncluster_target ≤ 0` means no target. With `inplace` set, an already
/// symmetric `adjacency` is replaced by its normalized form.
pub fn modularity_clustering(
    adjacency: &mut Adjacency,
    inplace: bool,
    ncluster_target: i64,
) -> Result<Partition> {
    let target = usize::try_from(ncluster_target).unwrap_or(0);
    ModularityClustering::new()
        .with_target(target)
        .with_inplace(inplace)
        .cluster_mut(adjacency)
}

/// Symmetrize, strip the diagonal, and coerce to real weights.
///
/// Returns the normalized matrix and whether `adjacency` was symmetric to
/// begin with.
fn normalize(adjacency: &Adjacency) -> Result<(Adjacency, bool)> {
    let (rows, cols) = adjacency.shape();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(Error::EmptyInput);
    }

    let symmetrized = match adjacency.symmetrize() {
        Some(s) => Cow::Owned(s),
        None => Cow::Borrowed(adjacency),
    };
    let was_symmetric = matches!(symmetrized, Cow::Borrowed(_));

    let stripped = symmetrized.remove_diagonal();
    let normalized = if stripped.is_real() {
        stripped
    } else {
        Adjacency::Real(stripped.to_unit_real())
    };
    Ok((normalized, was_symmetric))
}

fn run(adjacency: &Adjacency, target: Option<usize>) -> Result<Partition> {
    let hierarchy = Hierarchy::build(adjacency, target);
    let partition = projector::project(hierarchy.levels())?;
    debug_assert_eq!(partition.nclusters, hierarchy.coarsest().n());
    debug!(
        n = adjacency.n(),
        nclusters = partition.nclusters,
        modularity = partition.modularity,
        levels = hierarchy.len(),
        sizes = ?hierarchy.sizes(),
        "clustering finished"
    );
    Ok(partition)
}
