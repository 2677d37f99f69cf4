//! Top-down projection of the coarsest partition onto the original vertices.

use super::level::Level;
use super::partition::Partition;
use crate::error::{Error, Result};
use crate::sparse::ops;
use tracing::trace;

/// Walk from the coarsest level back to level 0, applying each finer level's
/// prolongation to the real-valued assignment vector.
pub(crate) fn project(levels: &[Level<'_>]) -> Result<Partition> {
    let coarsest = levels.last().ok_or(Error::EmptyInput)?;
    debug_assert!(coarsest.is_finalized());
    let mut u: Vec<f64> = coarsest.matching.iter().map(|&c| c as f64).collect();

    let mut current = coarsest;
    while let Some(k) = current.prev() {
        let level = &levels[k];
        debug_assert_eq!(level.next, Some(current.index));
        let p = level.prolongation.as_ref().ok_or_else(|| {
            Error::Coarsening(format!("level {} has no prolongation", level.index))
        })?;
        u = ops::multiply_vector(p, &u)?;
        trace!(level = level.index, n = u.len(), "projected assignment");
        current = level;
    }

    Ok(Partition {
        nclusters: coarsest.n(),
        assignment: u.into_iter().map(|x| x as usize).collect(),
        modularity: coarsest.modularity,
        levels: levels.len(),
    })
}
