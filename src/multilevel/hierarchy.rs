//! Multilevel driver: grows the level chain until no coarsening step helps.
//!
//! The chain lives in a `Vec` ordered finest to coarsest, so the recursion
//! of the classic formulation becomes a loop and teardown cannot overflow the
//! stack however many levels a pathological graph produces.

use super::coarsen;
use super::level::Level;
use super::matcher::{self, Decision};
use crate::sparse::Adjacency;
use tracing::{debug, trace, warn};

/// Finest-to-coarsest chain of levels.
#[derive(Debug)]
pub(crate) struct Hierarchy<'a> {
    levels: Vec<Level<'a>>,
    target: Option<usize>,
}

impl<'a> Hierarchy<'a> {
    /// Build the full hierarchy over `adjacency`.
    ///
    /// A real symmetric matrix is borrowed as level 0. Anything else is
    /// replaced by a unit-weight symmetrized copy that the hierarchy owns.
    pub fn build(adjacency: &'a Adjacency, target: Option<usize>) -> Self {
        let finest = Level::finest(adjacency.clustering_matrix());
        debug!(
            n = finest.n(),
            derived = finest.owns_matrix(),
            modularity = finest.modularity,
            "initialized finest level"
        );

        let mut hierarchy = Self {
            levels: vec![finest],
            target,
        };
        while let Some(coarser) = hierarchy.establish_last() {
            hierarchy.levels.push(coarser);
        }
        hierarchy
    }

    /// Finalize the current coarsest level, returning its successor if one
    /// should be built.
    fn establish_last(&mut self) -> Option<Level<'a>> {
        let target = self.target;
        let next_index = self.levels.len();
        let level = self.levels.last_mut()?;

        loop {
            let n = level.n();
            if Decision::target_reached(n, target) {
                debug!(level = level.index, n, ?target, "target cluster count reached");
                level.finalize_identity();
                return None;
            }

            let pass = matcher::greedy_pass(
                &level.matrix,
                &level.degree,
                level.degree_total,
                level.forced_agglomeration,
            );
            debug!(
                level = level.index,
                n,
                nc = pass.nclusters,
                modularity = level.modularity,
                new_modularity = level.modularity + pass.total_gain,
                gain = pass.total_gain,
                forced = level.forced_agglomeration,
                "matching pass"
            );

            let decision = Decision::after_pass(
                n,
                pass.nclusters,
                pass.total_gain,
                level.forced_agglomeration,
                target,
            );
            match decision {
                Decision::ForceAgglomerate => {
                    debug!(level = level.index, n, ?target, "forcing agglomeration");
                    level.forced_agglomeration = true;
                }
                Decision::Stabilize | Decision::Terminal => {
                    level.finalize_identity();
                    return None;
                }
                Decision::ProceedToCoarser => {
                    return match coarsen::build(&level.matrix, &pass.matching, pass.nclusters) {
                        Ok(operators) => {
                            level.matching = pass.matching;
                            level.prolongation = Some(operators.prolongation);
                            level.next = Some(next_index);
                            Some(Level::coarse(
                                next_index,
                                operators.coarse,
                                pass.cluster_degree,
                                level.degree_total,
                                level.modularity + pass.total_gain,
                            ))
                        }
                        Err(err) => {
                            warn!(level = level.index, %err, "coarsening failed, keeping level as terminal");
                            level.finalize_identity();
                            None
                        }
                    };
                }
            }
        }
    }

    pub fn levels(&self) -> &[Level<'a>] {
        &self.levels
    }

    /// Number of levels, finest included.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn coarsest(&self) -> &Level<'a> {
        // never empty: `build` always pushes the finest level
        &self.levels[self.levels.len() - 1]
    }

    /// Vertex count per level, finest first.
    pub fn sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Level::n).collect()
    }
}

impl Drop for Hierarchy<'_> {
    fn drop(&mut self) {
        // coarsest first
        while let Some(level) = self.levels.pop() {
            trace!(
                level = level.index,
                n = level.n(),
                owned = level.owns_matrix(),
                "releasing level"
            );
        }
    }
}
