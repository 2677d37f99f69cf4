//! Sparse adjacency matrices.
//!
//! The clustering engine never touches raw storage. Everything it needs from
//! the sparse layer goes through this module, which wraps [`sprs`] CSR
//! matrices:
//!
//! | Operation | Used by |
//! |-----------|---------|
//! | symmetric / real queries | entry point, driver |
//! | symmetrize (`A + Aᵀ`) | entry point |
//! | remove diagonal | entry point |
//! | coerce to unit weights | entry point, driver |
//! | transpose, sparse product | coarsening |
//! | matrix-vector product | projection |
//!
//! ## Value Types
//!
//! An [`Adjacency`] is either real-valued (entries are edge weights) or
//! integer-valued. Integer matrices are treated as patterns: every stored
//! entry becomes an edge of weight 1 before clustering.
//!
//! ## Self-loops
//!
//! Diagonal entries carry meaning only inside the engine, where a coarse
//! vertex's diagonal holds the weight internal to the cluster it stands for.
//! Caller-supplied diagonals are stripped before clustering.

mod adjacency;
pub(crate) mod ops;

pub use adjacency::Adjacency;
pub use sprs::CsMat;
