#[cfg(test)]
mod tests {
    use crate::metrics::{baseline_modularity, covers, modularity};
    use crate::multilevel::Hierarchy;
    use crate::{modularity_clustering, Adjacency, Error, ModularityClustering, Result};
    use proptest::prelude::*;

    fn symmetric(n: usize, edges: &[(usize, usize, f64)]) -> Adjacency {
        let mut entries = Vec::with_capacity(2 * edges.len());
        for &(i, j, w) in edges {
            entries.push((i, j, w));
            if i != j {
                entries.push((j, i, w));
            }
        }
        Adjacency::from_triplets(n, &entries).unwrap()
    }

    fn two_pairs() -> Adjacency {
        symmetric(4, &[(0, 1, 5.0), (2, 3, 5.0), (0, 2, 1.0)])
    }

    /// Five K4 cliques, consecutive cliques joined by one edge.
    fn ring_of_cliques() -> Adjacency {
        let mut edges = Vec::new();
        for c in 0..5 {
            let base = 4 * c;
            for i in 0..4 {
                for j in (i + 1)..4 {
                    edges.push((base + i, base + j, 1.0));
                }
            }
            edges.push((base + 3, (base + 4) % 20, 1.0));
        }
        symmetric(20, &edges)
    }

    /// The matrix the engine actually clusters: symmetrized, no diagonal.
    fn normalized(adj: &Adjacency) -> Adjacency {
        adj.symmetrize().unwrap_or_else(|| adj.clone()).remove_diagonal()
    }

    #[test]
    fn test_two_pair_example() -> Result<()> {
        let adj = two_pairs();
        let partition = ModularityClustering::new().cluster(&adj)?;

        assert_eq!(partition.nclusters, 2);
        assert_eq!(partition.assignment[0], partition.assignment[1]);
        assert_eq!(partition.assignment[2], partition.assignment[3]);
        assert_ne!(partition.assignment[0], partition.assignment[2]);
        assert_eq!(partition.levels, 2);

        let m = adj.as_real().unwrap();
        let baseline = baseline_modularity(m);
        assert!((baseline - (-122.0 / 484.0)).abs() < 1e-12);
        assert!(partition.modularity > baseline);
        assert!((partition.modularity - 0.4090909090909091).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_isolated_vertices_identity() -> Result<()> {
        let adj = Adjacency::from_triplets(5, &[])?;
        let partition = ModularityClustering::new().cluster(&adj)?;

        assert_eq!(partition.nclusters, 5);
        assert_eq!(partition.assignment, vec![0, 1, 2, 3, 4]);
        assert_eq!(partition.modularity, 0.0);
        Ok(())
    }

    #[test]
    fn test_diagonal_only_is_isolated() -> Result<()> {
        let adj = Adjacency::from_triplets(3, &[(0, 0, 2.0), (1, 1, 2.0), (2, 2, 2.0)])?;
        let partition = ModularityClustering::new().cluster(&adj)?;
        assert_eq!(partition.assignment, vec![0, 1, 2]);
        Ok(())
    }

    #[test]
    fn test_ring_of_cliques() -> Result<()> {
        let adj = ring_of_cliques();
        let partition = ModularityClustering::new().cluster(&adj)?;

        assert_eq!(partition.nclusters, 5);
        assert_eq!(partition.cluster_sizes(), vec![4; 5]);
        for clique in partition.clusters() {
            let base = clique[0];
            assert_eq!(clique, vec![base, base + 1, base + 2, base + 3]);
        }
        Ok(())
    }

    #[test]
    fn test_target_one_reaches_single_cluster() -> Result<()> {
        for adj in [two_pairs(), ring_of_cliques()] {
            let partition = ModularityClustering::new().with_target(1).cluster(&adj)?;
            assert_eq!(partition.nclusters, 1);
            assert!(partition.assignment.iter().all(|&c| c == 0));
        }
        Ok(())
    }

    #[test]
    fn test_target_nearer_fine_side_keeps_identity() -> Result<()> {
        // First pass gives 5 clusters from 20; 15 is nearer to 20.
        let partition = ModularityClustering::new()
            .with_target(15)
            .cluster(&ring_of_cliques())?;
        assert_eq!(partition.nclusters, 20);
        assert_eq!(partition.levels, 1);
        Ok(())
    }

    #[test]
    fn test_target_nearer_coarse_side_coarsens() -> Result<()> {
        let partition = ModularityClustering::new()
            .with_target(10)
            .cluster(&ring_of_cliques())?;
        assert_eq!(partition.nclusters, 5);
        Ok(())
    }

    #[test]
    fn test_target_at_least_n_is_identity() -> Result<()> {
        let partition = ModularityClustering::new().with_target(4).cluster(&two_pairs())?;
        assert_eq!(partition.assignment, vec![0, 1, 2, 3]);
        assert_eq!(partition.levels, 1);
        Ok(())
    }

    #[test]
    fn test_forced_target_modularity_is_exact() -> Result<()> {
        let adj = ring_of_cliques();
        for target in 1..=6 {
            let partition = ModularityClustering::new().with_target(target).cluster(&adj)?;
            let direct = modularity(adj.as_real().unwrap(), &partition.assignment)?;
            assert!((partition.modularity - direct).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_coarsest_level_is_stable() {
        let adj = ring_of_cliques();
        let first = Hierarchy::build(&adj, None);
        let coarsest = first.coarsest();
        let coarse_adj = Adjacency::Real(coarsest.matrix.clone().into_owned());

        let again = Hierarchy::build(&coarse_adj, None);
        assert_eq!(again.len(), 1);
        let level = again.coarsest();
        assert_eq!(level.matching, (0..level.n()).collect::<Vec<_>>());
        // self-loops carry the intra-cluster weight, so the baseline of the
        // coarse graph equals the modularity reached on the fine one
        assert!((level.modularity - coarsest.modularity).abs() < 1e-12);
    }

    #[test]
    fn test_inplace_false_leaves_input_untouched() -> Result<()> {
        let mut adj = Adjacency::from_triplets(3, &[(0, 0, 9.0), (0, 1, 2.0), (1, 0, 2.0), (1, 2, 1.0)])?;
        let before = adj.clone();

        let _ = modularity_clustering(&mut adj, false, 0)?;
        assert_eq!(adj, before);
        Ok(())
    }

    #[test]
    fn test_inplace_strips_symmetric_input() -> Result<()> {
        let mut adj = Adjacency::from_integer_triplets(2, &[(0, 0, 3), (0, 1, 4), (1, 0, 4)])?;
        let _ = modularity_clustering(&mut adj, true, 0)?;

        assert!(adj.is_real());
        let m = adj.as_real().unwrap();
        assert_eq!(m.get(0, 0), None);
        assert_eq!(m.get(0, 1), Some(&1.0));
        Ok(())
    }

    #[test]
    fn test_inplace_leaves_non_symmetric_input() -> Result<()> {
        let mut adj = Adjacency::from_triplets(3, &[(0, 0, 1.0), (0, 1, 2.0), (1, 2, 1.0)])?;
        let before = adj.clone();
        let _ = modularity_clustering(&mut adj, true, 0)?;
        assert_eq!(adj, before);
        Ok(())
    }

    #[test]
    fn test_integer_input_uses_unit_weights() -> Result<()> {
        let entries = [(0, 1, 50), (2, 3, 50), (0, 2, 50), (3, 4, 7)];
        let integer = Adjacency::from_integer_triplets(5, &entries)?;
        let unit: Vec<_> = entries.iter().map(|&(i, j, _)| (i, j, 1.0)).collect();
        let real = Adjacency::from_triplets(5, &unit)?;

        let a = ModularityClustering::new().cluster(&integer)?;
        let b = ModularityClustering::new().cluster(&real)?;
        assert_eq!(a.assignment, b.assignment);
        assert!((a.modularity - b.modularity).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_non_square_rejected() {
        let adj = Adjacency::Real(sprs::CsMat::zero((2, 3)));
        assert_eq!(
            ModularityClustering::new().cluster(&adj),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_empty_rejected() {
        let mut adj = Adjacency::from_triplets(0, &[]).unwrap();
        assert_eq!(modularity_clustering(&mut adj, false, 0), Err(Error::EmptyInput));
    }

    #[test]
    fn test_negative_target_means_none() -> Result<()> {
        let mut a = two_pairs();
        let mut b = two_pairs();
        let with_negative = modularity_clustering(&mut a, false, -3)?;
        let with_zero = modularity_clustering(&mut b, false, 0)?;
        assert_eq!(with_negative, with_zero);
        Ok(())
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (1usize..24).prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n, 0.1f64..10.0), 0..(4 * n)),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_partition_covers_vertices((n, entries) in arb_graph(), target in 0usize..6) {
            let adj = Adjacency::from_triplets(n, &entries).unwrap();
            let partition = ModularityClustering::new().with_target(target).cluster(&adj).unwrap();

            prop_assert_eq!(partition.assignment.len(), n);
            prop_assert!(partition.nclusters >= 1 && partition.nclusters <= n);
            prop_assert!(covers(&partition.assignment, partition.nclusters));
        }

        #[test]
        fn prop_no_target_never_below_baseline((n, entries) in arb_graph()) {
            let adj = Adjacency::from_triplets(n, &entries).unwrap();
            let partition = ModularityClustering::new().cluster(&adj).unwrap();

            let norm = normalized(&adj);
            let baseline = baseline_modularity(norm.as_real().unwrap());
            prop_assert!(partition.modularity >= baseline - 1e-12);
        }

        #[test]
        fn prop_reported_modularity_matches_direct((n, entries) in arb_graph(), target in 0usize..6) {
            let adj = Adjacency::from_triplets(n, &entries).unwrap();
            let partition = ModularityClustering::new().with_target(target).cluster(&adj).unwrap();

            let norm = normalized(&adj);
            let direct = modularity(norm.as_real().unwrap(), &partition.assignment).unwrap();
            prop_assert!((partition.modularity - direct).abs() < 1e-9,
                "reported {} direct {}", partition.modularity, direct);
        }

        #[test]
        fn prop_input_unchanged_without_inplace((n, entries) in arb_graph()) {
            let mut adj = Adjacency::from_triplets(n, &entries).unwrap();
            let before = adj.clone();
            let _ = modularity_clustering(&mut adj, false, 2).unwrap();
            prop_assert_eq!(adj, before);
        }
    }
}
