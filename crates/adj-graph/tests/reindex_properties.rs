use std::collections::BTreeSet;

use adj_core::errors::AdjError;
use adj_core::rng::RngHandle;
use adj_core::{AdjacencyList, Index};
use adj_graph::{gen_permutation, gen_random_list, reindex};
use proptest::prelude::*;

fn is_subsequence(needle: &[Index], haystack: &[Index]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|value| rest.any(|candidate| candidate == value))
}

proptest! {
    #[test]
    fn identity_map_reproduces_the_list(seed in any::<u64>(), nodes in 0usize..40) {
        let mut rng = RngHandle::from_seed(seed);
        let list = gen_random_list(nodes, 6, &mut rng);
        let identity: Vec<Index> = (0..nodes as Index).collect();

        prop_assert_eq!(reindex(&list, &identity).unwrap(), list);
    }

    #[test]
    fn retained_rows_are_ordered_subsequences(
        seed in any::<u64>(),
        nodes in 1usize..40,
        keep_mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let list = gen_random_list(nodes, 6, &mut rng);
        let map: Vec<Index> = (0..nodes)
            .filter(|&node| keep_mask[node])
            .map(|node| node as Index)
            .collect();
        let kept: BTreeSet<Index> = map.iter().copied().collect();

        let out = reindex(&list, &map).unwrap();
        prop_assert_eq!(out.len(), map.len());

        for (position, &source) in map.iter().enumerate() {
            let original = list.neighbors(source as usize).unwrap();
            let renumbered: Vec<Index> = out
                .neighbors(position)
                .unwrap()
                .iter()
                .map(|&target| map[target as usize])
                .collect();
            let expected: Vec<Index> = original
                .iter()
                .copied()
                .filter(|neighbor| kept.contains(neighbor))
                .collect();

            prop_assert!(is_subsequence(&renumbered, original));
            prop_assert_eq!(renumbered, expected);
        }
    }

    #[test]
    fn permutations_preserve_every_entry(seed in any::<u64>(), nodes in 0usize..40) {
        let mut rng = RngHandle::from_seed(seed);
        let list = gen_random_list(nodes, 6, &mut rng);
        let map = gen_permutation(nodes, nodes, &mut rng);

        let out = reindex(&list, &map).unwrap();
        prop_assert_eq!(out.edge_count(), list.edge_count());
    }

    #[test]
    fn repeated_sources_are_rejected(seed in any::<u64>(), nodes in 2usize..30) {
        let mut rng = RngHandle::from_seed(seed);
        let list = gen_random_list(nodes, 4, &mut rng);
        let mut map = gen_permutation(nodes, nodes, &mut rng);
        let repeated = map[0];
        map.push(repeated);

        match reindex(&list, &map) {
            Err(AdjError::DuplicateMapping(info)) => {
                prop_assert_eq!(info.context.get("source").cloned(), Some(repeated.to_string()));
                prop_assert_eq!(info.context.get("second_position").cloned(), Some(nodes.to_string()));
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }
}

#[test]
fn subset_drops_edges_to_removed_nodes() {
    let list = AdjacencyList::from_nested(vec![vec![1, 2], vec![0, 2], vec![0, 1, 1]]);
    let out = reindex(&list, &[2, 1]).unwrap();
    assert_eq!(out.into_nested(), vec![vec![1, 1], vec![0]]);
}
