use adj_core::errors::AdjError;
use adj_core::rng::RngHandle;
use adj_core::{AdjacencyList, Index, QuotientOptions};
use adj_graph::{
    check_groups, check_map, check_neighbors, gen_group_assignment, gen_random_list, quotient,
    quotient_checked, reindex, reindex_checked,
};

fn range_info(err: AdjError) -> adj_core::ErrorInfo {
    match err {
        AdjError::IndexOutOfRange(info) => info,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn neighbor_outside_list_is_located() {
    let list = AdjacencyList::from_nested(vec![vec![0, 1], vec![2, 3]]);
    let info = range_info(check_neighbors(&list).unwrap_err());
    assert_eq!(info.code, "index-out-of-range");
    assert_eq!(info.context.get("node"), Some(&"1".to_string()));
    assert_eq!(info.context.get("slot"), Some(&"0".to_string()));
    assert_eq!(info.context.get("value"), Some(&"2".to_string()));
    assert_eq!(info.context.get("bound"), Some(&"2".to_string()));
}

#[test]
fn negative_values_are_out_of_range() {
    let host = AdjacencyList::from_nested(vec![vec![0]]);
    assert!(check_neighbors(&host).is_ok());
    assert!(check_map(&host, &[-1]).is_err());
    assert!(check_groups(&[-1], 3).is_err());
}

#[test]
fn map_and_group_checks_report_positions() {
    let list = AdjacencyList::from_nested(vec![vec![1], vec![0]]);
    let info = range_info(check_map(&list, &[1, 0, 2]).unwrap_err());
    assert_eq!(info.context.get("position"), Some(&"2".to_string()));

    let info = range_info(check_groups(&[0, 3], 3).unwrap_err());
    assert_eq!(info.context.get("node"), Some(&"1".to_string()));
    assert!(check_groups(&[0, 2], 3).is_ok());
}

#[test]
fn checked_reindex_reports_instead_of_panicking() {
    let list = AdjacencyList::from_nested(vec![vec![1], vec![0]]);
    assert_eq!(reindex_checked(&list, &[4]).unwrap_err().code(), "index-out-of-range");

    let dangling = AdjacencyList::from_nested(vec![vec![5], vec![0]]);
    assert_eq!(reindex_checked(&dangling, &[1]).unwrap_err().code(), "index-out-of-range");

    let err = reindex_checked(&list, &[1, 1]).unwrap_err();
    assert!(matches!(err, AdjError::DuplicateMapping(_)));
}

#[test]
fn checked_quotient_keeps_the_length_error_kind() {
    let list = AdjacencyList::from_nested(vec![vec![1], vec![0]]);
    let err = quotient_checked(&list, &[0], 1, QuotientOptions::default()).unwrap_err();
    assert!(matches!(err, AdjError::LengthMismatch(_)));

    let err = quotient_checked(&list, &[0, 1], 1, QuotientOptions::default()).unwrap_err();
    assert!(matches!(err, AdjError::IndexOutOfRange(_)));
}

#[test]
fn checked_variants_agree_on_valid_input() {
    let mut rng = RngHandle::from_seed(2024);
    let list = gen_random_list(25, 5, &mut rng);
    let groups = gen_group_assignment(25, 6, &mut rng).unwrap();
    let map: [Index; 5] = [4, 9, 0, 24, 13];

    assert_eq!(reindex_checked(&list, &map).unwrap(), reindex(&list, &map).unwrap());
    assert_eq!(
        quotient_checked(&list, &groups, 6, QuotientOptions::simple()).unwrap(),
        quotient(&list, &groups, 6, QuotientOptions::simple()).unwrap()
    );
}

#[test]
#[should_panic]
fn unchecked_reindex_panics_on_dangling_neighbor() {
    let dangling = AdjacencyList::from_nested(vec![vec![5], vec![0]]);
    let _ = reindex(&dangling, &[0]);
}
