//! End-to-end counts for the symmetry-reduced exploration.
//!
//! The per-depth class counts of 3x3 Tic-Tac-Toe under D4 symmetry are
//! well known; the whole run is checked against them.

use ttt_orbits::build_class_dag;

/// Distinct equivalence classes first discovered at each move index
const EXPECTED_LEVEL_SIZES: [usize; 10] = [1, 3, 12, 38, 108, 174, 204, 153, 57, 15];

#[test]
fn level_sizes_match_known_counts() {
    let dag = build_class_dag().unwrap();
    assert_eq!(dag.level_sizes(), EXPECTED_LEVEL_SIZES.as_slice());
}

#[test]
fn total_class_count_is_765() {
    let dag = build_class_dag().unwrap();
    assert_eq!(dag.node_count(), 765);
    assert_eq!(
        dag.node_count(),
        EXPECTED_LEVEL_SIZES.iter().sum::<usize>(),
        "arena size must equal the sum of frontier sizes"
    );
}

#[test]
fn root_has_exactly_three_opening_classes() {
    let dag = build_class_dag().unwrap();
    let root = dag.node(dag.root()).unwrap();
    assert_eq!(root.successors.len(), 3);
}

#[test]
fn finished_games_have_no_successors() {
    let dag = build_class_dag().unwrap();
    let mut finished = 0usize;
    for node in dag.nodes() {
        if dag.canonical_of(node.class).unwrap().has_winner() {
            assert!(
                node.successors.is_empty(),
                "class {} is a finished game but has outgoing edges",
                node.class
            );
            finished += 1;
        }
    }
    assert!(finished > 0, "the exploration must reach finished games");
}

#[test]
fn every_edge_advances_exactly_one_level() {
    // Forward-only structure: a successor board always carries one more
    // token than its source, so the DAG cannot contain a cycle or a
    // self-loop.
    let dag = build_class_dag().unwrap();
    for (source, target) in dag.edge_list() {
        assert_ne!(source, target, "self-loop at class {source}");
        let source_level = dag.level_of(source).unwrap();
        let target_level = dag.level_of(target).unwrap();
        assert_eq!(
            target_level,
            source_level + 1,
            "edge {source} -> {target} skips levels"
        );
    }
}

#[test]
fn every_non_root_class_is_reachable() {
    let dag = build_class_dag().unwrap();
    let mut incoming = vec![0usize; dag.node_count()];
    for (_, target) in dag.edge_list() {
        incoming[target.index()] += 1;
    }

    assert_eq!(incoming[dag.root().index()], 0, "nothing points at the root");
    for node in dag.nodes().iter().skip(1) {
        assert!(
            incoming[node.class.index()] > 0,
            "class {} was created but never linked",
            node.class
        );
    }
}
