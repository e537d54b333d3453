//! Integration tests for the biological evaluation facade.

use grnbench::eval::biological::Evaluator;
use grnbench::network::{network_from_pairs, Network};

fn genes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_extract_restricts_to_universe() {
    let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2"), ("G2", "G3")]));
    let result = evaluator.extract(&genes(&["G1", "G2"]));
    assert_eq!(result, network_from_pairs(&[("G1", "G2")]));
}

#[test]
fn test_extract_empty_universe() {
    let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2")]));
    assert!(evaluator.extract(&[]).is_empty());
}

#[test]
fn test_extract_is_idempotent() {
    let evaluator = Evaluator::new(network_from_pairs(&[
        ("G1", "G2"),
        ("G2", "G3"),
        ("G3", "G1"),
        ("G5", "G6"),
    ]));
    let universe = genes(&["G1", "G2", "G3"]);
    let once = evaluator.extract(&universe);
    let again = Evaluator::new(once.clone()).extract(&universe);
    assert_eq!(once, again);
}

#[test]
fn test_disjoint_networks_directed() {
    let evaluator = Evaluator::new(network_from_pairs(&[("A", "B"), ("B", "C"), ("C", "D")]));
    let predicted = network_from_pairs(&[("D", "A"), ("B", "A")]);
    let universe = genes(&["A", "B", "C", "D"]);
    let counts = evaluator.evaluate(&predicted, &universe, true);
    assert_eq!(counts.true_positives, 0.0);
    assert_eq!(counts.false_positives, 2.0);
    assert_eq!(counts.false_negatives, 3.0);
}

#[test]
fn test_undirected_single_edge_not_double_counted() {
    let evaluator = Evaluator::new(network_from_pairs(&[("a", "b")]));
    let predicted = network_from_pairs(&[("a", "b")]);
    let counts = evaluator.evaluate(&predicted, &genes(&["a", "b"]), false);
    assert_eq!(counts.true_positives, 1.0);
}

#[test]
fn test_directed_and_undirected_worked_example() {
    // Ground truth filtered to the universe is {(G1, G2)}.
    let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2"), ("G5", "G6")]));
    let predicted = network_from_pairs(&[("G1", "G2"), ("G3", "G4")]);
    let universe = genes(&["G1", "G2", "G3", "G4"]);

    let directed = evaluator.evaluate(&predicted, &universe, true);
    assert_eq!(directed.true_positives, 1.0);
    assert_eq!(directed.false_positives, 1.0);
    assert_eq!(directed.false_negatives, 0.0);

    let undirected = evaluator.evaluate(&predicted, &universe, false);
    assert_eq!(undirected.true_positives, 1.0);
    assert_eq!(undirected.false_positives, 1.0);
    assert_eq!(undirected.false_negatives, 0.0);
}

#[test]
fn test_self_loop_divergence_between_extract_and_evaluate() {
    // extract drops (G1, G1); the scoring filter keeps it.
    let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G1"), ("G1", "G2")]));
    let universe = genes(&["G1", "G2"]);

    assert_eq!(
        evaluator.extract(&universe),
        network_from_pairs(&[("G1", "G2")])
    );

    let counts = evaluator.evaluate(&Network::new(), &universe, true);
    assert_eq!(counts.false_negatives, 2.0);
}

#[test]
fn test_undirected_self_loop_reports_half_count() {
    // The scoring filter keeps a ground-truth self-loop; being its own
    // reverse, it survives symmetrization as a single entry and the
    // divide-by-two correction reports it as half a missed edge.
    let evaluator = Evaluator::new(network_from_pairs(&[("G2", "G2")]));
    let counts = evaluator.evaluate(&Network::new(), &genes(&["G2"]), false);
    assert_eq!(counts.true_positives, 0.0);
    assert_eq!(counts.false_positives, 0.0);
    assert_eq!(counts.false_negatives, 0.5);
}

#[test]
fn test_empty_prediction_against_empty_ground_truth() {
    let evaluator = Evaluator::new(Network::new());
    let counts = evaluator.evaluate(&Network::new(), &genes(&["G1"]), false);
    assert_eq!(counts.true_positives, 0.0);
    assert_eq!(counts.false_positives, 0.0);
    assert_eq!(counts.false_negatives, 0.0);
}

#[test]
fn test_counts_feed_reporting_metrics() {
    let evaluator = Evaluator::new(network_from_pairs(&[("G1", "G2"), ("G2", "G3")]));
    let predicted = network_from_pairs(&[("G1", "G2"), ("G3", "G1")]);
    let counts = evaluator.evaluate(&predicted, &genes(&["G1", "G2", "G3"]), true);
    assert!((counts.precision() - 0.5).abs() < 1e-12);
    assert!((counts.recall() - 0.5).abs() < 1e-12);
    assert!((counts.f1() - 0.5).abs() < 1e-12);
}
