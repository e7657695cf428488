mod common;

use common::load_fixture_registry;
use hypergate_lib::build_graph;

#[test]
fn every_gate_gets_an_adjacency_entry() {
    let registry = load_fixture_registry();
    let graph = build_graph(&registry).expect("graph builds");

    assert_eq!(graph.len(), registry.len());
    for gate in registry.iter() {
        assert!(graph.contains(&gate.code), "missing entry for {}", gate.code);
    }
    // ARC carries no links in the fixture but is still a vertex.
    assert!(graph.neighbours("ARC").is_empty());
}

#[test]
fn links_keep_their_source_order() {
    let registry = load_fixture_registry();
    let graph = build_graph(&registry).expect("graph builds");

    let targets: Vec<&str> = graph
        .neighbours("SOL")
        .iter()
        .map(|edge| edge.target.as_str())
        .collect();
    assert_eq!(targets, ["PRX", "SIR", "CAS"]);
}

#[test]
fn string_and_number_weights_convert_alike() {
    let registry = load_fixture_registry();
    let graph = build_graph(&registry).expect("graph builds");

    // "90" in the fixture is a string, 10 a plain number.
    let sol_prx = &graph.neighbours("SOL")[0];
    assert_eq!(sol_prx.hu, 90.0);
    let prx_sir = graph
        .neighbours("PRX")
        .iter()
        .find(|edge| edge.target == "SIR")
        .expect("PRX links SIR");
    assert_eq!(prx_sir.hu, 10.0);
}
