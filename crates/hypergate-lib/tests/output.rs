mod common;

use common::load_fixture_registry;
use hypergate_lib::{find_routes, RouteQuery, RouteReport};

#[test]
fn report_serializes_for_json_consumers() {
    let registry = load_fixture_registry();
    let routes =
        find_routes(&registry, &RouteQuery::to_gate("SOL", "DEN")).expect("query succeeds");
    let report = RouteReport::from_routes(&registry, "SOL", routes);

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["start"]["code"], "SOL");
    assert_eq!(value["start"]["name"], "Sol");
    assert_eq!(value["routes"][0]["destination_code"], "DEN");
    assert_eq!(value["routes"][0]["total_hu"], 265.0);
    assert_eq!(value["routes"][0]["path"][1], "SIR");
}

#[test]
fn plain_rendering_ranks_from_one() {
    let registry = load_fixture_registry();
    let routes = find_routes(&registry, &RouteQuery::anywhere("SOL")).expect("query succeeds");
    let report = RouteReport::from_routes(&registry, "SOL", routes);
    let rendered = report.render_plain();

    assert!(rendered.starts_with("Routes from Sol (SOL), cheapest first:"));
    assert!(rendered.contains("  1: Proxima Centauri (PRX)  90 hu  via SOL -> PRX"));
    assert!(rendered.contains("  6: Deneb (DEN)  265 hu  via SOL -> SIR -> PRO -> DEN"));
}

#[test]
fn empty_result_renders_a_no_routes_line() {
    let registry = load_fixture_registry();
    let routes = find_routes(&registry, &RouteQuery::anywhere("ARC")).expect("query succeeds");
    let report = RouteReport::from_routes(&registry, "ARC", routes);

    assert_eq!(
        report.render_plain(),
        "No routes found from Arcturus (ARC).\n"
    );
}
