//! Rule ordering: networks violating several rules at once must report the
//! earliest-numbered one.

use hn_model::{Network, Node};
use hn_topology::{validate, verdict, Violation};

#[test]
fn missing_downstream_wins_over_disconnected_unit() {
    // Violates rule 1 (no downstream) and rule 2 (unit has no references).
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::turbine("T1", "Main turbine", None, None),
    ]);
    assert_eq!(validate(&network), Err(Violation::NoDownstream));
}

#[test]
fn disconnected_unit_wins_over_dangling_reference() {
    // Violates rule 2 (missing spillsTo) and rule 5 (feedsFrom dangles).
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::gate("G1", "Spill gate", Some("ghost"), None),
        Node::downstream("D1", "Valley outflow"),
    ]);
    assert_eq!(validate(&network), Err(Violation::UnitNotConnected));
}

#[test]
fn downstream_feed_wins_over_unit_to_unit() {
    // Violates rule 3 (G1 feeds from the downstream) and rule 6 (G1 spills
    // into G2).
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::gate("G1", "Return gate", Some("D1"), Some("G2")),
        Node::gate("G2", "Spill gate", Some("R1"), Some("D1")),
        Node::downstream("D1", "Valley outflow"),
    ]);
    assert_eq!(validate(&network), Err(Violation::FeedingFromDownstream));
}

#[test]
fn idle_reservoir_wins_over_dangling_reference() {
    // Violates rule 4 (R2 feeds nothing) and rule 5 (G1 spills to a ghost).
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::reservoir("R2", "Idle basin"),
        Node::gate("G1", "Spill gate", Some("R1"), Some("ghost")),
        Node::downstream("D1", "Valley outflow"),
    ]);
    assert_eq!(validate(&network), Err(Violation::ReservoirNotConnected));
}

#[test]
fn dangling_reference_wins_over_unit_to_unit() {
    // Violates rule 5 (G1 feeds from a ghost) and rule 6 (G1 spills into
    // G2).
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::gate("G1", "Relief gate", Some("ghost"), Some("G2")),
        Node::gate("G2", "Spill gate", Some("R1"), Some("D1")),
        Node::downstream("D1", "Valley outflow"),
    ]);
    assert_eq!(validate(&network), Err(Violation::InvalidId));
}

#[test]
fn unit_to_unit_wins_over_closed_loop() {
    // The A/B/C/D ring closes back into reservoir A (rule 7), and E spills
    // into another unit (rule 6). Rule 6 is reported.
    let network = Network::new(vec![
        Node::reservoir("A", "Basin A"),
        Node::gate("B", "Gate B", Some("A"), Some("C")),
        Node::reservoir("C", "Basin C"),
        Node::gate("D", "Gate D", Some("C"), Some("A")),
        Node::gate("E", "Gate E", Some("C"), Some("D")),
        Node::downstream("OUT", "Valley outflow"),
    ]);
    assert_eq!(validate(&network), Err(Violation::UnitConnectedToUnit));
}

#[test]
fn wire_input_to_wire_verdict() {
    let network = Network::from_json(
        r#"[
            {"id":"R1","name":"Upper basin","type":"reservoir"},
            {"id":"G1","name":"Spill gate","type":"gate","feedsFrom":"R1","spillsTo":"D1"},
            {"id":"D1","name":"Valley outflow","type":"downstream"}
        ]"#,
    )
    .unwrap();
    let result = verdict(&network);
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"valid":true}"#
    );
}

#[test]
fn nonexistent_feed_reference_reports_invalid_id() {
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::turbine("T1", "Main turbine", Some("R1"), Some("D1")),
        Node::gate("G1", "Spill gate", Some("nope"), Some("D1")),
        Node::downstream("D1", "Valley outflow"),
    ]);
    // R1 feeds T1, so rules 1-4 pass and the ghost reference is reached.
    assert_eq!(validate(&network), Err(Violation::InvalidId));
    assert_eq!(
        serde_json::to_string(&verdict(&network)).unwrap(),
        r#"{"valid":false,"reason":"invalid-id"}"#
    );
}
