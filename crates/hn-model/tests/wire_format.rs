//! Wire-format round trips for network descriptions.

use hn_model::{ControlUnitKind, Network, Node};

#[test]
fn decode_ordered_record_list() {
    let network = Network::from_json(
        r#"[
            {"id":"R1","name":"Upper basin","type":"reservoir"},
            {"id":"G1","name":"Spill gate","type":"gate","feedsFrom":"R1","spillsTo":"D1"},
            {"id":"D1","name":"Valley outflow","type":"downstream"}
        ]"#,
    )
    .unwrap();

    assert_eq!(network.len(), 3);
    assert!(network.nodes()[0].is_reservoir());
    assert!(network.nodes()[2].is_downstream());

    let gate = network.nodes()[1].as_control_unit().unwrap();
    assert_eq!(gate.kind, ControlUnitKind::Gate);
    assert_eq!(gate.feeds_from.as_deref(), Some("R1"));
    assert_eq!(gate.spills_to.as_deref(), Some("D1"));
}

#[test]
fn json_round_trip_preserves_order_and_references() {
    let network = Network::new(vec![
        Node::reservoir("R1", "Upper basin"),
        Node::turbine("T1", "Main turbine", Some("R1"), None),
        Node::downstream("D1", "Valley outflow"),
    ]);

    let encoded = network.to_json().unwrap();
    let decoded = Network::from_json(&encoded).unwrap();
    assert_eq!(decoded, network);
}

#[test]
fn control_unit_references_encode_as_null_when_absent() {
    let network = Network::new(vec![Node::turbine("T1", "Main turbine", None, Some("D1"))]);
    let encoded = network.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value[0]["feedsFrom"], serde_json::Value::Null);
    assert_eq!(value[0]["spillsTo"], "D1");
    assert_eq!(value[0]["type"], "turbine");
}

#[test]
fn rejects_unknown_type_tag() {
    let result = Network::from_json(r#"[{"id":"X","name":"X","type":"aquifer"}]"#);
    assert!(result.is_err());
}
