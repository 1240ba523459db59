use line_tally_core::{Counter, CounterTotals};

#[test]
fn totals_round_trip_through_json() {
    let mut counter = Counter::new(".java");
    counter.process_line("class A {}");
    counter.process_line("");
    counter.process_line("@Deprecated void old() {}");

    let totals = counter.totals();
    let json = serde_json::to_string(&totals).expect("serialize");
    let back: CounterTotals = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, totals);
    assert_eq!(back.total_lines, 3);
}

#[test]
fn totals_json_field_names_are_stable() {
    let totals = Counter::new(".rs").totals();
    let value = serde_json::to_value(&totals).expect("serialize");

    for field in ["extension", "empty_lines", "not_empty_lines", "total_lines", "deprecations"] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
}
