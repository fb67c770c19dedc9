//! Grouped-view specs

use crate::prelude::*;
use predicates::str::contains;

fn stdout_of(mut cmd: assert_cmd::Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn priority_grouping_lists_prioritized_first() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let out = stdout_of({
        let mut cmd = fixture.funil();
        cmd.args(["list", "--sort", "priority"]);
        cmd
    });

    let prioritized = out.find("Priorizadas (2)").expect("prioritized header");
    let rest = out.find("Não priorizadas (3)").expect("plain header");
    assert!(prioritized < rest, "prioritized bucket must come first:\n{out}");
}

#[test]
fn priority_grouping_renders_an_empty_bucket() {
    let fixture = Fixture::with_cities(
        r#"[{"id": "city-1", "name": "Campinas", "state": "SP",
             "population": 1223237, "currentStatus": "Devo",
             "isPriority": true}]"#,
    );
    fixture
        .funil()
        .args(["list", "--sort", "priority"])
        .assert()
        .success()
        .stdout(contains("Priorizadas (1)"))
        .stdout(contains("Não priorizadas (0)"));
}

#[test]
fn status_grouping_is_funnel_reversed() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let out = stdout_of({
        let mut cmd = fixture.funil();
        cmd.args(["list", "--sort", "status"]);
        cmd
    });

    let positions: Vec<usize> = ["Contrato (", "Quantitativo (", "Posso (", "Devo (", "Quero ("]
        .iter()
        .map(|h| out.find(h).unwrap_or_else(|| panic!("missing header {h:?}:\n{out}")))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "headers out of order:\n{out}"
    );
}

#[test]
fn temperature_grouping_puts_unclassified_last() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let out = stdout_of({
        let mut cmd = fixture.funil();
        cmd.args(["list", "--sort", "temperature"]);
        cmd
    });

    let hot = out.find("Quente (1)").expect("hot header");
    let unset = out.find("Sem temperatura (2)").expect("unset header");
    assert!(hot < unset);
}

#[test]
fn json_view_is_tagged_by_shape() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let out = stdout_of({
        let mut cmd = fixture.funil();
        cmd.args(["list", "--sort", "status", "--format", "json"]);
        cmd
    });

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let buckets = value["grouped"].as_array().expect("grouped array");
    assert_eq!(buckets[0]["label"], "Contrato");
    assert_eq!(buckets[0]["cities"].as_array().unwrap().len(), 1);
}

#[test]
fn flat_sort_keys_do_not_group() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--sort", "name", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"flat\""));
}

#[test]
fn empty_json_view_is_the_empty_variant() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let out = stdout_of({
        let mut cmd = fixture.funil();
        cmd.args(["list", "--search", "xyzzy", "--sort", "status", "--format", "json"]);
        cmd
    });
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!("empty"));
}
