//! Mutation specs: stage moves, flags, timeline appends
//!
//! JSON mode prints the full updated collection, so these specs can check
//! that exactly one record changed.

use crate::prelude::*;
use predicates::str::contains;

fn collection_after(args: &[&str]) -> Vec<serde_json::Value> {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    let mut cmd = fixture.funil();
    cmd.args(args).args(["--format", "json"]);
    let assert = cmd.assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&out).unwrap()
}

fn original_collection() -> Vec<serde_json::Value> {
    serde_json::from_str(FIVE_CITIES).unwrap()
}

#[test]
fn set_stage_changes_exactly_one_record() {
    let after = collection_after(&["set-stage", "city-3", "posso"]);
    let before = original_collection();

    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(before.iter()) {
        assert_eq!(a["id"], b["id"]);
        if a["id"] == "city-3" {
            assert_eq!(a["currentStatus"], "Posso");
            // Everything else on the record is untouched
            assert_eq!(a["name"], b["name"]);
            assert_eq!(a["interactions"], b["interactions"]);
        } else {
            assert_eq!(a["currentStatus"], b["currentStatus"]);
        }
    }
}

#[test]
fn set_stage_unknown_city_leaves_the_collection_unchanged() {
    let after = collection_after(&["set-stage", "city-99", "posso"]);
    let before = original_collection();

    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(before.iter()) {
        assert_eq!(a["currentStatus"], b["currentStatus"]);
    }
}

#[test]
fn set_stage_text_confirms_the_move() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["set-stage", "city-2", "contrato"])
        .assert()
        .success()
        .stdout("Uberlândia → Contrato\n");
}

#[test]
fn set_priority_toggles_the_flag() {
    let after = collection_after(&["set-priority", "city-2", "on"]);
    let city = after.iter().find(|c| c["id"] == "city-2").unwrap();
    assert_eq!(city["isPriority"], true);

    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["set-priority", "city-1", "off"])
        .assert()
        .success()
        .stdout(contains("prioridade removida"));
}

#[test]
fn set_temperature_classifies_the_city() {
    let after = collection_after(&["set-temperature", "city-2", "quente"]);
    let city = after.iter().find(|c| c["id"] == "city-2").unwrap();
    assert_eq!(city["temperature"], "hot");
}

#[test]
fn add_note_appends_to_the_timeline() {
    let after = collection_after(&["add-note", "city-3", "Retornar na terça-feira"]);
    let city = after.iter().find(|c| c["id"] == "city-3").unwrap();
    let interactions = city["interactions"].as_array().unwrap();

    // One pre-existing note plus the new one, append order preserved
    assert_eq!(interactions.len(), 2);
    assert_eq!(interactions[1]["type"], "note");
    assert_eq!(interactions[1]["content"], "Retornar na terça-feira");
    assert_ne!(interactions[1]["id"], interactions[0]["id"]);
    assert_eq!(interactions[1]["author"], "Carlos Silva");
}

#[test]
fn add_visit_records_the_kind() {
    let after = collection_after(&["add-visit", "city-4", "Visita à secretaria", "--author", "Ana Souza"]);
    let city = after.iter().find(|c| c["id"] == "city-4").unwrap();
    let interactions = city["interactions"].as_array().unwrap();
    let last = interactions.last().unwrap();
    assert_eq!(last["type"], "visit");
    assert_eq!(last["author"], "Ana Souza");
}

#[test]
fn mutation_with_unknown_stage_fails() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["set-stage", "city-1", "Fechado"])
        .assert()
        .failure()
        .stderr(contains("unknown stage"));
}
