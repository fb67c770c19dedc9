//! List filtering specs

use crate::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn seed_list_shows_every_city() {
    funil()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Ribeirão Preto"))
        .stdout(contains("Campinas"))
        .stdout(contains("Niterói"));
}

#[test]
fn search_narrows_by_name() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--search", "camp"])
        .assert()
        .success()
        .stdout(contains("Campinas"))
        .stdout(contains("Sorocaba").not());
}

#[test]
fn search_ignores_case_and_accents() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--search", "UBERLANDIA"])
        .assert()
        .success()
        .stdout(contains("Uberlândia"));
}

#[test]
fn search_matches_the_state_field() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--search", "rj"])
        .assert()
        .success()
        .stdout(contains("Niterói"))
        .stdout(contains("Campinas").not());
}

#[test]
fn no_match_renders_the_empty_state() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--search", "xyzzy"])
        .assert()
        .success()
        .stdout("Nenhuma cidade encontrada.\n");
}

#[test]
fn status_flags_restrict_membership() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--status", "quero", "--status", "devo"])
        .assert()
        .success()
        .stdout(contains("Uberlândia"))
        .stdout(contains("Campinas"))
        .stdout(contains("Sorocaba").not())
        .stdout(contains("Niterói").not());
}

#[test]
fn priority_filter_is_tri_state() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--priority", "true"])
        .assert()
        .success()
        .stdout(contains("Ribeirão Preto"))
        .stdout(contains("Campinas").not());

    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--priority", "false"])
        .assert()
        .success()
        .stdout(contains("Campinas"))
        .stdout(contains("Ribeirão Preto").not());
}

#[test]
fn temperature_filter_excludes_unclassified_cities() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--temperature", "warm", "--temperature", "hot"])
        .assert()
        .success()
        .stdout(contains("Ribeirão Preto"))
        .stdout(contains("Campinas"))
        // city-2 and city-5 have no temperature set
        .stdout(contains("Uberlândia").not())
        .stdout(contains("Niterói").not());
}

#[test]
fn unknown_stage_is_a_usage_error() {
    let fixture = Fixture::with_cities(FIVE_CITIES);
    fixture
        .funil()
        .args(["list", "--status", "Fechado"])
        .assert()
        .failure()
        .stderr(contains("unknown stage"));
}
