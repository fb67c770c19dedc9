//! Shared helpers for funil CLI specs

use assert_cmd::Command;
use std::path::PathBuf;

/// The funil binary against the built-in seed data
pub fn funil() -> Command {
    Command::cargo_bin("funil").unwrap()
}

/// A temp dir holding a cities JSON fixture
pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    pub fn with_cities(json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cities.json"), json).unwrap();
        Self { dir }
    }

    pub fn file(&self) -> PathBuf {
        self.dir.path().join("cities.json")
    }

    /// The binary pointed at this fixture's city file
    pub fn funil(&self) -> Command {
        let mut cmd = funil();
        cmd.arg("--file").arg(self.file());
        cmd
    }
}

/// Five cities spanning stages, priorities, and temperatures
pub const FIVE_CITIES: &str = r#"[
  {
    "id": "city-1",
    "name": "Ribeirão Preto",
    "state": "SP",
    "population": 711825,
    "currentStatus": "Quantitativo",
    "isPriority": true,
    "temperature": "hot"
  },
  {
    "id": "city-2",
    "name": "Uberlândia",
    "state": "MG",
    "population": 699097,
    "currentStatus": "Quero"
  },
  {
    "id": "city-3",
    "name": "Sorocaba",
    "state": "SP",
    "population": 687357,
    "currentStatus": "Contrato",
    "temperature": "cold",
    "interactions": [
      {
        "id": "int-301",
        "type": "note",
        "content": "Contrato assinado na semana passada.",
        "createdAt": "2026-08-12T11:45:00Z",
        "author": "Ana Souza"
      }
    ]
  },
  {
    "id": "city-4",
    "name": "Campinas",
    "state": "SP",
    "population": 1223237,
    "currentStatus": "Devo",
    "temperature": "warm"
  },
  {
    "id": "city-5",
    "name": "Niterói",
    "state": "RJ",
    "population": 515317,
    "currentStatus": "Posso",
    "isPriority": true
  }
]"#;
