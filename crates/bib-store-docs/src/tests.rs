//! Integration tests for `DocStore` against an in-memory database.

use bib_core::{
  registration::{NewRegistration, Participation, Sex},
  store::RegistrationStore,
};
use temp_dir::TempDir;

use crate::DocStore;

async fn store() -> DocStore {
  DocStore::open_in_memory().await.expect("in-memory store")
}

fn new_reg(name: &str) -> NewRegistration {
  NewRegistration {
    name:                    name.into(),
    age:                     25,
    phone:                   "+55 11 98765-4321".into(),
    city:                    "São Paulo".into(),
    sex:                     Sex::Female,
    participated_last_event: Participation::Yes,
  }
}

// ─── Append & read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn append_then_list_round_trips() {
  let s = store().await;

  let stored = s.append(new_reg("Ana Costa")).await.unwrap();
  assert_eq!(stored.name, "Ana Costa");
  assert_eq!(stored.phone, "+55 11 98765-4321");

  let all = s.list_all().await.unwrap();
  assert_eq!(all, vec![stored]);
}

#[tokio::test]
async fn empty_collection_lists_nothing() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn documents_keep_insertion_order() {
  let s = store().await;
  for name in ["Ana Costa", "Beto Lima", "Carla Souza"] {
    s.append(new_reg(name)).await.unwrap();
  }

  let names: Vec<_> =
    s.list_all().await.unwrap().into_iter().map(|r| r.name).collect();
  assert_eq!(names, ["Ana Costa", "Beto Lima", "Carla Souza"]);
}

#[tokio::test]
async fn identical_submissions_are_distinct_documents() {
  let s = store().await;
  s.append(new_reg("Ana Costa")).await.unwrap();
  s.append(new_reg("Ana Costa")).await.unwrap();
  assert_eq!(s.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn accented_values_round_trip() {
  let s = store().await;
  let mut input = new_reg("José Conceição");
  input.city = "São João da Boa Vista".into();
  input.participated_last_event = Participation::No;

  let stored = s.append(input).await.unwrap();
  let all = s.list_all().await.unwrap();
  assert_eq!(all[0].name, "José Conceição");
  assert_eq!(all[0].city, "São João da Boa Vista");
  assert_eq!(all[0].participated_last_event, Participation::No);
  assert_eq!(all[0], stored);
}

// ─── File lifecycle ──────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_keeps_existing_documents() {
  let dir = TempDir::new().expect("temp dir");
  let path = dir.child("registrations.db");

  let first = DocStore::open(&path).await.expect("open store");
  first.append(new_reg("Ana Costa")).await.unwrap();
  first.append(new_reg("Beto Lima")).await.unwrap();
  drop(first);

  let reopened = DocStore::open(&path).await.expect("reopen store");
  assert_eq!(reopened.list_all().await.unwrap().len(), 2);
}
