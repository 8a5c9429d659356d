//! Grouping and counting of stored registrations.
//!
//! Everything here is recomputed per read; nothing is cached. Grouping is
//! case-sensitive and exact-match on the stored, already-normalized value,
//! so "Sao Paulo" and "São Paulo" count as distinct groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registration::{Participation, Registration};

/// The field a report groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
  City,
  Sex,
  Participation,
}

impl GroupKey {
  fn value_of(self, record: &Registration) -> String {
    match self {
      Self::City => record.city.clone(),
      Self::Sex => record.sex.label().to_owned(),
      Self::Participation => record.participated_last_event.label().to_owned(),
    }
  }
}

/// One bar of a chart: a distinct value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
  pub value: String,
  pub count: u64,
}

/// Result of grouping a record set by one field.
///
/// Rows are sorted by value, so the same record set always produces the
/// same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
  pub group_key: GroupKey,
  pub rows:      Vec<CountRow>,
}

/// Named totals for the participation flag, derived from the same counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationTotals {
  pub participated:        u64,
  pub did_not_participate: u64,
}

/// Count occurrences of each distinct `group_key` value in `records`.
pub fn aggregate(
  records: &[Registration],
  group_key: GroupKey,
) -> AggregationResult {
  let mut counts: BTreeMap<String, u64> = BTreeMap::new();
  for record in records {
    *counts.entry(group_key.value_of(record)).or_insert(0) += 1;
  }
  AggregationResult {
    group_key,
    rows: counts
      .into_iter()
      .map(|(value, count)| CountRow { value, count })
      .collect(),
  }
}

/// The "did participate" / "did not participate" convenience view.
pub fn participation_totals(records: &[Registration]) -> ParticipationTotals {
  let participated = records
    .iter()
    .filter(|r| r.participated_last_event == Participation::Yes)
    .count() as u64;
  ParticipationTotals {
    participated,
    did_not_participate: records.len() as u64 - participated,
  }
}
