//! Registration — the unit of record.
//!
//! A registration is created exactly once, at submission time, and is never
//! updated or deleted afterwards. The persistence backend assigns
//! `created_at` at write time; callers never supply it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Closed enums ────────────────────────────────────────────────────────────

/// Sex of the participant, as offered by the sign-up form.
///
/// The wire and display labels are the event's pt-BR strings; the variant
/// names are the English equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
  #[serde(rename = "Masculino")]
  Male,
  #[serde(rename = "Feminino")]
  Female,
}

impl Sex {
  /// The label stored in backends and shown on the dashboard.
  pub fn label(self) -> &'static str {
    match self {
      Self::Male => "Masculino",
      Self::Female => "Feminino",
    }
  }

  /// Exact-match parse of a stored or submitted label.
  pub fn parse_label(s: &str) -> Option<Self> {
    match s {
      "Masculino" => Some(Self::Male),
      "Feminino" => Some(Self::Female),
      _ => None,
    }
  }
}

/// Whether the participant joined the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participation {
  #[serde(rename = "Sim")]
  Yes,
  #[serde(rename = "Não")]
  No,
}

impl Participation {
  pub fn label(self) -> &'static str {
    match self {
      Self::Yes => "Sim",
      Self::No => "Não",
    }
  }

  pub fn parse_label(s: &str) -> Option<Self> {
    match s {
      "Sim" => Some(Self::Yes),
      "Não" => Some(Self::No),
      _ => None,
    }
  }
}

// ─── Registration ────────────────────────────────────────────────────────────

/// One participant's validated, stored submission.
/// Once written, no field is ever updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
  /// Trimmed and title-cased per word.
  pub name:                    String,
  pub age:                     u32,
  /// Canonical international format, e.g. `+55 11 98765-4321`.
  pub phone:                   String,
  /// Normalized like `name`.
  pub city:                    String,
  pub sex:                     Sex,
  pub participated_last_event: Participation,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:              DateTime<Utc>,
}

// ─── NewRegistration ─────────────────────────────────────────────────────────

/// Input to [`crate::store::RegistrationStore::append`].
/// `created_at` is always set by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
  pub name:                    String,
  pub age:                     u32,
  pub phone:                   String,
  pub city:                    String,
  pub sex:                     Sex,
  pub participated_last_event: Participation,
}

impl NewRegistration {
  /// Attach the store-assigned timestamp, producing the durable record.
  pub fn into_stored(self, created_at: DateTime<Utc>) -> Registration {
    Registration {
      name: self.name,
      age: self.age,
      phone: self.phone,
      city: self.city,
      sex: self.sex,
      participated_last_event: self.participated_last_event,
      created_at,
    }
  }
}
