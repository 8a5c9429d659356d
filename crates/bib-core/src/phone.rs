//! Phone normalization under a configured region's numbering plan.
//!
//! Pure functions, no side effects. The write path uses [`normalize`] (strict:
//! parse *and* validity), the dashboard read path uses [`display`] (lenient:
//! best-effort formatting with pt-BR placeholders for missing or broken
//! values). The policy split lives in the callers, not here.

use phonenumber::{Mode, country};

use crate::error::PhoneError;

/// Placeholder shown when a stored record has no phone at all.
pub const NOT_INFORMED: &str = "Não informado";
/// Placeholder shown when a stored phone cannot be parsed.
pub const INVALID_NUMBER: &str = "Número inválido";

/// Parse `raw` under `region` and render it in international notation,
/// e.g. `+55 11 98765-4321`.
///
/// Strict: a number that parses but is not valid for the region (too short,
/// impossible prefix) is rejected too. The error keeps the original input.
pub fn normalize(raw: &str, region: country::Id) -> Result<String, PhoneError> {
  let trimmed = raw.trim();
  let parsed = phonenumber::parse(Some(region), trimmed).map_err(|e| {
    PhoneError {
      raw:    raw.to_owned(),
      region: format!("{region:?}"),
      reason: e.to_string(),
    }
  })?;
  if !phonenumber::is_valid(&parsed) {
    return Err(PhoneError {
      raw:    raw.to_owned(),
      region: format!("{region:?}"),
      reason: "not a valid number for the region".to_owned(),
    });
  }
  Ok(parsed.format().mode(Mode::International).to_string())
}

/// Best-effort display form of a stored phone value.
///
/// `None` or empty becomes [`NOT_INFORMED`], an unparseable value becomes
/// [`INVALID_NUMBER`], anything else is re-rendered in international
/// notation. Stored values written through the strict path always take the
/// last branch.
pub fn display(stored: Option<&str>, region: country::Id) -> String {
  let Some(raw) = stored else {
    return NOT_INFORMED.to_owned();
  };
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return NOT_INFORMED.to_owned();
  }
  match phonenumber::parse(Some(region), trimmed) {
    Ok(parsed) => parsed.format().mode(Mode::International).to_string(),
    Err(_) => INVALID_NUMBER.to_owned(),
  }
}
