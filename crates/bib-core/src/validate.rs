//! Field-level validation of a raw form submission.
//!
//! The UI constrains `sex` and `participation` with selection widgets, but
//! nothing at this layer trusts that. Every rule is re-checked here and every
//! violation is reported, not just the first one found.

use phonenumber::country;
use serde::Deserialize;

use crate::{
  error::RejectionReason,
  phone,
  registration::{NewRegistration, Participation, Sex},
};

/// The six raw strings the sign-up form produces.
///
/// Absent fields deserialize to empty strings so they surface as rejection
/// reasons rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
  #[serde(default)]
  pub name:          String,
  #[serde(default)]
  pub age:           String,
  #[serde(default)]
  pub phone:         String,
  #[serde(default)]
  pub city:          String,
  #[serde(default)]
  pub sex:           String,
  #[serde(default)]
  pub participation: String,
}

/// Check all six fields and normalize them into a [`NewRegistration`].
///
/// Pure function. On failure the returned list contains one entry per
/// violated rule, in field order.
pub fn validate(
  raw: &RawSubmission,
  region: country::Id,
) -> Result<NewRegistration, Vec<RejectionReason>> {
  let mut reasons = Vec::new();

  let name = match raw.name.trim() {
    "" => {
      reasons.push(RejectionReason::NameMissing);
      None
    }
    trimmed => Some(title_case(trimmed)),
  };

  let age = parse_age(&raw.age, &mut reasons);

  let phone = match raw.phone.trim() {
    "" => {
      reasons.push(RejectionReason::PhoneMissing);
      None
    }
    trimmed => match phone::normalize(trimmed, region) {
      Ok(canonical) => Some(canonical),
      Err(err) => {
        reasons.push(RejectionReason::PhoneInvalid(err));
        None
      }
    },
  };

  let city = match raw.city.trim() {
    "" => {
      reasons.push(RejectionReason::CityMissing);
      None
    }
    trimmed => Some(title_case(trimmed)),
  };

  let sex = match Sex::parse_label(raw.sex.trim()) {
    Some(sex) => Some(sex),
    None => {
      reasons.push(RejectionReason::SexUnknown(raw.sex.clone()));
      None
    }
  };

  let participation = match Participation::parse_label(raw.participation.trim())
  {
    Some(p) => Some(p),
    None => {
      reasons
        .push(RejectionReason::ParticipationUnknown(raw.participation.clone()));
      None
    }
  };

  match (name, age, phone, city, sex, participation) {
    (
      Some(name),
      Some(age),
      Some(phone),
      Some(city),
      Some(sex),
      Some(participation),
    ) if reasons.is_empty() => Ok(NewRegistration {
      name,
      age,
      phone,
      city,
      sex,
      participated_last_event: participation,
    }),
    _ => Err(reasons),
  }
}

fn parse_age(raw: &str, reasons: &mut Vec<RejectionReason>) -> Option<u32> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    reasons.push(RejectionReason::AgeMissing);
    return None;
  }
  if !trimmed.chars().all(|c| c.is_ascii_digit()) {
    reasons.push(RejectionReason::AgeNotNumeric(trimmed.to_owned()));
    return None;
  }
  match trimmed.parse::<u32>() {
    Ok(0) => {
      reasons.push(RejectionReason::AgeNotPositive);
      None
    }
    Ok(age) => Some(age),
    // all-digit input can only fail by overflowing
    Err(_) => {
      reasons.push(RejectionReason::AgeOutOfRange(trimmed.to_owned()));
      None
    }
  }
}

/// Uppercase the first letter of each word, lowercase the rest.
/// Collapses runs of whitespace.
fn title_case(s: &str) -> String {
  s.split_whitespace()
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first
          .to_uppercase()
          .chain(chars.flat_map(char::to_lowercase))
          .collect(),
        None => String::new(),
      }
    })
    .collect::<Vec<String>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn br() -> country::Id { country::Id::BR }

  fn full_submission() -> RawSubmission {
    RawSubmission {
      name:          "maria da silva".into(),
      age:           "25".into(),
      phone:         "11987654321".into(),
      city:          "são paulo".into(),
      sex:           "Feminino".into(),
      participation: "Sim".into(),
    }
  }

  #[test]
  fn accepts_and_normalizes_a_full_submission() {
    let new = validate(&full_submission(), br()).unwrap();
    assert_eq!(new.name, "Maria Da Silva");
    assert_eq!(new.age, 25);
    assert_eq!(new.phone, "+55 11 98765-4321");
    assert_eq!(new.city, "São Paulo");
    assert_eq!(new.sex, Sex::Female);
    assert_eq!(new.participated_last_event, Participation::Yes);
  }

  #[test]
  fn rejects_bad_ages() {
    for bad in ["0", "-5", "abc"] {
      let raw = RawSubmission { age: bad.into(), ..full_submission() };
      let reasons = validate(&raw, br()).unwrap_err();
      assert_eq!(reasons.len(), 1, "age {bad:?} should be the sole reason");
      assert!(matches!(
        reasons[0],
        RejectionReason::AgeNotNumeric(_) | RejectionReason::AgeNotPositive
      ));
    }
  }

  #[test]
  fn all_digit_age_beyond_u32_is_out_of_range() {
    let age = "99999999999999999999";
    let raw = RawSubmission { age: age.into(), ..full_submission() };
    let reasons = validate(&raw, br()).unwrap_err();
    assert_eq!(reasons, vec![RejectionReason::AgeOutOfRange(age.into())]);
  }

  #[test]
  fn rejects_a_phone_that_fails_the_strict_check() {
    let raw = RawSubmission { phone: "123".into(), ..full_submission() };
    let reasons = validate(&raw, br()).unwrap_err();
    assert!(
      matches!(&reasons[..], [RejectionReason::PhoneInvalid(e)] if e.raw == "123")
    );
  }

  #[test]
  fn reports_every_violation_at_once() {
    let reasons = validate(&RawSubmission::default(), br()).unwrap_err();
    assert_eq!(reasons, vec![
      RejectionReason::NameMissing,
      RejectionReason::AgeMissing,
      RejectionReason::PhoneMissing,
      RejectionReason::CityMissing,
      RejectionReason::SexUnknown(String::new()),
      RejectionReason::ParticipationUnknown(String::new()),
    ]);
  }

  #[test]
  fn enum_fields_are_exact_match() {
    let raw = RawSubmission {
      sex: "feminino".into(),
      participation: "talvez".into(),
      ..full_submission()
    };
    let reasons = validate(&raw, br()).unwrap_err();
    assert_eq!(reasons, vec![
      RejectionReason::SexUnknown("feminino".into()),
      RejectionReason::ParticipationUnknown("talvez".into()),
    ]);
  }

  #[test]
  fn whitespace_only_fields_count_as_missing() {
    let raw = RawSubmission {
      name: "   ".into(),
      city: "\t".into(),
      ..full_submission()
    };
    let reasons = validate(&raw, br()).unwrap_err();
    assert_eq!(reasons, vec![
      RejectionReason::NameMissing,
      RejectionReason::CityMissing,
    ]);
  }

  #[test]
  fn title_case_handles_accents_and_runs() {
    assert_eq!(title_case("  joÃO   da  SILVA "), "João Da Silva");
    assert_eq!(title_case("SÃO PAULO"), "São Paulo");
  }
}
