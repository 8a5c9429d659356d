//! The dashboard access gate, modelled as a capability.
//!
//! The read side never consults ambient global state. A caller obtains a
//! [`Session`] by presenting a secret to a [`CredentialCheck`], and passes
//! that session into every gated operation explicitly.

/// A pluggable shared-secret check.
///
/// Implementations decide how the secret is stored and compared; the server
/// verifies against an argon2 hash. Callers only ever get a yes or no.
pub trait CredentialCheck: Send + Sync {
  fn check(&self, secret: &str) -> bool;
}

/// Explicit authentication context for the read side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
  authenticated: bool,
}

impl Session {
  /// The session of a caller that has not presented a valid secret.
  pub fn anonymous() -> Self { Self { authenticated: false } }

  /// Check `secret` against `gate` and record the outcome.
  pub fn open(gate: &dyn CredentialCheck, secret: &str) -> Self {
    Self { authenticated: gate.check(secret) }
  }

  pub fn is_authenticated(self) -> bool { self.authenticated }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct FixedSecret(&'static str);

  impl CredentialCheck for FixedSecret {
    fn check(&self, secret: &str) -> bool { secret == self.0 }
  }

  #[test]
  fn open_records_the_check_outcome() {
    let gate = FixedSecret("corrida");
    assert!(Session::open(&gate, "corrida").is_authenticated());
    assert!(!Session::open(&gate, "wrong").is_authenticated());
    assert!(!Session::anonymous().is_authenticated());
  }
}
