//! The jurisdiction selector chosen for a run.

use std::{fmt, str::FromStr};

use crate::Error;

/// Selector value that disables filtering.
pub const ALL: &str = "ALL";

/// Which submissions a run keeps: every record, or those at facilities
/// registered to one jurisdiction (state) code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
  All,
  Jurisdiction(String),
}

impl FromStr for Selector {
  type Err = Error;

  /// Trims and upper-cases the input; `all` in any case is the sentinel.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let code = s.trim().to_uppercase();
    match code.as_str() {
      "" => Err(Error::EmptySelector),
      ALL => Ok(Self::All),
      _ => Ok(Self::Jurisdiction(code)),
    }
  }
}

/// The normalised code, which also prefixes every output file name.
impl fmt::Display for Selector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str(ALL),
      Self::Jurisdiction(code) => f.write_str(code),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trims_and_upper_cases() {
    let s: Selector = "  ny\n".parse().unwrap();
    assert_eq!(s, Selector::Jurisdiction("NY".into()));
    assert_eq!(s.to_string(), "NY");
  }

  #[test]
  fn all_is_case_insensitive() {
    assert_eq!("all".parse::<Selector>().unwrap(), Selector::All);
    assert_eq!(Selector::All.to_string(), "ALL");
  }

  #[test]
  fn blank_is_rejected() {
    assert!(matches!("   ".parse::<Selector>(), Err(Error::EmptySelector)));
  }
}
