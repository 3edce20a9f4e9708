use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de::Error as _};

/// `splitRouteModules: boolean | "enforce"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SplitRouteModules {
  #[default]
  Off,
  On,
  /// Exports that cannot be split fail the build instead of staying in the main chunk.
  Enforce,
}

impl SplitRouteModules {
  #[inline]
  pub fn is_enabled(self) -> bool {
    !matches!(self, Self::Off)
  }

  #[inline]
  pub fn is_enforced(self) -> bool {
    matches!(self, Self::Enforce)
  }
}

impl From<bool> for SplitRouteModules {
  fn from(value: bool) -> Self {
    if value { Self::On } else { Self::Off }
  }
}

impl FromStr for SplitRouteModules {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "off" | "false" => Ok(Self::Off),
      "on" | "true" => Ok(Self::On),
      "enforce" => Ok(Self::Enforce),
      _ => Err(format!("Invalid value for splitRouteModules: {value:?}")),
    }
  }
}

impl<'de> Deserialize<'de> for SplitRouteModules {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Bool(bool),
      Str(String),
    }

    match Raw::deserialize(deserializer)? {
      Raw::Bool(value) => Ok(value.into()),
      Raw::Str(value) if value == "enforce" => Ok(Self::Enforce),
      Raw::Str(value) => Err(D::Error::custom(format!(
        "expected `true`, `false` or \"enforce\" for splitRouteModules, got {value:?}"
      ))),
    }
  }
}

impl Display for SplitRouteModules {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Off => write!(f, "off"),
      Self::On => write!(f, "on"),
      Self::Enforce => write!(f, "enforce"),
    }
  }
}

#[test]
fn test_deserialize() {
  let parse = |json: &str| serde_json::from_str::<SplitRouteModules>(json);
  assert_eq!(parse("true").unwrap(), SplitRouteModules::On);
  assert_eq!(parse("false").unwrap(), SplitRouteModules::Off);
  assert_eq!(parse(r#""enforce""#).unwrap(), SplitRouteModules::Enforce);
  assert!(parse(r#""always""#).is_err());
}

#[test]
fn test_from_str() {
  assert_eq!("enforce".parse::<SplitRouteModules>(), Ok(SplitRouteModules::Enforce));
  assert_eq!("true".parse::<SplitRouteModules>(), Ok(SplitRouteModules::On));
  assert!("maybe".parse::<SplitRouteModules>().is_err());
}
