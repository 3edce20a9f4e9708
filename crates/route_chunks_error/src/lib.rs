mod events;

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

pub use crate::events::unsplittable_route_exports::UnsplittableRouteExports;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Finds the first error of type `E`, if any.
  pub fn downcast_ref<E>(&self) -> Option<&E>
  where
    E: Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.0.iter().find_map(anyhow::Error::downcast_ref::<E>)
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<UnsplittableRouteExports> for BuildError {
  fn from(event: UnsplittableRouteExports) -> Self {
    Self(vec![anyhow::Error::new(event)])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn display_joins_errors_by_line() {
  let error = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(error.to_string(), "first\nsecond");
}
