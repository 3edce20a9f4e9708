use std::path::Path;

use sugar_path::SugarPath;

pub trait PathExt {
  /// Resolves `self` against `base` and returns the normalized, forward-slashed
  /// path relative to `base`.
  fn relative_slash_path(&self, base: &Path) -> String;
}

impl PathExt for Path {
  fn relative_slash_path(&self, base: &Path) -> String {
    let full_path = self.absolutize_with(base.to_path_buf());
    full_path.relative(base).normalize().to_slash_lossy().into_owned()
  }
}

#[test]
fn test_relative_slash_path() {
  let base = Path::new("/project/app");
  let home = Path::new("/project/app/routes/home.tsx");
  assert_eq!(home.relative_slash_path(base), "routes/home.tsx");
  assert_eq!(Path::new("routes/../root.tsx").relative_slash_path(base), "root.tsx");
  assert_eq!(Path::new("/project/app/root.tsx").relative_slash_path(base), "root.tsx");
}
