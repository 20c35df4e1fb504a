//! Fixture lookup shared by the workspace test suites.

use std::path::{Path, PathBuf};

/// `<workspace>/fixtures`, resolved from this crate's manifest directory.
pub fn fixtures_dir() -> PathBuf {
	let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
	workspace.canonicalize().unwrap_or(workspace).join("fixtures")
}

/// Path of a named fixture document.
pub fn fixture_path(name: &str) -> PathBuf {
	fixtures_dir().join(name)
}

/// Fixture path rendered for use as a command-line argument.
pub fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}
