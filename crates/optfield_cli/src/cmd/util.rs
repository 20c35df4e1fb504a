use std::path::Path;

use optfield::{OptError, Result};
use serde::Serialize;

/// Read a whole JSON document from disk.
pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>> {
	tracing::debug!(path = %path.display(), "reading document");
	Ok(std::fs::read(path)?)
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(|source| OptError::Encode { source })?;
	println!("{text}");
	Ok(())
}
