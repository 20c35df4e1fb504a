use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{OptError, Result};
use crate::opt::Opt;

/// Wire state of a single key in a JSON object.
///
/// [`Opt`] folds `Absent` and `Null` together; this keeps them apart for
/// callers inspecting raw documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
	/// Key not in the object.
	Absent,
	/// Key mapped to `null`.
	Null,
	/// Key mapped to any other value.
	Present,
}

impl FieldState {
	/// Classify an object lookup result.
	pub fn of(value: Option<&Value>) -> Self {
		match value {
			None => Self::Absent,
			Some(Value::Null) => Self::Null,
			Some(_) => Self::Present,
		}
	}

	/// Stable lowercase label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Null => "null",
			Self::Present => "present",
		}
	}
}

/// Classify `key` in the JSON object encoded by `document`.
pub fn probe_field(document: &[u8], key: &str) -> Result<FieldState> {
	let object = parse_object(document)?;
	Ok(FieldState::of(object.get(key)))
}

/// Classify several keys of one document, preserving the order of `keys`.
pub fn probe_fields<'a, I>(document: &[u8], keys: I) -> Result<Vec<(&'a str, FieldState)>>
where
	I: IntoIterator<Item = &'a str>,
{
	let object = parse_object(document)?;
	Ok(keys.into_iter().map(|key| (key, FieldState::of(object.get(key)))).collect())
}

/// Decode `key` of the JSON object encoded by `document` into an [`Opt`].
///
/// A missing key never reaches the container decoder and yields an absent
/// container, exactly as a derived struct would.
pub fn decode_field<T>(document: &[u8], key: &str) -> Result<Opt<T>>
where
	T: DeserializeOwned + Default,
{
	let mut object = parse_object(document)?;
	let mut out = Opt::none();
	match object.remove(key) {
		Some(value) => out.decode_value(value)?,
		None => tracing::trace!(key, "optional field absent"),
	}
	Ok(out)
}

fn parse_object(document: &[u8]) -> Result<Map<String, Value>> {
	match serde_json::from_slice(document).map_err(|source| OptError::Decode { source })? {
		Value::Object(object) => Ok(object),
		other => Err(OptError::NotAnObject { kind: json_kind(&other) }),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
