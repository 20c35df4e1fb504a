use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{OptError, Result};

mod presence;
mod wire;

pub use presence::Presence;

const NULL_LITERAL: &[u8] = b"null";

/// A value of `T` plus a flag recording whether it was actually provided.
///
/// Absent and explicit `null` both decode to the absent state; any other
/// valid JSON for `T`, including empty strings, objects, and arrays, decodes
/// to the present state. While absent, the stored value is `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opt<T> {
	value: T,
	present: bool,
}

impl<T: Default> Default for Opt<T> {
	fn default() -> Self {
		Self::none()
	}
}

impl<T> Opt<T> {
	/// Present container holding `value`.
	pub const fn some(value: T) -> Self {
		Self { value, present: true }
	}

	/// Absent container.
	pub fn none() -> Self
	where
		T: Default,
	{
		Self {
			value: T::default(),
			present: false,
		}
	}

	/// Whether a non-null value was provided.
	pub fn exists(&self) -> bool {
		self.present
	}

	/// `true` while nothing was provided. Usable as a serde
	/// `skip_serializing_if` predicate on enclosing records.
	pub fn is_absent(&self) -> bool {
		!self.present
	}

	/// Borrow the value when present.
	pub fn value(&self) -> Option<&T> {
		self.present.then_some(&self.value)
	}

	/// Value when present, otherwise `T::default()`.
	pub fn get(&self) -> T
	where
		T: Clone + Default,
	{
		self.value().cloned().unwrap_or_default()
	}

	/// Value when present, otherwise `fallback`.
	pub fn get_with_default(&self, fallback: T) -> T
	where
		T: Clone,
	{
		self.value().cloned().unwrap_or(fallback)
	}

	/// Convert into a std option, dropping the zero value of an absent container.
	pub fn into_option(self) -> Option<T> {
		self.present.then_some(self.value)
	}

	/// Store `value` and mark the container present.
	pub fn set(&mut self, value: T) {
		self.value = value;
		self.present = true;
	}

	/// Reset to the absent state.
	pub fn clear(&mut self)
	where
		T: Default,
	{
		*self = Self::none();
	}

	/// Move the value out, leaving the container absent.
	pub fn take(&mut self) -> Option<T>
	where
		T: Default,
	{
		std::mem::take(self).into_option()
	}

	/// JSON encoding of the value, or `null` when absent.
	pub fn encode(&self) -> Result<Vec<u8>>
	where
		T: Serialize,
	{
		match self.value() {
			Some(value) => serde_json::to_vec(value).map_err(|source| OptError::Encode { source }),
			None => Ok(NULL_LITERAL.to_vec()),
		}
	}

	/// Decode one JSON value into the container.
	///
	/// The container is reset first. The `null` literal leaves it absent.
	/// Anything else is decoded into a temporary and only published on
	/// success, so a failed decode never leaves a present flag behind.
	pub fn decode(&mut self, bytes: &[u8]) -> Result<()>
	where
		T: DeserializeOwned + Default,
	{
		self.clear();
		if is_null_literal(bytes) {
			tracing::trace!("optional field decoded as null");
			return Ok(());
		}
		self.publish(serde_json::from_slice(bytes))
	}

	/// Same as [`Opt::decode`] for an already parsed [`serde_json::Value`].
	pub fn decode_value(&mut self, value: serde_json::Value) -> Result<()>
	where
		T: DeserializeOwned + Default,
	{
		self.clear();
		if value.is_null() {
			tracing::trace!("optional field decoded as null");
			return Ok(());
		}
		self.publish(serde_json::from_value(value))
	}

	/// Fresh container decoded from `bytes`.
	pub fn from_json(bytes: &[u8]) -> Result<Self>
	where
		T: DeserializeOwned + Default,
	{
		let mut out = Self::none();
		out.decode(bytes)?;
		Ok(out)
	}

	fn publish(&mut self, decoded: serde_json::Result<T>) -> Result<()> {
		match decoded {
			Ok(value) => {
				tracing::trace!("optional field decoded as present");
				self.set(value);
				Ok(())
			}
			Err(source) => {
				tracing::debug!(error = %source, "optional field decode failed");
				Err(OptError::Decode { source })
			}
		}
	}
}

impl<T> From<T> for Opt<T> {
	fn from(value: T) -> Self {
		Self::some(value)
	}
}

impl<T: Default> From<Option<T>> for Opt<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::some(value),
			None => Self::none(),
		}
	}
}

impl<T> From<Opt<T>> for Option<T> {
	fn from(value: Opt<T>) -> Self {
		value.into_option()
	}
}

// Only the four JSON whitespace bytes are skipped.
fn is_null_literal(bytes: &[u8]) -> bool {
	let is_json_whitespace = |byte: &u8| matches!(*byte, b' ' | b'\t' | b'\n' | b'\r');
	let start = bytes.iter().position(|byte| !is_json_whitespace(byte)).unwrap_or(bytes.len());
	let end = bytes.iter().rposition(|byte| !is_json_whitespace(byte)).map_or(start, |last| last + 1);
	&bytes[start..end] == NULL_LITERAL
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value() {
			Some(value) => fmt::Display::fmt(value, f),
			None => f.write_str("null"),
		}
	}
}
