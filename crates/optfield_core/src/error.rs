use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, OptError>;

/// Errors produced while encoding, decoding, and probing optional fields.
#[derive(Debug, Error)]
pub enum OptError {
	/// The wrapped type's decoder rejected the input.
	#[error("decode: {source}")]
	Decode {
		/// Underlying JSON decoder error.
		source: serde_json::Error,
	},
	/// The wrapped type's encoder failed.
	#[error("encode: {source}")]
	Encode {
		/// Underlying JSON encoder error.
		source: serde_json::Error,
	},
	/// A probed document was valid JSON but not an object.
	#[error("expected a JSON object, got {kind}")]
	NotAnObject {
		/// JSON kind of the top-level value.
		kind: &'static str,
	},
	/// A fallback value supplied by the caller was not valid JSON.
	#[error("invalid default value: {source}")]
	InvalidDefault {
		/// Underlying JSON decoder error.
		source: serde_json::Error,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}
