//! Optional JSON field container that tells "not sent", "sent as null", and
//! "sent with a value" apart.
//!
//! ```
//! use optfield::Opt;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Patch {
//! 	name: Opt<String>,
//! }
//!
//! let patch: Patch = serde_json::from_str(r#"{"name": ""}"#).unwrap();
//! assert!(patch.name.exists());
//! assert_eq!(patch.name.get(), "");
//!
//! let patch: Patch = serde_json::from_str("{}").unwrap();
//! assert!(!patch.name.exists());
//! assert_eq!(patch.name.get_with_default("anonymous".to_owned()), "anonymous");
//! ```

/// Crate error type and result alias.
pub mod error;
/// The optional container and its accessor trait.
pub mod opt;
/// Three-way presence classification of keys in raw JSON objects.
pub mod probe;

pub use error::{OptError, Result};
pub use opt::{Opt, Presence};
pub use probe::{FieldState, decode_field, probe_field, probe_fields};
