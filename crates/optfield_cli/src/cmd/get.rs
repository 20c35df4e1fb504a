use std::path::PathBuf;

use optfield::{OptError, Result, decode_field};
use serde_json::Value;

use crate::cmd::util::{emit_json, read_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub field: String,
	/// JSON value returned when the key is absent or null.
	#[arg(long)]
	pub default: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Decode one key into an optional container and print what it yields.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		field,
		default,
		json,
	} = args;

	let fallback = default.as_deref().map(parse_default).transpose()?;
	let document = read_document(&path)?;
	let opt = decode_field::<Value>(&document, &field)?;

	let exists = opt.exists();
	let value = match fallback {
		Some(fallback) => opt.get_with_default(fallback),
		None => opt.get(),
	};

	if json {
		let payload = GetJson {
			path: path.display().to_string(),
			field: &field,
			exists,
			value: &value,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("field: {field}");
	println!("exists: {exists}");
	println!("value: {value}");

	Ok(())
}

fn parse_default(text: &str) -> Result<Value> {
	serde_json::from_str(text).map_err(|source| OptError::InvalidDefault { source })
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	path: String,
	field: &'a str,
	exists: bool,
	value: &'a Value,
}
