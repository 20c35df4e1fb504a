use std::path::PathBuf;

use optfield::{FieldState, Result, probe_fields};

use crate::cmd::util::{emit_json, read_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "field", required = true)]
	pub fields: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print the presence state of each requested key.
pub fn run(args: Args) -> Result<()> {
	let Args { path, fields, json } = args;

	let document = read_document(&path)?;
	let states = probe_fields(&document, fields.iter().map(String::as_str))?;

	if json {
		let payload = ProbeJson {
			path: path.display().to_string(),
			fields: states.iter().map(|(field, state)| FieldJson { field, state: *state }).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	for (field, state) in &states {
		println!("{field}: {}", state.label());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ProbeJson<'a> {
	path: String,
	fields: Vec<FieldJson<'a>>,
}

#[derive(serde::Serialize)]
struct FieldJson<'a> {
	field: &'a str,
	state: FieldState,
}
