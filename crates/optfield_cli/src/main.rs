#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "optfield", about = "Inspect JSON field presence")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Report whether keys are absent, null, or present.
	Probe(cmd::probe::Args),
	/// Read one key through an optional container.
	Get(cmd::get::Args),
}

fn main() {
	cmd::logging::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> optfield::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Probe(args) => cmd::probe::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}
