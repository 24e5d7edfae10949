//! Writes `../contracts/NetworkParams.sol`, relative to this script's directory.

use network_params_gen::codegen_sol::network_params::NetworkParamsSol;
use network_params_gen::{check, emit, generate, output_path, placeholders_yaml, write_file, CodeGenerator, Result};
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "generate-network-params", about = "Generates contracts/NetworkParams.sol")]
struct Opt {
	/// Write here instead of ../contracts/NetworkParams.sol
	#[structopt(long, parse(from_os_str))]
	out: Option<PathBuf>,

	/// Print the rendered contract instead of writing it
	#[structopt(long, conflicts_with_all = &["out", "check", "placeholders"])]
	stdout: bool,

	/// Fail if the file on disk differs from a fresh render
	#[structopt(long, conflicts_with = "placeholders")]
	check: bool,

	/// Print the template placeholders as YAML
	#[structopt(long)]
	placeholders: bool,

	/// Verbosity level (-v, -vv, -vvv)
	#[structopt(short, long, parse(from_occurrences))]
	verbose: u8,
}

fn script_dir() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts")
}

fn main() -> Result<()> {
	let opt = Opt::from_args();

	let level = match opt.verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let codegen = NetworkParamsSol;

	if opt.placeholders {
		print!("{}", placeholders_yaml(&codegen.placeholders())?);
		return Ok(());
	}

	if opt.stdout {
		return emit(&codegen, &mut std::io::stdout().lock(), "<stdout>");
	}

	if opt.check {
		let path = opt.out.unwrap_or_else(|| output_path(&codegen, &script_dir()));
		return check(&codegen, &path);
	}

	match opt.out {
		Some(path) => write_file(&codegen.render_to_string()?, &path)?,
		None => {
			generate(&codegen, &script_dir())?;
		}
	}

	Ok(())
}
