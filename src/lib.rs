pub mod codegen;
pub mod params;
pub mod write;
pub use codegen::*;
pub use params::*;
pub use write::*;

pub mod codegen_sol;

use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("io error at {}: {}", .path.display(), .source)]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to render template: {0}")]
	Render(#[from] std::io::Error),
	#[error("rendered output is not utf-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
	#[error("yaml error: {0}")]
	Yaml(#[from] serde_yaml::Error),
	#[error("{} is out of date, re-run the generator", .path.display())]
	Stale { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Where `generator` writes, given the directory it runs from.
pub fn output_path(generator: &impl CodeGenerator, base_dir: &Path) -> PathBuf {
	let [dir, file] = generator.output_segments();
	resolve(&[base_dir, dir, file])
}

/// Renders `generator` and writes it to its output path, resolved against `base_dir`.
pub fn generate(generator: &impl CodeGenerator, base_dir: &Path) -> Result<PathBuf> {
	let contents = generator.render_to_string()?;
	tracing::debug!(generator = generator.name(), bytes = contents.len(), "rendered");

	let [dir, file] = generator.output_segments();
	write_content(contents)(&[base_dir, dir, file][..])
}

/// Renders `generator` into `w`, e.g. stdout. Sink failures are reported against `sink`.
pub fn emit(generator: &impl CodeGenerator, w: &mut impl Write, sink: &str) -> Result<()> {
	let contents = generator.render_to_string()?;
	w.write_all(contents.as_bytes())
		.and_then(|()| w.flush())
		.map_err(|source| Error::Io {
			path: PathBuf::from(sink),
			source,
		})
}

/// Fails with [`Error::Stale`] unless the file at `path` matches a fresh render.
pub fn check(generator: &impl CodeGenerator, path: &Path) -> Result<()> {
	let expected = generator.render_to_string()?;
	match std::fs::read(path) {
		Ok(actual) if actual == expected.as_bytes() => {
			tracing::info!(path = %path.display(), "up to date");
			Ok(())
		}
		Ok(_) => Err(Error::Stale { path: path.to_owned() }),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::Stale { path: path.to_owned() }),
		Err(source) => Err(Error::Io {
			path: path.to_owned(),
			source,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::codegen_sol::network_params::NetworkParamsSol;

	struct BrokenPipe;

	impl Write for BrokenPipe {
		fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
			Err(std::io::ErrorKind::BrokenPipe.into())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn emit_reports_sink_failures_against_the_sink() {
		let err = emit(&NetworkParamsSol, &mut BrokenPipe, "<stdout>").unwrap_err();
		match err {
			Error::Io { path, source } => {
				assert_eq!(path, Path::new("<stdout>"));
				assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
			}
			other => panic!("unexpected error: {:?}", other),
		}
	}

	#[test]
	fn emit_writes_the_rendered_contract() {
		let mut buf = Vec::new();
		emit(&NetworkParamsSol, &mut buf, "<buffer>").unwrap();
		assert_eq!(buf, NetworkParamsSol.render_to_string().unwrap().into_bytes());
	}
}
