//! Persisting rendered output.
//!
//! The target is replaced through a temporary sibling file (`.{file}.tmp`) that is
//! synced and then renamed over it, so a failed write never leaves a truncated target
//! behind. Missing parent directories are an error, not created.

use crate::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Joins path segments in order. `..` segments are kept as-is.
pub fn resolve<P: AsRef<Path>>(segments: &[P]) -> PathBuf {
	let mut path = PathBuf::new();
	for segment in segments {
		path.push(segment);
	}
	path
}

/// Returns a writer that puts `contents` at the path built from its segments.
pub fn write_content<P: AsRef<Path>>(contents: impl Into<String>) -> impl FnOnce(&[P]) -> Result<PathBuf> {
	let contents = contents.into();
	move |segments| {
		let path = resolve(segments);
		write_file(&contents, &path)?;
		Ok(path)
	}
}

/// Replaces the file at `path` with `contents`, overwriting any existing file.
pub fn write_file(contents: &str, path: &Path) -> Result<()> {
	tracing::debug!(path = %path.display(), "writing");
	let tmp_path = tmp_path(path)?;

	if let Err(source) = write_and_sync(&tmp_path, contents.as_bytes()) {
		let _ = fs::remove_file(&tmp_path);
		return Err(Error::Io {
			path: path.to_owned(),
			source,
		});
	}

	if let Err(source) = fs::rename(&tmp_path, path) {
		let _ = fs::remove_file(&tmp_path);
		return Err(Error::Io {
			path: path.to_owned(),
			source,
		});
	}

	tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
	Ok(())
}

fn tmp_path(path: &Path) -> Result<PathBuf> {
	let file_name = path.file_name().ok_or_else(|| Error::Io {
		path: path.to_owned(),
		source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
	})?;

	let mut tmp_name = std::ffi::OsString::from(".");
	tmp_name.push(file_name);
	tmp_name.push(".tmp");
	Ok(path.with_file_name(tmp_name))
}

fn write_and_sync(path: &Path, contents: &[u8]) -> std::io::Result<()> {
	let mut file = File::create(path)?;
	file.write_all(contents)?;
	file.sync_all()
}
