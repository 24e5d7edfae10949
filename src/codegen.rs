use crate::{Placeholders, Result};
use std::io::Write;
use std::path::Path;

pub trait CodeGenerator {
	fn name(&self) -> &str;
	/// Output directory, relative to the generator's own directory.
	fn output_dir(&self) -> &str;
	fn output_file(&self) -> &str;

	fn output_segments(&self) -> [&Path; 2] {
		[Path::new(self.output_dir()), Path::new(self.output_file())]
	}

	fn placeholders(&self) -> Placeholders {
		Placeholders::new()
	}

	fn render(&self, w: &mut impl Write) -> Result<()>;

	fn render_to_string(&self) -> Result<String> {
		let mut buf = Vec::new();
		self.render(&mut buf)?;
		Ok(String::from_utf8(buf)?)
	}
}
