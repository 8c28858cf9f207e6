/*!
# Plet: Settings
*/

use crate::PletError;
use std::{
	io::{
		Read,
		Write,
	},
	path::{
		Path,
		PathBuf,
	},
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Compression Settings.
pub(crate) struct Settings {
	/// # Input File.
	///
	/// `None` for STDIN.
	input: Option<PathBuf>,

	/// # Output File.
	///
	/// `None` for STDOUT.
	output: Option<PathBuf>,

	/// # Input Already Set?
	input_set: bool,

	/// # Output Already Set?
	output_set: bool,

	/// # Save Length?
	///
	/// If true, the original length is written ahead of the compressed data.
	save_length: bool,
}

impl Settings {
	/// # Set Input.
	///
	/// ## Errors
	///
	/// This will return an error if the input was already set.
	pub(super) fn set_input(&mut self, raw: String) -> Result<(), PletError> {
		if self.input_set { return Err(PletError::Input2); }
		self.input_set = true;
		self.input = stdio_path(raw);
		Ok(())
	}

	/// # Set Output.
	///
	/// ## Errors
	///
	/// This will return an error if the output was already set.
	pub(super) fn set_output(&mut self, raw: String) -> Result<(), PletError> {
		if self.output_set { return Err(PletError::Output2); }
		self.output_set = true;
		self.output = stdio_path(raw);
		Ok(())
	}

	/// # Save Length.
	pub(super) const fn set_save_length(&mut self) { self.save_length = true; }
}

impl Settings {
	#[must_use]
	/// # Output File.
	///
	/// Returns `None` if writing to STDOUT.
	pub(crate) fn output(&self) -> Option<&Path> { self.output.as_deref() }

	#[must_use]
	/// # Save Length?
	pub(crate) const fn save_length(&self) -> bool { self.save_length }

	/// # Read Input.
	///
	/// ## Errors
	///
	/// This will return an error if the file or STDIN can't be read.
	pub(crate) fn read(&self) -> Result<Vec<u8>, PletError> {
		if let Some(path) = self.input.as_deref() {
			std::fs::read(path).map_err(|_| PletError::Read)
		}
		else {
			let mut out = Vec::new();
			std::io::stdin().lock()
				.read_to_end(&mut out)
				.map_err(|_| PletError::Read)?;
			Ok(out)
		}
	}

	/// # Write Output.
	///
	/// Files are written atomically; STDOUT gets the raw bytes.
	///
	/// ## Errors
	///
	/// This will return an error if the file or STDOUT can't be written to.
	pub(crate) fn write(&self, data: &[u8]) -> Result<(), PletError> {
		if let Some(path) = self.output.as_deref() {
			write_atomic::write_file(path, data).map_err(|_| PletError::Write)
		}
		else {
			let mut out = std::io::stdout().lock();
			out.write_all(data)
				.and_then(|()| out.flush())
				.map_err(|_| PletError::Write)
		}
	}
}



/// # Path or STDIO.
///
/// An empty value or a lone dash means STDIN/STDOUT.
fn stdio_path(raw: String) -> Option<PathBuf> {
	let trimmed = raw.trim();
	if trimmed.is_empty() || trimmed == "-" { None }
	else { Some(PathBuf::from(raw)) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_stdio_path() {
		assert_eq!(stdio_path(String::new()), None);
		assert_eq!(stdio_path("-".to_owned()), None);
		assert_eq!(stdio_path(" - ".to_owned()), None);
		assert_eq!(stdio_path("foo.plet".to_owned()), Some(PathBuf::from("foo.plet")));
	}

	#[test]
	fn t_settings() {
		let mut settings = Settings::default();
		assert!(! settings.save_length());
		assert_eq!(settings.output(), None);

		settings.set_save_length();
		assert!(settings.save_length());

		assert_eq!(settings.set_input("in.bin".to_owned()), Ok(()));
		assert_eq!(settings.set_input("in.bin".to_owned()), Err(PletError::Input2));

		assert_eq!(settings.set_output("-".to_owned()), Ok(()));
		assert_eq!(settings.output(), None);
		assert_eq!(settings.set_output("out.bin".to_owned()), Err(PletError::Output2));
		assert_eq!(settings.output(), None);
	}

	#[test]
	fn t_read_write() {
		let dir = std::env::temp_dir();
		let src = dir.join(format!("plet-test-{}.in", std::process::id()));
		let dst = dir.join(format!("plet-test-{}.out", std::process::id()));
		std::fs::write(&src, b"Hello, Hello, Hello!").expect("Write failed.");

		let mut settings = Settings::default();
		settings.set_input(src.to_string_lossy().into_owned()).expect("Input failed.");
		settings.set_output(dst.to_string_lossy().into_owned()).expect("Output failed.");

		let raw = settings.read().expect("Read failed.");
		assert_eq!(raw, b"Hello, Hello, Hello!");

		let packed = pletter::compress(&raw, settings.save_length()).expect("Compress failed.");
		settings.write(&packed).expect("Write failed.");
		assert_eq!(std::fs::read(&dst).ok(), Some(packed));

		let _res = std::fs::remove_file(src);
		let _res = std::fs::remove_file(dst);
	}
}
