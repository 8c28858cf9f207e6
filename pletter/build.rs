/*!
# Pletter: Build Script.
*/

use std::{
	fmt::Write,
	fs::File,
	io::Write as _,
	path::{
		Path,
		PathBuf,
	},
};

/// # Number of Var-Cost Entries.
///
/// Match lengths (minus one) are encoded as sixteen-bit values.
const VAR_COST_LEN: u32 = 65_536;



/// # Build.
pub fn main() {
	println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

	build_var_cost();
}

/// # Build Var-Cost Table.
///
/// Every value in `2^k..2^(k+1)` is written as `k` continuation/value bit
/// pairs followed by a single stop bit, so costs `1 + 2k` bits. Zero can't be
/// encoded at all and is left at zero.
///
/// Sixty-five thousand entries is a lot to type, but it's nothing for a build
/// script.
fn build_var_cost() {
	let mut out = String::from(r"/// # Var-Cost Table.
///
/// The number of bits needed to encode a given `length - 1` value.
pub(crate) const VAR_COST: &[u8; 65_536] = &[");

	for v in 0..VAR_COST_LEN {
		let cost =
			if v == 0 { 0 }
			else { 1 + 2 * v.ilog2() };

		// Add some line breaks, but not too many!
		if v % 128 == 0 { out.push('\n'); }
		write!(&mut out, "{cost}, ").unwrap();
	}
	out.push_str("\n];\n");

	// Save it!
	write(&out_path("varcost.rs"), out.as_bytes());
}

/// # Out path.
///
/// This generates a (file/dir) path relative to `OUT_DIR`.
fn out_path(stub: &str) -> PathBuf {
	std::fs::canonicalize(std::env::var("OUT_DIR").expect("Missing OUT_DIR."))
		.expect("Missing OUT_DIR.")
		.join(stub)
}

/// # Write File.
fn write(path: &Path, data: &[u8]) {
	File::create(path).and_then(|mut f| f.write_all(data).and_then(|()| f.flush()))
		.expect("Unable to write file.");
}
