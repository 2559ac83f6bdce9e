//! White Background Removal CLI Tool
//!
//! Command-line interface for making white-ish image backgrounds transparent
//! using the remove-bg library.

#[cfg(feature = "cli")]
use remove_bg::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
