//! Kodegen Bundler Universal - merges per-architecture build trees.
//!
//! This binary mirrors a primary build tree into a destination, combining
//! static libraries and Mach-O binaries with their counterparts from a
//! second architecture's tree into universal binaries.

use kodegen_bundler_universal::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
