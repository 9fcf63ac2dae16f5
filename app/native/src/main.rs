#![allow(clippy::multiple_crate_versions)]

//! Token Animation command-line interface.
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default: `warn`), e.g.
//! `RUST_LOG=token_animation_lib=debug token-animation decide ...` traces
//! every gate the policy evaluates.

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = token_animation_lib::cli::run() {
        eprintln!("token-animation: {err}");
        std::process::exit(1);
    }
}
