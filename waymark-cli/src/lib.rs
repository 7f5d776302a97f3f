//! Support library for the waymark CLI binary.
//!
//! Re-exports the CLI module so doctests and integration tests can run
//! network queries without forking a subprocess.

pub mod cli;
pub mod logging;
