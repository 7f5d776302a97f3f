//! Command-line interface for querying a transport network.
//!
//! The network is supplied inline as repeated `--edge FROM,TO,WEIGHT`
//! arguments. Subcommands answer one question each: the fastest route
//! between two stations, which sections can close, and how long journeys
//! across the network take.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeArg, JourneyReport, MstReport, NetworkArgs, Report, parse_edge,
    render_report, run_cli,
};
