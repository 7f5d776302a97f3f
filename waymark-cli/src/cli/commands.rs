//! Command implementations and argument parsing for the waymark CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use waymark_core::{
    DuplicatePolicy, GraphError, GraphKind, LabelOrdering, Network, NetworkOptions, Route, Section,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "waymark", about = "Query a weighted transport network.")]
pub struct Cli {
    /// Network description shared by every command.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options describing the network to load.
#[derive(Debug, Args, Clone, Default)]
pub struct NetworkArgs {
    /// Section between two stations; repeat once per section.
    #[arg(
        long = "edge",
        value_name = "FROM,TO,WEIGHT",
        value_parser = parse_edge,
        global = true,
    )]
    pub edges: Vec<EdgeArg>,

    /// Treat every section as one-way, from the first station to the second.
    #[arg(long, global = true)]
    pub directed: bool,

    /// Ignore weights and count stops instead.
    #[arg(long, global = true)]
    pub unweighted: bool,

    /// Keep repeated sections between the same stations.
    #[arg(long = "keep-duplicates", global = true)]
    pub keep_duplicates: bool,

    /// Number stations alphabetically rather than in order of appearance.
    #[arg(long = "sorted-labels", global = true)]
    pub sorted_labels: bool,
}

impl NetworkArgs {
    fn options(&self) -> NetworkOptions {
        let kind = match (self.directed, self.unweighted) {
            (false, false) => GraphKind::undirected_weighted(),
            (false, true) => GraphKind::undirected_unweighted(),
            (true, false) => GraphKind::directed_weighted(),
            (true, true) => GraphKind::directed_unweighted(),
        };
        NetworkOptions {
            kind,
            ordering: if self.sorted_labels {
                LabelOrdering::Sorted
            } else {
                LabelOrdering::FirstSeen
            },
            duplicates: if self.keep_duplicates {
                DuplicatePolicy::Keep
            } else {
                DuplicatePolicy::Skip
            },
        }
    }
}

/// One `--edge` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeArg {
    /// Station the section starts at.
    pub from: String,
    /// Station the section ends at.
    pub to: String,
    /// Travel weight; `1` when omitted.
    pub weight: f64,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the fastest route between two stations.
    Route {
        /// Station to start from.
        #[arg(long)]
        from: String,
        /// Station to finish at.
        #[arg(long)]
        to: String,
    },
    /// Print the minimum spanning network and the sections it closes.
    Mst,
    /// Summarise the fastest journeys between every pair of stations.
    Journeys,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Route { .. } => "route",
            Self::Mst => "mst",
            Self::Journeys => "journeys",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An `--edge` value could not be parsed.
    #[error("invalid edge `{raw}`: {reason}")]
    InvalidEdge {
        /// Value supplied on the command line.
        raw: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// Building or querying the network failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Sections kept and closed by the minimum spanning network.
#[derive(Debug, Clone, PartialEq)]
pub struct MstReport {
    /// Sections of the spanning network in acceptance order.
    pub kept: Vec<Section<String>>,
    /// Sections that can close, in the order they were supplied.
    pub closed: Vec<Section<String>>,
    /// Total weight of the kept sections.
    pub total: f64,
}

/// Summary of all station-to-station journeys.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyReport {
    /// Number of reachable station pairs.
    pub count: usize,
    /// Mean journey weight, absent when no pair is reachable.
    pub mean: Option<f64>,
    /// The longest of the fastest journeys.
    pub longest: Option<Route<String>>,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Output of `route`.
    Route(Route<String>),
    /// Output of `mst`.
    Mst(MstReport),
    /// Output of `journeys`.
    Journeys(JourneyReport),
}

/// Parses an `--edge` value of the form `FROM,TO[,WEIGHT]`.
///
/// # Errors
/// Returns [`CliError::InvalidEdge`] when a station name is empty, the
/// value has the wrong number of fields, or the weight is not a number.
///
/// # Examples
/// ```
/// use waymark_cli::cli::parse_edge;
///
/// let edge = parse_edge("Bank, Angel, 4.5")?;
/// assert_eq!(edge.from, "Bank");
/// assert_eq!(edge.to, "Angel");
/// assert_eq!(edge.weight, 4.5);
/// # Ok::<(), waymark_cli::cli::CliError>(())
/// ```
pub fn parse_edge(raw: &str) -> Result<EdgeArg, CliError> {
    let invalid = |reason| CliError::InvalidEdge {
        raw: raw.to_owned(),
        reason,
    };
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (from, to, weight) = match fields.as_slice() {
        [from, to] => (*from, *to, 1.0),
        [from, to, weight] => {
            let weight = weight
                .parse::<f64>()
                .map_err(|_| invalid("weight must be a number"))?;
            (*from, *to, weight)
        }
        _ => return Err(invalid("expected FROM,TO,WEIGHT")),
    };
    if from.is_empty() || to.is_empty() {
        return Err(invalid("station names must not be empty"));
    }
    Ok(EdgeArg {
        from: from.to_owned(),
        to: to.to_owned(),
        weight,
    })
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError::Core`] when the network rejects an edge or a query
/// fails, for example for an unknown station or an unreachable destination.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use waymark_cli::cli::{Cli, Report, run_cli};
///
/// let cli = Cli::try_parse_from([
///     "waymark", "--edge", "A,B,5", "--edge", "B,C,2", "route", "--from", "A", "--to", "C",
/// ])?;
/// let Report::Route(route) = run_cli(cli)? else {
///     panic!("route command yields a route");
/// };
/// assert_eq!(route.stops(), ["A", "B", "C"]);
/// assert_eq!(route.total(), 7.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = cli.command.name(), edges = cli.network.edges.len()),
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let Cli {
        network: args,
        command,
    } = cli;
    let network = build_network(&args)?;
    let report = match command {
        Command::Route { from, to } => Report::Route(network.route(&from, &to)?),
        Command::Mst => Report::Mst(spanning_report(&network)?),
        Command::Journeys => Report::Journeys(journey_report(&network)?),
    };
    info!("command completed");
    Ok(report)
}

#[instrument(
    name = "cli.build_network",
    err,
    skip(args),
    fields(stations = field::Empty, sections = field::Empty),
)]
pub(super) fn build_network(args: &NetworkArgs) -> Result<Network<String>, CliError> {
    let connections = args
        .edges
        .iter()
        .map(|edge| (edge.from.clone(), edge.to.clone(), edge.weight));
    let network = Network::from_connections(connections, args.options())?;

    let span = Span::current();
    span.record("stations", network.labels().len());
    span.record("sections", network.graph().edge_count());
    Ok(network)
}

fn spanning_report(network: &Network<String>) -> Result<MstReport, CliError> {
    let spanning = network.minimum_spanning_network()?;
    Ok(MstReport {
        kept: spanning.sections()?,
        closed: network.closed_sections()?,
        total: spanning.graph().total_weight(),
    })
}

fn journey_report(network: &Network<String>) -> Result<JourneyReport, CliError> {
    let weights = network.journey_weights()?;
    let mean = (!weights.is_empty())
        .then(|| weights.iter().sum::<f64>() / weights.len() as f64);
    Ok(JourneyReport {
        count: weights.len(),
        mean,
        longest: network.longest_route()?,
    })
}

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use waymark_cli::cli::{Cli, render_report, run_cli};
///
/// let cli = Cli::try_parse_from(["waymark", "--edge", "A,B,5", "route", "--from", "A", "--to", "B"])?;
/// let mut buffer = Vec::new();
/// render_report(&run_cli(cli)?, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "route: A -> B\ntotal: 5\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Route(route) => {
            writeln!(writer, "route: {}", route.stops().join(" -> "))?;
            writeln!(writer, "total: {}", route.total())?;
        }
        Report::Mst(mst) => {
            writeln!(writer, "kept:")?;
            write_sections(&mut writer, &mst.kept)?;
            writeln!(writer, "total: {}", mst.total)?;
            writeln!(writer, "closed:")?;
            write_sections(&mut writer, &mst.closed)?;
        }
        Report::Journeys(journeys) => {
            writeln!(writer, "journeys: {}", journeys.count)?;
            if let Some(mean) = journeys.mean {
                writeln!(writer, "mean: {mean:.2}")?;
            }
            if let Some(longest) = &journeys.longest {
                writeln!(
                    writer,
                    "longest: {} ({})",
                    longest.stops().join(" -> "),
                    longest.total()
                )?;
            }
        }
    }
    Ok(())
}

fn write_sections(writer: &mut impl Write, sections: &[Section<String>]) -> io::Result<()> {
    for section in sections {
        writeln!(writer, "{} - {}\t{}", section.from, section.to, section.weight)?;
    }
    Ok(())
}
