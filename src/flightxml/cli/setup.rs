use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "flightxml",
    bin_name = "flightxml",
    version,
    disable_help_flag = true
)]
#[command(about = "Query the FlightAware FlightXML2 API from the command line", long_about = None)]
pub struct Cli {
    /// Your FlightAware login
    #[arg(short, long, env = "FLIGHTXML_LOGIN", required_unless_present = "help")]
    pub login: Option<String>,

    /// Your FlightAware API key
    #[arg(
        short,
        long,
        env = "FLIGHTXML_KEY",
        hide_env_values = true,
        required_unless_present = "help"
    )]
    pub key: Option<String>,

    /// The action you would like to call (e.g. aircraft-type)
    #[arg(short, long, required_unless_present = "help")]
    pub action: Option<String>,

    /// The JSON encoded params of your request
    #[arg(short, long)]
    pub params: Option<String>,

    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print usage and the available actions
    #[arg(long)]
    pub help: bool,
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
