use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "remol - Load PDB/mmCIF structure files (plain or gzipped) into a running PyMOL session over RPC.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Files or directories to load
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Hostname of the PyMOL RPC server
    #[arg(long, default_value = "127.0.0.1", value_name = "HOST")]
    pub host: String,

    /// PyMOL RPC port
    #[arg(long, default_value_t = 9123, value_name = "PORT")]
    pub port: u16,

    /// Recurse into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Do not reinitialize the PyMOL session before loading
    #[arg(long)]
    pub no_reinit: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
