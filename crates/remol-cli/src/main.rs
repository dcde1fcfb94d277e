mod cli;
mod error;
mod logging;
mod paths;

use clap::Parser;
use remol::{LoadOptions, RpcSession, load_structures, reset};
use tracing::{debug, info, warn};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file) {
        eprintln!("Error: failed to set up logging: {e}");
        std::process::exit(1);
    }

    std::process::exit(run(&cli));
}

/// Drives one invocation end to end. Returns the process exit status:
/// 0 if at least one file loaded across all inputs, 1 otherwise.
fn run(cli: &Cli) -> i32 {
    debug!("Full CLI arguments parsed: {:?}", cli);

    let session = RpcSession::open(&cli.host, cli.port);
    info!("Using PyMOL RPC endpoint {}", session.endpoint());

    if !cli.no_reinit {
        // Keep going even if reinit fails; the session may still accept loads.
        if let Err(e) = reset(&session) {
            warn!("Reinitialize failed, continuing with the session as-is: {e}");
        }
    }

    let options = LoadOptions {
        recursive: cli.recursive,
        ..Default::default()
    };

    let mut any_loaded = false;
    for raw_path in &cli.paths {
        let path = paths::expand_tilde(raw_path);
        match load_structures(&session, &path, &options) {
            Ok(loaded) => {
                if loaded.is_empty() {
                    println!("[WARN] Nothing loaded from: {}", path.display());
                }
                for item in &loaded {
                    println!(
                        "[OK] {} -> {} ({})",
                        item.path.display(),
                        item.object,
                        item.format
                    );
                    any_loaded = true;
                }
            }
            Err(e) => println!("[ERR] {}: {}", path.display(), e),
        }
    }

    if any_loaded { 0 } else { 1 }
}
