use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use offboard_sitl::{utils, Backend, OffboardTestConfig, RunOutcome};
use tracing::{debug, warn};

/// Flies an autopilot along a square, circle, eight or ellipse with offboard
/// position or velocity setpoints.
#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file.
    #[clap(short, long, value_parser)]
    config_path: Option<PathBuf>,
    /// Control mode: position, velocity or acceleration. Overrides the setting file.
    #[clap(long)]
    mode: Option<String>,
    /// Path shape: square, circle, eight or ellipse. Overrides the setting file.
    #[clap(long)]
    shape: Option<String>,
    /// Overrides the backend of the setting file.
    #[clap(long, value_enum)]
    backend: Option<Backend>,
    /// Prints the JSON schema of the setting file and exits.
    #[clap(long)]
    print_schema: bool,
}

fn main() -> Result<()> {
    utils::init_tracing();
    // `name:=value` remappings and private params are consumed by the ROS node.
    let args = Args::parse_from(std::env::args().filter(|arg| !arg.contains(":=")));
    debug!("args: {:?}", args);

    if args.print_schema {
        let schema = schemars::schema_for!(OffboardTestConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let mut config = match utils::get_config_path(args.config_path) {
        Some(path) => OffboardTestConfig::try_new(path)?,
        None => OffboardTestConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(shape) = args.shape {
        config.shape = shape;
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
        config.validate()?;
    }

    match offboard_sitl::run(&config, env!("CARGO_BIN_NAME"))? {
        RunOutcome::Completed => {}
        RunOutcome::Interrupted => warn!("Test interrupted before completion."),
    }
    Ok(())
}
