//==============================================================================
// Cartesian to spherical coordinates
//==============================================================================

use clap::Parser;
use geometry_exercises::config::Settings;
use geometry_exercises::input::read_cartesian;
use geometry_exercises::spherical::Cartesian;
use log::warn;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cartesian_to_spherical")]
#[command(about = "Convert a Cartesian point to longitude, colatitude and radius")]
#[command(version)]
struct Cli {
    /// X coordinate (prompted on stdin when omitted)
    #[arg(long, allow_negative_numbers = true, requires_all = ["y", "z"])]
    x: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires_all = ["x", "z"])]
    y: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires_all = ["x", "y"])]
    z: Option<f64>,

    /// TOML file with output settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Converts the point given on the command line, or prompts for it on `reader`.
fn run<R: BufRead, W: Write>(
    cli: &Cli,
    settings: &Settings,
    reader: R,
    writer: &mut W,
) -> Result<(), Box<dyn Error>> {
    let point = match (cli.x, cli.y, cli.z) {
        (Some(x), Some(y), Some(z)) => Cartesian::new(x, y, z),
        _ => read_cartesian(reader, writer)?,
    };

    let spherical = point.to_spherical();
    if !spherical.is_defined() {
        warn!("result is undefined (r = {})", spherical.radius);
    }

    writeln!(writer, "{:.*}", settings.precision, spherical)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    geometry_exercises::init_logging(cli.verbose);

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    settings.apply();

    run(&cli, &settings, io::stdin().lock(), &mut io::stdout().lock())
}
