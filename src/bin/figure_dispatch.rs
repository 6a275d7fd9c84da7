//==============================================================================
// Figures through dynamic dispatch
//==============================================================================

use clap::Parser;
use colored::Colorize;
use geometry_exercises::config::Settings;
use geometry_exercises::shapes::{report, total_surface, Figure, Scene};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figure_dispatch")]
#[command(about = "Print description, perimeter and area of each figure")]
struct Cli {
    /// TOML or JSON file with a `figures` list (built-in demo when omitted)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn run<W: Write>(figures: &[Box<dyn Figure>], settings: &Settings, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=== Figures ===".bold())?;
    for figure in figures {
        writeln!(out, "{}", report(figure.as_ref(), settings.precision))?;
    }

    writeln!(
        out,
        "\n{} {}",
        "Total area:".bold(),
        settings.fmt_number(total_surface(figures)).green()
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    geometry_exercises::init_logging(cli.verbose);

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    settings.apply();

    let scene = match cli.scene.as_deref() {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };

    run(&scene.into_figures(), &settings, &mut io::stdout().lock())?;
    Ok(())
}
