//==============================================================================
// Rectangle value semantics: default, copy, assignment, by-value and
// by-reference passing
//==============================================================================

use clap::Parser;
use colored::Colorize;
use geometry_exercises::config::Settings;
use geometry_exercises::shapes::{Figure, Point, Rectangle};
use log::debug;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rectangle_copies")]
#[command(about = "Show that rectangles behave as independent values")]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

// Receives its own copy; mutating it leaves the caller's value alone.
fn show_by_value<W: Write>(mut r: Rectangle, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", r.describe())?;
    r.displace(100.0, 100.0);
    debug!("local copy after displace: {}", r.describe());
    Ok(())
}

fn show_by_ref<W: Write>(r: &Rectangle, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", r.describe())
}

fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=== Construction ===".bold())?;
    let p1 = Point::new(1.0, 2.0);
    let p2 = Point::new(2.0, 3.0);
    let mut r1 = Rectangle::default();
    let r2 = Rectangle::new(p1, p2);
    writeln!(out, "r1 (default): {}", r1.describe())?;
    writeln!(out, "r2:           {}", r2.describe())?;

    writeln!(out, "\n{}", "=== Copy and assignment ===".bold())?;
    let mut r3 = r2;
    r1 = r2;
    r3.displace(1.0, 1.0);
    writeln!(out, "r3 = r2, then r3.displace(1, 1)")?;
    writeln!(out, "r1: {}", r1.describe())?;
    writeln!(out, "r2: {}", r2.describe())?;
    writeln!(out, "r3: {}", r3.describe())?;

    writeln!(out, "\n{}", "=== Passing ===".bold())?;
    show_by_value(r2, out)?;
    show_by_ref(&r2, out)?;
    writeln!(out, "r2 after both calls: {}", r2.describe())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    geometry_exercises::init_logging(cli.verbose);
    Settings::load_or_default(cli.config.as_deref())?.apply();

    run(&mut io::stdout().lock())?;
    Ok(())
}
