use colored::Colorize;

use crate::cli::Args;
use crate::config::{self, Config};
use crate::error::Result;
use crate::fixer::Fixer;
use crate::report::Report;

/// What happened to the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The title was already canonical or had no issue reference
    Unchanged,
    /// At least one issue reference was rewritten
    Fixed,
}

/// Main application entry point
///
/// Prints the corrected title (or a JSON report) on stdout and status lines
/// on stderr.
pub fn run(args: &Args) -> Result<Outcome> {
    let config = load_config(args)?;
    let prefixes = config.resolve_prefixes(args.prefixes.as_deref());

    if prefixes.is_empty() {
        tracing::warn!("no issue prefixes configured, title will be left as is");
    }

    let fixer = Fixer::new(prefixes, args.title.as_str())?;
    let report = Report::from_fixer(&fixer);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_status(&report);
        println!("{}", report.fixed);
    }

    if report.changed {
        tracing::info!(original = %report.original, fixed = %report.fixed, "title fixed");
        Ok(Outcome::Fixed)
    } else {
        tracing::info!(title = %report.original, "title unchanged");
        Ok(Outcome::Unchanged)
    }
}

/// Load the config file given on the command line, or the default one
fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path),
        // An explicit prefix list makes the default config file irrelevant
        None if args.prefixes.is_some() => Ok(Config::default()),
        None => Config::load(config::get_config_path()?),
    }
}

fn print_status(report: &Report) {
    match &report.first_match {
        None => {
            eprintln!(
                "{} {}",
                "x".bright_red(),
                "No issue reference found".bright_red()
            );
        }
        Some(found) => {
            eprintln!("{} Issue: {}", ">".bright_green(), found.full.bright_cyan());
        }
    }

    for correction in &report.corrections {
        eprintln!(
            "{} {} -> {}",
            "+".bright_green(),
            correction.found.yellow(),
            correction.fixed.bright_cyan()
        );
    }
}
