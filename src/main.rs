use std::process;

use clap::Parser;
use colored::Colorize;

use pr_title_fix::app::{self, Outcome};
use pr_title_fix::cli::Args;
use pr_title_fix::logging;

fn main() {
    let args = Args::parse();
    logging::init_logging();

    match app::run(&args) {
        Ok(Outcome::Fixed) if args.check => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{} {}", "x".red(), err);
            process::exit(2);
        }
    }
}
