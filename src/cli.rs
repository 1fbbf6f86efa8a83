use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Pull request title to check
    #[clap(short, long, env = "PR_TITLE")]
    pub title: String,

    /// Comma separated issue key prefixes (e.g. "FOO,BAR")
    #[clap(short, long, env = "ISSUE_PREFIXES")]
    pub prefixes: Option<String>,

    /// Path to the config file [default: ~/.config/pr-title-fix/config.yml]
    #[clap(short, long, env = "PR_TITLE_FIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the corrected title
    #[clap(short, long, value_parser, default_value_t = false)]
    pub json: bool,

    /// Exit with status 1 if the title needs fixing
    #[clap(long, value_parser, default_value_t = false)]
    pub check: bool,
}
