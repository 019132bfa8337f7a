use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "whatprovides",
    version,
    about = "Find which Python module declares a variable, function or class",
    long_about = "whatprovides scans the module search path of a Python interpreter for top-level \
                  variables, functions and classes whose name matches SEARCH, like `yum whatprovides` \
                  for source-level symbols."
)]
pub struct Cli {
    /// A string to search for, or a regular expression with -r
    pub search: String,

    /// Treat SEARCH as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Ignore case
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Show only variables; combines with -d and -c
    #[arg(short, long)]
    pub variables: bool,

    /// Show only functions; combines with -v and -c
    #[arg(short = 'd', long)]
    pub functions: bool,

    /// Show only classes; combines with -v and -d
    #[arg(short, long)]
    pub classes: bool,

    /// Directory to scan instead of the interpreter search path (repeatable)
    #[arg(short, long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Python interpreter whose sys.path is scanned [default: python3]
    #[arg(long, value_name = "EXE")]
    pub python: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Visit files in name order for reproducible output
    #[arg(long)]
    pub sorted: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file to use instead of the discovered one
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,
}
