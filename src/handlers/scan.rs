//! Scan mode handler.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::declaration::Registry;
use crate::discovery::{SourceWalker, WalkConfig};
use crate::error::{IoOperation, Result, WhatProvidesError};
use crate::filter::{KindFilter, NameFilter};
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use crate::scan::Scan;
use crate::search_path::RootSources;
use std::env;
use std::io::{self, ErrorKind, IsTerminal, Write};
use tracing::{debug, error, info};

use super::{EXIT_ERROR, HandlerResult};

/// Explicit `--config` files must load; discovered ones may be skipped.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => Ok(Config::from_file(path)?),
        None => {
            let cwd = env::current_dir().ok();
            Ok(Config::load(cwd.as_deref()))
        }
    }
}

/// Runs the scan described by `cli` and `config`, writing one line per
/// declaration to `out`. Returns the number of lines written.
///
/// A closed output ends the scan early without an error.
pub fn run_scan_to<W: Write>(cli: &Cli, config: &Config, color: bool, mut out: W) -> Result<usize> {
    let registry = Registry::python()?;
    let name_filter = NameFilter::from_options(&cli.search, cli.regex, cli.ignore_case)?;
    let kind_filter = KindFilter::from_flags(&registry, cli.variables, cli.functions, cli.classes);

    let roots = RootSources {
        paths: cli.paths.clone(),
        python: cli.python.clone(),
    }
    .resolve(config);

    let reporter: Box<dyn Reporter> = match cli.format.or(config.format).unwrap_or_default() {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(color)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };

    let walker = SourceWalker::new(WalkConfig::default().with_sorted(cli.sorted || config.sorted));
    let declarations = Scan::new(&registry)
        .with_walker(walker)
        .with_name_filter(name_filter)
        .with_kind_filter(kind_filter)
        .run(roots);

    let mut written = 0;
    for declaration in declarations {
        let line = reporter.report(&declaration?);
        if let Err(e) = writeln!(out, "{}", line) {
            return closed_output(e, written);
        }
        written += 1;
    }

    if let Err(e) = out.flush() {
        return closed_output(e, written);
    }
    Ok(written)
}

fn closed_output(e: io::Error, written: usize) -> Result<usize> {
    if e.kind() == ErrorKind::BrokenPipe {
        debug!(written, "Output closed, stopping scan");
        return Ok(written);
    }
    Err(WhatProvidesError::io("<stdout>", IoOperation::Write, e))
}

fn scan(cli: &Cli) -> Result<usize> {
    let config = load_config(cli)?;
    let color =
        !cli.no_color && config.color.unwrap_or(true) && io::stdout().is_terminal();
    colored::control::set_override(color);
    run_scan_to(cli, &config, color, io::stdout().lock())
}

/// Run normal scan mode.
pub fn run_normal_mode(cli: &Cli) -> HandlerResult {
    info!(search = %cli.search, regex = cli.regex, ignore_case = cli.ignore_case, "Starting scan");
    match scan(cli) {
        Ok(written) => {
            debug!(declarations = written, "Scan finished");
            HandlerResult::Success
        }
        Err(e) => {
            error!(error = %e, configuration = e.is_configuration(), "Scan failed");
            eprintln!("Error: {}", e);
            HandlerResult::Error(EXIT_ERROR)
        }
    }
}
