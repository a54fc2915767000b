// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for quest2gh.
//!
//! This binary provides the `quest2gh` command for turning a quest seed file
//! into GitHub issues.

use lexopt::prelude::*;
use quest2gh::candidate::collect_candidates;
use quest2gh::config::{Config, ConfigError};
use quest2gh::github::GitHubClient;
use quest2gh::import::{Reporter, run_import};
use quest2gh::seed::{LoadError, load_seed};
use snafu::prelude::*;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status when the run finished but some issues were not created.
const EXIT_PARTIAL: u8 = 2;

struct Cli {
    input: PathBuf,
    dry_run: bool,
    quiet: bool,
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("missing required argument: <SEED_JSON>"))]
    MissingInput,

    #[snafu(display("{source}"))]
    Configuration { source: ConfigError },

    #[snafu(display("{source}"))]
    Input { source: LoadError },

    #[snafu(display("failed to write output: {source}"))]
    WriteOutput { source: io::Error },
}

fn print_help() {
    println!(
        "\
{name} {version}
Create GitHub issues from a quest seed file

Usage: {name} [OPTIONS] <SEED_JSON>

Arguments:
  <SEED_JSON>  JSON file with quests, quest_chains and bosses

Environment:
  GITHUB_TOKEN    Token used to create issues (required)
  REPO_OWNER      Owner of the target repository (required)
  REPO_NAME       Name of the target repository (required)
  GITHUB_API_URL  API root (default: https://api.github.com)

Options:
  -n, --dry-run  Print the issues that would be created and exit
  -q, --quiet    Only report failures and the summary
  -v, --verbose  Log requests and responses to stderr
  -h, --help     Print help
  -V, --version  Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, Error> {
    // No arguments at all is a usage error, not a request for help
    if env::args_os().len() == 1 {
        print_help();
        std::process::exit(1);
    }

    let mut input: Option<PathBuf> = None;
    let mut dry_run = false;
    let mut quiet = false;
    let mut verbose = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next().context(ParseArgsSnafu)? {
        match arg {
            Short('n') | Long("dry-run") => dry_run = true,
            Short('q') | Long("quiet") => quiet = true,
            Short('v') | Long("verbose") => verbose = true,
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) if input.is_none() => input = Some(PathBuf::from(val)),
            _ => return Err(arg.unexpected()).context(ParseArgsSnafu),
        }
    }

    Ok(Cli {
        input: input.context(MissingInputSnafu)?,
        dry_run,
        quiet,
        verbose,
    })
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("QUEST2GH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "quest2gh=debug"
        } else {
            "quest2gh=error"
        })
    });

    let registry = tracing_subscriber::registry().with(filter);

    if env::var("QUEST2GH_LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry
            .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Error> {
    let cli = parse_args()?;
    init_tracing(cli.verbose);

    // Credentials are checked before the seed file is touched
    let config = if cli.dry_run {
        None
    } else {
        Some(Config::from_env().context(ConfigurationSnafu)?)
    };
    tracing::debug!(?config, dry_run = cli.dry_run, "configuration loaded");

    let seed = load_seed(&cli.input).context(InputSnafu)?;
    let candidates = collect_candidates(&seed);
    tracing::debug!(count = candidates.len(), "collected issue candidates");

    let mut reporter = Reporter::new(io::stdout().lock(), cli.quiet);

    if candidates.is_empty() {
        reporter.nothing_to_import().context(WriteOutputSnafu)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(config) = config else {
        reporter.preview(&candidates).context(WriteOutputSnafu)?;
        return Ok(ExitCode::SUCCESS);
    };

    reporter
        .found(candidates.len(), &config.full_name())
        .context(WriteOutputSnafu)?;

    let client = GitHubClient::new(&config);
    let summary = run_import(&candidates, &client, &mut reporter).context(WriteOutputSnafu)?;

    Ok(if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_PARTIAL)
    })
}
