//! Command line interface for inspecting, rendering and checking favicon sets.
//!
//! Enabled with the `cli` feature. The `favicons` binary is a thin wrapper
//! around [`Cli`] and [`run`].

mod table;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::{
    load_set, FaviconDescriptor, FaviconSet, LinkOptions, LinkRenderer, Theme, ThemeChoice,
    ValidationRules, DEFAULT_PATH_PREFIX,
};

/// Environment variable holding an `EnvFilter` directive for log output.
pub const LOG_ENV: &str = "FAVICONS_LOG";

#[derive(Debug, Parser)]
#[command(name = "favicons", version, about = "Inspect and render light/dark favicon sets")]
pub struct Cli {
    /// Favicon set to use instead of the built-in table (.yaml, .yml or .json)
    #[arg(long, short, global = true, env = "FAVICONS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List favicon entries
    List {
        #[arg(long, short, value_enum, default_value_t = ThemeArg::All)]
        theme: ThemeArg,
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print <link rel="icon"> tags for an HTML head
    Links {
        #[arg(long, short, value_enum, default_value_t = ThemeArg::All)]
        theme: ThemeArg,
        /// Omit the type attribute
        #[arg(long)]
        no_type: bool,
        /// Omit the media attribute when a single theme is selected
        #[arg(long)]
        no_media: bool,
    },
    /// Validate the favicon set
    Check {
        /// Required src prefix; pass an empty string to disable
        #[arg(long, default_value = DEFAULT_PATH_PREFIX)]
        prefix: String,
        /// Allow light and dark to offer different sizes
        #[arg(long)]
        no_parity: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Auto,
    All,
}

impl From<ThemeArg> for ThemeChoice {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeChoice::Fixed(Theme::Light),
            ThemeArg::Dark => ThemeChoice::Fixed(Theme::Dark),
            ThemeArg::Auto => ThemeChoice::Auto,
            ThemeArg::All => ThemeChoice::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Csv,
}

/// Installs a stderr tracing subscriber.
///
/// `FAVICONS_LOG` wins over the verbosity flag when set.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a parsed command, writing results to `out` and reports to `err`.
///
/// Returns [`ExitCode::FAILURE`] when `check` finds problems; the problem
/// list goes to `err`.
pub fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<ExitCode> {
    let set = match &cli.config {
        Some(path) => load_set(path)
            .with_context(|| format!("could not load favicon config {}", path.display()))?,
        None => FaviconSet::defaults(),
    };

    match &cli.command {
        Command::List { theme, format } => {
            let choice = ThemeChoice::from(*theme);
            let themes = choice.resolve();
            let entries: Vec<(usize, &FaviconDescriptor)> = set
                .iter()
                .enumerate()
                .filter(|(_, d)| themes.contains(&d.theme()))
                .collect();
            let rendered = match format {
                OutputFormat::Text => table::text(&entries),
                OutputFormat::Json => {
                    let list: Vec<_> = entries.iter().map(|(_, d)| *d).collect();
                    serde_json::to_string_pretty(&list)?
                }
                OutputFormat::Yaml => {
                    let list: Vec<_> = entries.iter().map(|(_, d)| *d).collect();
                    serde_yaml::to_string(&list)?
                }
                OutputFormat::Csv => table::csv(&entries)?,
            };
            write!(out, "{}", rendered)?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Links {
            theme,
            no_type,
            no_media,
        } => {
            let renderer = LinkRenderer::with_options(LinkOptions {
                include_type: !no_type,
                media_for_single_theme: !no_media,
            })?;
            let html = renderer.render(&set, ThemeChoice::from(*theme))?;
            writeln!(out, "{}", html)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { prefix, no_parity } => {
            let rules = ValidationRules {
                path_prefix: prefix.clone(),
                require_parity: !no_parity,
            };
            match set.validate(&rules) {
                Ok(()) => {
                    writeln!(out, "ok: {} favicons, {} pairs", set.len(), set.pairs().len())?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(problems) => {
                    writeln!(err, "{}", problems)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
