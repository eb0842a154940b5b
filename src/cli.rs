use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

/// Build scorigami pages from a simulated football league's results log.
#[derive(Debug, Parser, Clone)]
#[command(about, version)]
pub struct Cli {
    /// Path to configuration file. Defaults are used if it does not exist.
    #[arg(short, long, default_value = "scorigami.toml")]
    pub config: PathBuf,

    /// League identifier shown on the index page.
    #[arg(short, long)]
    pub league: Option<String>,

    /// Directory holding game_information.csv and team_information.csv.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Directory the index and season pages are written to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Only write this season's page (plus the index).
    #[arg(short, long)]
    pub year: Option<u32>,

    /// Write logs here instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(&self.config)?;
        if let Some(code) = &self.league {
            config.league.code = code.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.league.data_dir = dir.clone();
        }
        if let Some(dir) = &self.output {
            config.report.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        Ok(config)
    }

    /// Create the `--log-file` target, if one was given.
    pub fn open_log_file(&self) -> Result<Option<File>> {
        self.log_file
            .as_ref()
            .map(|path| {
                File::create(path).with_context(|| format!("Failed to create log file: {}", path.display()))
            })
            .transpose()
    }
}
