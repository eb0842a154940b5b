use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub league: LeagueConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where one league's exported files live.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LeagueConfig {
    #[serde(default = "default_league_code")]
    pub code: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_game_log")]
    pub game_log: String,
    #[serde(default = "default_team_info")]
    pub team_info: String,
}

fn default_league_code() -> String { "RZB".to_string() }
fn default_data_dir() -> PathBuf { PathBuf::from("leaguedata") }
fn default_game_log() -> String { "game_information.csv".to_string() }
fn default_team_info() -> String { "team_information.csv".to_string() }

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            code: default_league_code(),
            data_dir: default_data_dir(),
            game_log: default_game_log(),
            team_info: default_team_info(),
        }
    }
}

impl LeagueConfig {
    pub fn game_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.game_log)
    }

    pub fn team_info_path(&self) -> PathBuf {
        self.data_dir.join(&self.team_info)
    }
}

/// What to do with a game whose two scores are equal.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Second side of the row is recorded as the winner.
    #[default]
    SideTwoWins,
    /// Fail the run.
    Reject,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ParsingConfig {
    /// Added to the regular-season week number to form the week code.
    #[serde(default = "default_week_offset")]
    pub week_offset: u32,
    #[serde(default)]
    pub tie_policy: TiePolicy,
}

fn default_week_offset() -> u32 { 4 }

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            week_offset: default_week_offset(),
            tie_policy: TiePolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Season pages go here, relative to `output_dir`.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_years_per_row")]
    pub years_per_row: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_pages_dir() -> String { "html".to_string() }
fn default_index_file() -> String { "index.html".to_string() }
fn default_years_per_row() -> usize { 5 }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            pages_dir: default_pages_dir(),
            index_file: default_index_file(),
            years_per_row: default_years_per_row(),
            format: OutputFormat::default(),
        }
    }
}

impl ReportConfig {
    pub fn pages_path(&self) -> PathBuf {
        self.output_dir.join(&self.pages_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(&self.index_file)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        if config.report.years_per_row == 0 {
            anyhow::bail!("report.years_per_row must be at least 1");
        }
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
