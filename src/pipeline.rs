use crate::config::{Config, ReportConfig};
use crate::engine::{Scorigami, ScorigamiBuilder};
use crate::feed::{CsvLeagueFeed, GameSource};
use crate::report::{self, IndexPage, Renderer, SeasonPage};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub first_year: u32,
    pub last_year: u32,
    pub highest_score: u32,
    pub distinct_scores: usize,
    pub total_games: usize,
}

/// Load every counted game from `source` and fold it into the aggregate.
pub fn build_scorigami(source: &dyn GameSource) -> Result<Scorigami> {
    let games = source.load_games()?;
    let mut builder = ScorigamiBuilder::new();
    let mut new_scores = 0usize;
    for game in games {
        if builder.push(game) {
            new_scores += 1;
        }
    }
    let scorigami = builder.finish();
    if scorigami.is_empty() {
        tracing::warn!("no counted games in log");
    } else {
        tracing::info!(
            first_year = scorigami.first_year(),
            last_year = scorigami.last_year(),
            games = scorigami.total_games(),
            distinct = new_scores,
            highest = scorigami.highest_score(),
            "scorigami built"
        );
    }
    Ok(scorigami)
}

/// Write the index and the season pages. `only_year` restricts season pages to one year.
pub fn publish(
    scorigami: &Scorigami,
    league_code: &str,
    report: &ReportConfig,
    renderer: &dyn Renderer,
    only_year: Option<u32>,
) -> Result<RunSummary> {
    let years = match only_year {
        Some(year) if scorigami.years().contains(&year) => vec![year],
        Some(year) => anyhow::bail!(
            "year {} is outside the recorded seasons ({}-{})",
            year,
            scorigami.first_year(),
            scorigami.last_year()
        ),
        None => scorigami.years(),
    };

    let mut written = Vec::with_capacity(years.len() + 1);

    let index = IndexPage::for_scorigami(league_code, scorigami, report.years_per_row);
    let index_path = report.index_path().with_extension(renderer.extension());
    write_page(&index_path, &renderer.render_index(&index)?)?;
    written.push(index_path);

    let pages_dir = report.pages_path();
    for year in years {
        let mut page = SeasonPage::new(scorigami, Some(year));
        if only_year.is_some() {
            page = page.standalone();
        }
        let path = pages_dir.join(format!("{year}.{}", renderer.extension()));
        write_page(&path, &renderer.render_season(&page)?)?;
        tracing::debug!(year, path = %path.display(), new = scorigami.new_in(year).len(), "wrote season page");
        written.push(path);
    }

    tracing::info!(files = written.len(), "report written");
    Ok(RunSummary {
        files_written: written,
        first_year: scorigami.first_year(),
        last_year: scorigami.last_year(),
        highest_score: scorigami.highest_score(),
        distinct_scores: scorigami.distinct_scores(),
        total_games: scorigami.total_games(),
    })
}

/// Build from the league's CSV files and publish with the configured renderer.
pub fn run(config: &Config, only_year: Option<u32>) -> Result<RunSummary> {
    let feed = CsvLeagueFeed::new(config.league.clone(), config.parsing.clone());
    let scorigami = build_scorigami(&feed)?;
    let renderer = report::renderer_for(&config.report);
    publish(&scorigami, &config.league.code, &config.report, renderer.as_ref(), only_year)
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
