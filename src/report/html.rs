use super::{IndexPage, Renderer, SeasonPage};
use crate::config::ReportConfig;
use crate::engine::ScoreEntry;
use anyhow::Result;
use std::fmt::Write;
use std::path::{Component, Path};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1.5em; }
table.grid { border-collapse: collapse; font-size: 11px; }
table.grid th, table.grid td { border: 1px solid #ccc; width: 1.8em; height: 1.8em; text-align: center; }
td.impossible { background: #333; }
td.empty { background: #fff; }
td.seen { background: #6a9fd4; color: #fff; }
td.new { background: #2e8b57; color: #fff; font-weight: bold; }
nav a { margin-right: 1em; }
table.years td { padding: 0.3em 0.8em; }
";

/// Static HTML pages: a score grid per season and a year index.
pub struct HtmlRenderer {
    /// Link from the index page to the season pages directory.
    pages_href: String,
    /// Link from a season page back to the index.
    index_href: String,
}

impl HtmlRenderer {
    pub fn new(config: &ReportConfig) -> Self {
        let depth = Path::new(&config.pages_dir)
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();
        let index_href = format!("{}{}", "../".repeat(depth), config.index_file);
        let pages_href = config.pages_dir.trim_end_matches('/').replace('\\', "/");
        Self { pages_href, index_href }
    }

    fn season_href(&self, year: u32) -> String {
        if self.pages_href.is_empty() {
            format!("{year}.html")
        } else {
            format!("{}/{year}.html", self.pages_href)
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

impl Renderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render_index(&self, page: &IndexPage) -> Result<String> {
        let mut out = String::new();
        let title = format!("{} Scorigami", escape(&page.league));
        head(&mut out, &title)?;
        writeln!(out, "<h1>{title}</h1>")?;
        if page.all_years.is_empty() {
            writeln!(out, "<p>No games recorded.</p>")?;
        } else {
            writeln!(out, "<table class=\"years\">")?;
            for row in &page.row_years {
                write!(out, "<tr>")?;
                for year in row {
                    write!(out, "<td><a href=\"{}\">{year}</a></td>", self.season_href(*year))?;
                }
                writeln!(out, "</tr>")?;
            }
            writeln!(out, "</table>")?;
        }
        tail(&mut out)?;
        Ok(out)
    }

    fn render_season(&self, page: &SeasonPage<'_>) -> Result<String> {
        let mut out = String::new();
        let year = page.current_year;
        head(&mut out, &format!("Scorigami {year}"))?;
        writeln!(out, "<h1>Scorigami through {year}</h1>")?;

        write!(out, "<nav>")?;
        if let Some(prev) = page.prev_year {
            // pages are siblings
            write!(out, "<a href=\"{prev}.html\">&larr; {prev}</a>")?;
        }
        write!(out, "<a href=\"{}\">All seasons</a>", self.index_href)?;
        if let Some(next) = page.next_year {
            write!(out, "<a href=\"{next}.html\">{next} &rarr;</a>")?;
        }
        writeln!(out, "</nav>")?;

        writeln!(
            out,
            "<p>Seasons {}&ndash;{}. Highest winning score: {}.</p>",
            page.first_year, page.last_year, page.highest_score
        )?;

        let mut new_this_year: Vec<&ScoreEntry> = Vec::new();
        writeln!(out, "<table class=\"grid\">")?;
        write!(out, "<tr><th>L\\W</th>")?;
        for winning in 0..=page.highest_score {
            write!(out, "<th>{winning}</th>")?;
        }
        writeln!(out, "</tr>")?;
        for losing in 0..=page.highest_score {
            write!(out, "<tr><th>{losing}</th>")?;
            for winning in 0..=page.highest_score {
                if losing > winning {
                    write!(out, "<td class=\"impossible\"></td>")?;
                    continue;
                }
                let entry = page
                    .scores
                    .get(&losing)
                    .and_then(|row| row.get(&winning))
                    .filter(|e| e.first.year <= year);
                match entry {
                    Some(e) => {
                        let class = if e.first.year == year {
                            new_this_year.push(e);
                            "new"
                        } else {
                            "seen"
                        };
                        write!(
                            out,
                            "<td class=\"{class}\" title=\"{}\">{}</td>",
                            describe(e),
                            e.occurrences
                        )?;
                    }
                    None => write!(out, "<td class=\"empty\"></td>")?,
                }
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</table>")?;

        writeln!(out, "<h2>New in {year}</h2>")?;
        if new_this_year.is_empty() {
            writeln!(out, "<p>None.</p>")?;
        } else {
            writeln!(out, "<ul>")?;
            for e in new_this_year {
                writeln!(out, "<li>{}</li>", describe(e))?;
            }
            writeln!(out, "</ul>")?;
        }
        tail(&mut out)?;
        Ok(out)
    }
}

fn head(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<style>\n{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")
}

fn tail(out: &mut String) -> std::fmt::Result {
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// "27-24: Boston over Denver, Wild Card 2031 (3 games)"
fn describe(entry: &ScoreEntry) -> String {
    let g = &entry.first;
    let games = if entry.occurrences == 1 { "game" } else { "games" };
    escape(&format!(
        "{}-{}: {} over {}, {} {} ({} {games})",
        g.winning_score,
        g.losing_score,
        g.winning_team,
        g.losing_team,
        g.week_label,
        g.year,
        entry.occurrences
    ))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
