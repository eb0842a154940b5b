use anyhow::Result;
use clap::Parser;
use scorigami::cli::Cli;
use scorigami::pipeline;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SCORIGAMI_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("scorigami=info"));
    match cli.open_log_file()? {
        Some(log_file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(log_file)
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved config");

    let summary = pipeline::run(&config, cli.year)?;

    let seasons = if summary.total_games == 0 { 0 } else { summary.last_year - summary.first_year + 1 };
    println!(
        "  {} seasons ({}-{}), {} games, {} distinct scores, highest {}",
        seasons,
        summary.first_year,
        summary.last_year,
        summary.total_games,
        summary.distinct_scores,
        summary.highest_score
    );
    println!("  Wrote {} files to {}", summary.files_written.len(), config.report.output_dir.display());
    Ok(())
}
