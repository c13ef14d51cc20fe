use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hitscope::data::loader::COLUMN_ALIASES;
use hitscope::data::synthetic::generate_synthetic;

/// Write a generated song table in the abbreviated column layout of the
/// original chart export, so it loads back through the alias table.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output CSV path.
    #[arg(default_value = "top10_s.csv")]
    output: PathBuf,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn abbreviate(column: &str) -> &str {
    COLUMN_ALIASES
        .iter()
        .find(|(_, canonical)| *canonical == column)
        .map_or(column, |(alias, _)| *alias)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = generate_synthetic(args.seed);

    // duration_min is derived on load, so it is not written.
    let columns: Vec<&String> = dataset
        .columns
        .iter()
        .filter(|c| c.as_str() != "duration_min")
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(columns.iter().map(|c| abbreviate(c)))?;
    for song in &dataset.songs {
        writer.write_record(columns.iter().map(|c| song.cell(c).to_string()))?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} songs ({}–{}) to {}",
        dataset.len(),
        dataset.year_bounds().map_or(0, |(lo, _)| lo),
        dataset.year_bounds().map_or(0, |(_, hi)| hi),
        args.output.display()
    );
    Ok(())
}
