//! Writes a synthetic set of variable outputs so the dashboard can run
//! without the optimization model.
//!
//! Usage: `generate_sample [OUTPUT_DIR]` (defaults to `data/tmp/output`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SOURCES: [&str; 5] = ["Solar", "Wind", "Hydro", "Nuclear", "Gas"];
const FIRST_YEAR: i32 = 2020;
const LAST_YEAR: i32 = 2050;
const STEP: usize = 5;

fn years() -> impl Iterator<Item = i32> {
    (FIRST_YEAR..=LAST_YEAR).step_by(STEP)
}

fn write_csv(dir: &Path, name: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
    let path = dir.join(format!("{name}.csv"));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/tmp/output"));
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = StdRng::seed_from_u64(42);

    let inv = years()
        .flat_map(|year| SOURCES.iter().map(move |s| (*s, year)))
        .map(|(source, year)| {
            let cost: f64 = rng.gen_range(0.0..500.0);
            vec![source.to_string(), format!("y{year}"), format!("{cost:.2}")]
        })
        .collect();
    write_csv(&dir, "vInvCost", &["sCE", "sYear", "vInvCost"], inv)?;

    let op = years()
        .enumerate()
        .map(|(i, year)| {
            let cost = 1200.0 - 25.0 * i as f64 + rng.gen_range(-50.0..50.0);
            vec![format!("y{year}"), format!("{cost:.2}")]
        })
        .collect();
    write_csv(&dir, "vOpCost", &["sYear", "vOpCost"], op)?;

    let emi = years()
        .enumerate()
        .map(|(i, year)| {
            let tonnes = (600.0 - 80.0 * i as f64).max(0.0) + rng.gen_range(0.0..40.0);
            vec![format!("y{year}"), format!("{tonnes:.2}")]
        })
        .collect();
    write_csv(&dir, "vEmiTot", &["sYear", "vEmiTot"], emi)?;

    Ok(())
}
