use anyhow::{Context, Result};
use charsep::{
    export_to_csv, export_to_json, find_separation_in_file, write_overlay, ExportOptions,
    Separation,
};
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "separate")]
#[command(about = "Detect whitespace separator rows/columns in text bitmaps", long_about = None)]
struct Args {
    /// Image files to analyze
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write a <input>.sep.csv export next to each image
    #[arg(long)]
    csv: bool,

    /// Write a <input>.sep.json export next to each image
    #[arg(long)]
    json: bool,

    /// Write a <input>.sep.png overlay (red rows, green columns)
    #[arg(long)]
    overlay: bool,

    /// Omit the CSV header row
    #[arg(long)]
    no_csv_header: bool,

    /// Compact JSON output
    #[arg(long)]
    compact_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = ExportOptions {
        pretty_json: !args.compact_json,
        csv_header: !args.no_csv_header,
    };

    // Each image gets its own graph, so inputs are independent
    let results: Vec<Result<()>> = args
        .inputs
        .par_iter()
        .map(|path| process(path, &args, &options))
        .collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    for result in results {
        if let Err(e) = result {
            eprintln!("error: {:#}", e);
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} images failed", failures, args.inputs.len());
    }
    Ok(())
}

fn process(path: &Path, args: &Args, options: &ExportOptions) -> Result<()> {
    let separation = find_separation_in_file(path)
        .with_context(|| format!("analyzing {}", path.display()))?;

    report(path, &separation);

    if args.csv {
        let out = sibling(path, "sep.csv");
        export_to_csv(&separation, &out, options)
            .with_context(|| format!("writing {}", out.display()))?;
    }
    if args.json {
        let out = sibling(path, "sep.json");
        export_to_json(&separation, &out, options)
            .with_context(|| format!("writing {}", out.display()))?;
    }
    if args.overlay {
        let out = sibling(path, "sep.png");
        write_overlay(path, &out, &separation)
            .with_context(|| format!("writing {}", out.display()))?;
    }

    Ok(())
}

fn report(path: &Path, separation: &Separation) {
    println!(
        "{}: {} whitespace rows, {} whitespace columns",
        path.display(),
        separation.rows.len(),
        separation.cols.len()
    );
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
