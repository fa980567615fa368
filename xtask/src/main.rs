use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "inline-slot workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the slot benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

const BENCH_TARGET: &str = "slot_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, output } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report(Path::new("target/criterion"), &output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH_TARGET}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH_TARGET, "--"]);
    if quick {
        cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch cargo bench for {BENCH_TARGET}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH_TARGET} failed");
    }

    println!("Finished {BENCH_TARGET} in {:.2?}", start.elapsed());
    Ok(())
}

/// Mean time per iteration, in nanoseconds, keyed by group then function.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(criterion_dir: &Path, report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# inline-slot Benchmark Report")?;
    for (group, functions) in &results {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Function | Mean (ns) |")?;
        writeln!(file, "|---|---|")?;
        for (function, mean) in functions {
            writeln!(file, "| {function} | {mean:.2} |")?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks criterion's `<group>/<function>/new/estimates.json` layout.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(function_dir) = run_dir.parent() else { continue };
        let Some(group_dir) = function_dir.parent() else { continue };

        let (Some(function), Some(group)) = (dir_name(function_dir), dir_name(group_dir)) else {
            continue;
        };
        if function == "report" || group == "report" {
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Malformed estimates in {}", path.display()))?;

        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results.entry(group).or_default().insert(function, mean);
        }
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_owned)
}
