#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::process::ExitCode;

use delta_life::harness::{self, HarnessConfig, RunReport};
use delta_life::patterns;

fn print_usage() {
    println!("{}", harness::USAGE);
    let names: Vec<&str> = patterns::PATTERNS.iter().map(|p| p.name).collect();
    println!("built-in patterns: {}", names.join(", "));
}

fn print_summary(cfg: &HarnessConfig, reports: &[RunReport]) {
    let total_secs: f64 = reports.iter().map(|r| r.elapsed.as_secs_f64()).sum();
    let total_generations: u64 = reports.iter().map(|r| r.generations).sum();
    let mean = total_generations as f64 / total_secs.max(f64::MIN_POSITIVE);
    let consistent = reports
        .windows(2)
        .all(|w| w[0].fingerprint == w[1].fingerprint);
    let status = if consistent { "MATCH" } else { "MISMATCH" };

    println!(
        "\n--- Summary ({} runs x {} generations, {} threads) ---",
        reports.len(),
        cfg.generations,
        cfg.threads
    );
    println!("Pattern: {}", cfg.pattern_name);
    println!("Mean: {mean:.2} generations / sec");
    if let Some(last) = reports.last() {
        println!("Final population: {} [{status}]", last.population);
        if let Some(b) = last.bounds {
            println!(
                "Final bounds: ({}, {})..=({}, {}) ({}x{})",
                b.min_x,
                b.min_y,
                b.max_x,
                b.max_y,
                b.width(),
                b.height()
            );
        }
    }
}

fn main() -> ExitCode {
    let cfg = match HarnessConfig::from_args(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", harness::USAGE);
            return ExitCode::from(2);
        }
    };
    if cfg.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let reports = match harness::run_all(&cfg) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for report in &reports {
        println!("{:.2} generations / sec", report.generations_per_sec());
    }
    print_summary(&cfg, &reports);
    ExitCode::SUCCESS
}
