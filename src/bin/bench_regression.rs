//! Performance regression table for DeltaLife.
//!
//! Runs a fixed set of scenarios and reports timing. Use with `--release` for
//! meaningful results. Compare output across commits to detect regressions.

#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;

use delta_life::DeltaLife;
use delta_life::patterns;
use rayon::prelude::*;

enum Seed {
    Named(&'static [(i64, i64)]),
    Soup { side: i64, density: f64, seed: u64 },
}

struct Scenario {
    name: &'static str,
    seed: Seed,
    warmup: u64,
    iters: u64,
}

impl Seed {
    fn cells(&self) -> Vec<(i64, i64)> {
        match *self {
            Seed::Named(cells) => cells.to_vec(),
            Seed::Soup { side, density, seed } => patterns::random_soup(side, density, seed),
        }
    }
}

fn run_scenario(s: &Scenario) -> (f64, u64) {
    let mut engine = DeltaLife::from_cells(s.seed.cells());
    if s.warmup > 0 {
        engine.step_n(s.warmup);
    }

    let start = Instant::now();
    engine.step_n(s.iters);
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, engine.population())
}

fn main() {
    let scenarios = [
        Scenario {
            name: "r-pentomino",
            seed: Seed::Named(patterns::R_PENTOMINO),
            warmup: 0,
            iters: 1000,
        },
        Scenario {
            name: "acorn",
            seed: Seed::Named(patterns::ACORN),
            warmup: 0,
            iters: 2000,
        },
        Scenario {
            name: "glider",
            seed: Seed::Named(patterns::GLIDER),
            warmup: 0,
            iters: 10_000,
        },
        Scenario {
            name: "soup-64-sparse",
            seed: Seed::Soup {
                side: 64,
                density: 0.10,
                seed: 0xA1,
            },
            warmup: 3,
            iters: 500,
        },
        Scenario {
            name: "soup-64-dense",
            seed: Seed::Soup {
                side: 64,
                density: 0.42,
                seed: 0xB2,
            },
            warmup: 3,
            iters: 500,
        },
        Scenario {
            name: "soup-256-dense",
            seed: Seed::Soup {
                side: 256,
                density: 0.42,
                seed: 0xC3,
            },
            warmup: 3,
            iters: 200,
        },
    ];

    println!(
        "{:<20} {:>10} {:>10} {:>12} {:>12} {:>10}",
        "Scenario", "Runs", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(78));

    for s in &scenarios {
        let (total_ms, pop) = run_scenario(s);
        let avg_ms = total_ms / s.iters as f64;
        println!(
            "{:<20} {:>10} {:>10} {:>12.3} {:>12.6} {:>10}",
            s.name, "1", s.iters, total_ms, avg_ms, pop
        );
    }

    println!();

    // Independent runs of every scenario at once on the global pool.
    let start = Instant::now();
    let results: Vec<(f64, u64)> = scenarios.par_iter().map(run_scenario).collect();
    let wall_ms = start.elapsed().as_secs_f64() * 1000.0;
    for (s, (total_ms, pop)) in scenarios.iter().zip(results) {
        let avg_ms = total_ms / s.iters as f64;
        println!(
            "{:<20} {:>10} {:>10} {:>12.3} {:>12.6} {:>10}",
            s.name, "par", s.iters, total_ms, avg_ms, pop
        );
    }
    println!("parallel wall time: {wall_ms:.3} ms");
}
