#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use delta_life::patterns;
use delta_life::{DeltaLife, DeltaLifeConfig};

#[derive(Clone, Debug)]
struct BenchConfig {
    pattern: String,
    /// Random soup side; replaces the named pattern when set.
    soup: Option<i64>,
    density: f64,
    warmup: u64,
    iters: u64,
    seed: u64,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            pattern: "r-pentomino".to_string(),
            soup: None,
            density: 0.35,
            warmup: 0,
            iters: 1000,
            seed: 0x5EED_1234_ABCD_EF01,
            json: false,
        }
    }
}

fn parse_seed(v: &str) -> Option<u64> {
    match v.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => v.parse().ok(),
    }
}

fn parse_args() -> Result<BenchConfig, String> {
    let mut cfg = BenchConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |expected: &str| {
            args.next()
                .ok_or_else(|| format!("{arg} requires {expected}"))
        };
        match arg.as_str() {
            "--pattern" => cfg.pattern = value("a pattern name")?,
            "--soup" => {
                let v = value("a side length")?;
                cfg.soup = Some(v.parse().map_err(|_| format!("--soup expects i64, got {v}"))?);
            }
            "--density" => {
                let v = value("a density")?;
                cfg.density = v.parse().map_err(|_| format!("--density expects f64, got {v}"))?;
            }
            "--warmup" => {
                let v = value("a generation count")?;
                cfg.warmup = v.parse().map_err(|_| format!("--warmup expects u64, got {v}"))?;
            }
            "--iters" => {
                let v = value("a generation count")?;
                cfg.iters = v.parse().map_err(|_| format!("--iters expects u64, got {v}"))?;
            }
            "--seed" => {
                let v = value("a seed")?;
                cfg.seed = parse_seed(&v).ok_or_else(|| format!("--seed expects u64, got {v}"))?;
            }
            "--json" => cfg.json = true,
            other => return Err(format!("unknown arg: {other}")),
        }
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    let cfg = match parse_args() {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(2);
        }
    };

    let cells = match cfg.soup {
        Some(side) => patterns::random_soup(side, cfg.density, cfg.seed),
        None => match patterns::find(&cfg.pattern) {
            Some(p) => p.cells.to_vec(),
            None => {
                eprintln!("error: unknown pattern {:?}", cfg.pattern);
                return ExitCode::from(2);
            }
        },
    };

    let config = DeltaLifeConfig::default().capacity(cells.len());
    let mut engine = DeltaLife::from_cells_with_config(cells, config);

    if cfg.warmup > 0 {
        engine.step_n(cfg.warmup);
    }

    let start = Instant::now();
    engine.step_n(cfg.iters);
    let elapsed = start.elapsed();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / cfg.iters.max(1) as f64;
    let gens_per_sec = cfg.iters as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
    let population = engine.population();
    let label = match cfg.soup {
        Some(side) => format!("soup{side}"),
        None => cfg.pattern.clone(),
    };

    if cfg.json {
        println!(
            "{{\"pattern\":\"{}\",\"density\":{},\"warmup\":{},\"iters\":{},\"seed\":{},\"total_ms\":{:.6},\"avg_ms\":{:.6},\"gens_per_sec\":{:.2},\"population\":{}}}",
            label, cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, gens_per_sec, population,
        );
    } else {
        println!(
            "pattern={},density={},warmup={},iters={},seed={},total_ms={:.6},avg_ms={:.6},gens_per_sec={:.2},population={}",
            label, cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, gens_per_sec, population,
        );
    }
    ExitCode::SUCCESS
}
