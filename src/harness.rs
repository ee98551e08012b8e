//! Throughput harness: timed runs of a seed pattern for a fixed number of
//! generations.
//!
//! Runs are independent simulations, so several can execute at once on a
//! dedicated rayon pool without sharing any state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::deltalife::{Bounds, DeltaLife};
use crate::error::HarnessError;
use crate::patterns;
use crate::render::Renderer;
use crate::rle;

pub const USAGE: &str = "usage: delta-life [--generations N] [--runs N] [--threads N] \
[--pattern NAME | --rle PATH] [--show] [--fps N]";

/// Harness settings. The defaults time five sequential runs of the
/// r-pentomino over 1000 generations.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub pattern_name: String,
    pub cells: Vec<(i64, i64)>,
    pub generations: u64,
    pub runs: usize,
    pub threads: usize,
    pub show: bool,
    pub fps: u32,
    pub help: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pattern_name: "r-pentomino".to_string(),
            cells: patterns::R_PENTOMINO.to_vec(),
            generations: 1000,
            runs: 5,
            threads: 1,
            show: false,
            fps: 30,
            help: false,
        }
    }
}

fn value<I>(flag: &'static str, args: &mut I) -> Result<String, HarnessError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(HarnessError::MissingValue { flag })
}

fn positive<T>(flag: &'static str, value: String) -> Result<T, HarnessError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(HarnessError::InvalidValue {
            flag,
            expected: "a positive integer",
            value,
        }),
    }
}

impl HarnessConfig {
    /// Parse command-line arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--generations" => {
                    let raw = value("--generations", &mut args)?;
                    cfg.generations = positive("--generations", raw)?;
                }
                "--runs" => {
                    cfg.runs = positive("--runs", value("--runs", &mut args)?)?;
                }
                "--threads" => {
                    cfg.threads = positive("--threads", value("--threads", &mut args)?)?;
                }
                "--fps" => {
                    cfg.fps = positive("--fps", value("--fps", &mut args)?)?;
                }
                "--pattern" => {
                    let name = value("--pattern", &mut args)?;
                    let pattern =
                        patterns::find(&name).ok_or(HarnessError::UnknownPattern(name))?;
                    cfg.pattern_name = pattern.name.to_string();
                    cfg.cells = pattern.cells.to_vec();
                }
                "--rle" => {
                    let path = PathBuf::from(value("--rle", &mut args)?);
                    let text = std::fs::read_to_string(&path).map_err(|source| {
                        HarnessError::PatternFile {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    cfg.cells = rle::decode(&text)?;
                    cfg.pattern_name = path.display().to_string();
                }
                "--show" => {
                    cfg.show = true;
                }
                "--help" | "-h" => {
                    cfg.help = true;
                }
                other => return Err(HarnessError::UnknownArgument(other.to_string())),
            }
        }
        Ok(cfg)
    }
}

/// Outcome of one timed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub run: usize,
    pub generations: u64,
    pub elapsed: Duration,
    pub population: u64,
    pub bounds: Option<Bounds>,
    /// Hash of the sorted final live cells; equal across runs of one seed.
    pub fingerprint: u64,
}

impl RunReport {
    pub fn generations_per_sec(&self) -> f64 {
        self.generations as f64 / self.elapsed.as_secs_f64().max(f64::MIN_POSITIVE)
    }
}

/// Run `generations` steps from `cells`, drawing each generation when a
/// renderer is given.
pub fn run_once(
    run: usize,
    cells: &[(i64, i64)],
    generations: u64,
    mut renderer: Option<&mut Renderer>,
) -> Result<RunReport, HarnessError> {
    let mut engine = DeltaLife::from_cells(cells.iter().copied());
    let stdout = io::stdout();

    let start = Instant::now();
    for _ in 0..generations {
        engine.step();
        if let Some(renderer) = renderer.as_deref_mut() {
            renderer.draw(engine.board(), &mut stdout.lock())?;
        }
    }
    let elapsed = start.elapsed();

    let mut hasher = DefaultHasher::new();
    engine.board().sorted_cells().hash(&mut hasher);

    Ok(RunReport {
        run,
        generations,
        elapsed,
        population: engine.population(),
        bounds: engine.bounds(),
        fingerprint: hasher.finish(),
    })
}

/// Execute every configured run.
///
/// With `show` set, runs are drawn one after another; otherwise they are
/// spread over a pool of `threads` workers.
pub fn run_all(cfg: &HarnessConfig) -> Result<Vec<RunReport>, HarnessError> {
    if cfg.show {
        let mut renderer = Renderer::new().fps(cfg.fps);
        return (0..cfg.runs)
            .map(|run| run_once(run, &cfg.cells, cfg.generations, Some(&mut renderer)))
            .collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.threads.max(1))
        .build()?;
    pool.install(|| {
        (0..cfg.runs)
            .into_par_iter()
            .map(|run| run_once(run, &cfg.cells, cfg.generations, None))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::{HarnessConfig, run_all};
    use crate::error::HarnessError;
    use crate::patterns;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_reference_benchmark() {
        let cfg = HarnessConfig::from_args(Vec::new()).expect("no args");
        assert_eq!(cfg.generations, 1000);
        assert_eq!(cfg.runs, 5);
        assert_eq!(cfg.threads, 1);
        assert_eq!(cfg.cells, patterns::R_PENTOMINO.to_vec());
        assert!(!cfg.show);
    }

    #[test]
    fn parses_flags() {
        let cfg = HarnessConfig::from_args(args(&[
            "--generations",
            "20",
            "--runs",
            "3",
            "--threads",
            "2",
            "--pattern",
            "Glider",
            "--fps",
            "60",
            "--show",
        ]))
        .expect("valid args");
        assert_eq!(cfg.generations, 20);
        assert_eq!(cfg.runs, 3);
        assert_eq!(cfg.threads, 2);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.pattern_name, "glider");
        assert_eq!(cfg.cells, patterns::GLIDER.to_vec());
        assert!(cfg.show);
    }

    #[test]
    fn pattern_file_error_keeps_path_and_io_source() {
        use std::error::Error;

        let err = HarnessConfig::from_args(args(&["--rle", "/nonexistent/pattern.rle"]))
            .expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/pattern.rle"));
        let source = err.source().expect("io error attached");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            HarnessConfig::from_args(args(&["--generations", "0"])),
            Err(HarnessError::InvalidValue { flag: "--generations", .. })
        ));
        assert!(matches!(
            HarnessConfig::from_args(args(&["--runs", "-2"])),
            Err(HarnessError::InvalidValue { flag: "--runs", .. })
        ));
        assert!(matches!(
            HarnessConfig::from_args(args(&["--runs"])),
            Err(HarnessError::MissingValue { flag: "--runs" })
        ));
        assert!(matches!(
            HarnessConfig::from_args(args(&["--pattern", "nope"])),
            Err(HarnessError::UnknownPattern(_))
        ));
        assert!(matches!(
            HarnessConfig::from_args(args(&["--frobnicate"])),
            Err(HarnessError::UnknownArgument(_))
        ));
        assert!(matches!(
            HarnessConfig::from_args(args(&["--rle", "/nonexistent/pattern.rle"])),
            Err(HarnessError::PatternFile { .. })
        ));
    }

    #[test]
    fn parallel_runs_agree() {
        let cfg = HarnessConfig {
            generations: 150,
            runs: 4,
            threads: 4,
            ..HarnessConfig::default()
        };
        let reports = run_all(&cfg).expect("runs complete");
        assert_eq!(reports.len(), 4);
        let first = &reports[0];
        for report in &reports {
            assert_eq!(report.generations, 150);
            assert_eq!(report.population, first.population);
            assert_eq!(report.bounds, first.bounds);
            assert_eq!(report.fingerprint, first.fingerprint);
        }
    }
}
