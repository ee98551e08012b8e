use std::time::Instant;

use delta_life::patterns;
use delta_life::{DeltaLife, DeltaLifeConfig};

fn bench_soup(side: i64, density: f64, iterations: u64) -> (f64, u64, usize) {
    let cells = patterns::random_soup(side, density, 0x5EED_1234_ABCD_EF01);
    let config = DeltaLifeConfig::default().capacity(cells.len());
    let mut engine = DeltaLife::from_cells_with_config(cells, config);

    let start = Instant::now();
    engine.step_n(iterations);
    let duration = start.elapsed();

    let total_ms = duration.as_secs_f64() * 1000.0;
    (total_ms, engine.population(), engine.last_frontier_len())
}

fn main() {
    let scales: &[(i64, u64)] = &[
        (64, 400),
        (128, 200),
        (256, 100),
        (512, 50),
        (1024, 20),
    ];

    println!(
        "{:<10} {:>10} {:>12} {:>12} {:>10} {:>10}",
        "Soup", "Iters", "Total(ms)", "Avg(ms)", "Pop", "Frontier"
    );
    println!("{}", "-".repeat(68));

    for &(side, iters) in scales {
        let (total_ms, pop, frontier) = bench_soup(side, 0.35, iters);
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<10} {:>10} {:>12.1} {:>12.4} {:>10} {:>10}",
            format!("{}x{}", side, side),
            iters,
            total_ms,
            avg_ms,
            pop,
            frontier
        );
    }
}
