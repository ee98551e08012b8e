//! Built-in seed patterns and random soups.

use rand::{RngCore, SeedableRng};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

/// Five-cell methuselah; the default throughput benchmark seed.
pub const R_PENTOMINO: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 1), (-1, 0), (0, -1)];

pub const ACORN: &[(i64, i64)] = &[(-2, 2), (0, 1), (-3, 0), (-2, 0), (1, 0), (2, 0), (3, 0)];

/// Travels one cell along +x and -y every four generations.
pub const GLIDER: &[(i64, i64)] = &[(1, 0), (2, -1), (0, -2), (1, -2), (2, -2)];

pub const BLINKER: &[(i64, i64)] = &[(0, 0), (1, 0), (2, 0)];

pub const BLOCK: &[(i64, i64)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

pub const TOAD: &[(i64, i64)] = &[(1, 0), (2, 0), (3, 0), (0, -1), (1, -1), (2, -1)];

pub const BEACON: &[(i64, i64)] = &[
    (0, 0),
    (1, 0),
    (0, -1),
    (1, -1),
    (2, -2),
    (3, -2),
    (2, -3),
    (3, -3),
];

/// Vanishes completely after 130 generations.
pub const DIEHARD: &[(i64, i64)] = &[(6, 1), (0, 0), (1, 0), (1, -1), (5, -1), (6, -1), (7, -1)];

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "r-pentomino",
        cells: R_PENTOMINO,
    },
    Pattern {
        name: "acorn",
        cells: ACORN,
    },
    Pattern {
        name: "glider",
        cells: GLIDER,
    },
    Pattern {
        name: "blinker",
        cells: BLINKER,
    },
    Pattern {
        name: "block",
        cells: BLOCK,
    },
    Pattern {
        name: "toad",
        cells: TOAD,
    },
    Pattern {
        name: "beacon",
        cells: BEACON,
    },
    Pattern {
        name: "diehard",
        cells: DIEHARD,
    },
];

/// Look up a built-in pattern by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// A `side` x `side` square of random cells anchored at the origin, each
/// alive with probability `density`. The same seed always yields the same
/// soup.
pub fn random_soup(side: i64, density: f64, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density.clamp(0.0, 1.0)) as u64;
    let mut cells = Vec::new();
    for y in 0..side {
        for x in 0..side {
            if rng.next_u64() <= threshold {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::{PATTERNS, R_PENTOMINO, find, random_soup};

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("R-Pentomino").map(|p| p.cells), Some(R_PENTOMINO));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn pattern_names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn soup_is_reproducible() {
        let a = random_soup(32, 0.3, 0xA1);
        let b = random_soup(32, 0.3, 0xA1);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.iter().all(|&(x, y)| (0..32).contains(&x) && (0..32).contains(&y)));
    }
}
