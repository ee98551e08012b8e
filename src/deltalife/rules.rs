//! Cell rule evaluation for B3/S23.

use super::board::Board;
use super::change::Change;
use super::coord::Coord;

/// Live cells among the neighbors of `coord`.
#[inline]
pub fn live_neighbor_count(board: &Board, coord: Coord) -> u8 {
    coord.neighbors().filter(|&n| board.contains(n)).count() as u8
}

/// Next state of a single cell under B3/S23.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// The change a cell undergoes next generation, if any.
///
/// Two live neighbors never change a cell. Three make a dead cell live.
/// Any other count kills a live cell. A result is only produced for a real
/// transition, so callers never see a no-op change.
#[inline]
pub fn evaluate_cell(board: &Board, coord: Coord) -> Option<Change> {
    match live_neighbor_count(board, coord) {
        2 => None,
        3 => (!board.contains(coord)).then_some(Change::live(coord)),
        _ => board.contains(coord).then_some(Change::die(coord)),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate_cell, live_neighbor_count, next_state};
    use crate::deltalife::{Board, Coord, Disposition};

    fn board_for(pattern: u16) -> Board {
        let mut cells = Vec::new();
        for bit in 0..9 {
            if pattern & (1 << bit) != 0 {
                cells.push(((bit % 3) as i64 - 1, (bit / 3) as i64 - 1));
            }
        }
        Board::from_cells(cells)
    }

    #[test]
    fn evaluation_matches_rule_for_every_neighborhood() {
        let center = Coord::new(0, 0);
        for pattern in 0u16..512 {
            let board = board_for(pattern);
            let alive = board.contains(center);
            let n = live_neighbor_count(&board, center);
            assert_eq!(n as u32, (pattern & !(1 << 4)).count_ones());

            let expected_next = next_state(alive, n);
            match evaluate_cell(&board, center) {
                None => assert_eq!(alive, expected_next, "pattern {pattern:03x}"),
                Some(change) => {
                    assert_eq!(change.coord, center);
                    assert_ne!(alive, expected_next, "pattern {pattern:03x}");
                    let to_live = change.disposition == Disposition::Live;
                    assert_eq!(to_live, expected_next, "pattern {pattern:03x}");
                }
            }
        }
    }

    #[test]
    fn two_neighbors_never_change_a_cell() {
        let dead = Board::from_cells([(-1, 0), (1, 0)]);
        assert_eq!(evaluate_cell(&dead, Coord::new(0, 0)), None);
        let live = Board::from_cells([(-1, 0), (0, 0), (1, 0)]);
        assert_eq!(evaluate_cell(&live, Coord::new(0, 0)), None);
    }

    #[test]
    fn three_neighbors_keep_a_live_cell() {
        let board = Board::from_cells([(0, 0), (-1, 0), (1, 0), (0, 1)]);
        assert_eq!(evaluate_cell(&board, Coord::new(0, 0)), None);
    }
}
