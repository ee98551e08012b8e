//! Reusable deduper for the affected-cell frontier.
//!
//! This is an open-addressed linear-probing hash set for [`Coord`] keys.
//! Slots are lazily cleared with an epoch stamp, so each generation can start
//! a fresh set without touching the full backing array.

use super::coord::{Coord, coord_hash};

const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

#[derive(Clone, Copy)]
struct Slot {
    coord: Coord,
    stamp: u32,
}

impl Slot {
    const EMPTY: Self = Self {
        coord: Coord::new(0, 0),
        stamp: 0,
    };
}

fn slots_for(keys: usize) -> usize {
    keys.saturating_mul(LOAD_DEN)
        .div_ceil(LOAD_NUM)
        .next_power_of_two()
        .max(16)
}

pub(crate) struct CoordSet {
    slots: Vec<Slot>,
    mask: usize,
    stamp: u32,
    len: usize,
}

impl CoordSet {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(cap: usize) -> Self {
        let slots = slots_for(cap);
        Self {
            slots: vec![Slot::EMPTY; slots],
            mask: slots - 1,
            stamp: 1,
            len: 0,
        }
    }

    /// Forget every key in O(1) by advancing the epoch.
    #[inline]
    pub fn begin_step(&mut self) {
        self.len = 0;
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.stamp = 1;
            for slot in &mut self.slots {
                slot.stamp = 0;
            }
        }
    }

    #[inline]
    pub fn reserve_for(&mut self, keys: usize) {
        if keys == 0 {
            return;
        }
        let needed = slots_for(keys);
        if needed > self.slots.len() {
            self.resize(needed);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn needs_grow(&self) -> bool {
        self.len * LOAD_DEN >= self.slots.len() * LOAD_NUM
    }

    fn resize(&mut self, new_slots: usize) {
        debug_assert!(new_slots.is_power_of_two());
        let old_slots = std::mem::replace(&mut self.slots, vec![Slot::EMPTY; new_slots]);
        self.mask = new_slots - 1;
        self.len = 0;

        for slot in old_slots {
            if slot.stamp == self.stamp {
                self.insert_rehash(slot.coord);
            }
        }
    }

    #[inline(always)]
    fn home(&self, coord: Coord) -> usize {
        coord_hash(coord.x, coord.y) as usize & self.mask
    }

    fn insert_rehash(&mut self, coord: Coord) {
        let mut pos = self.home(coord);
        loop {
            let slot = &mut self.slots[pos];
            if slot.stamp != self.stamp {
                *slot = Slot {
                    coord,
                    stamp: self.stamp,
                };
                self.len += 1;
                return;
            }
            pos = (pos + 1) & self.mask;
        }
    }

    /// Insert a coordinate.
    /// Returns `true` if newly inserted, `false` if it already existed.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        if self.needs_grow() {
            self.resize((self.slots.len() * 2).max(16));
        }

        let mut pos = self.home(coord);
        loop {
            let slot = &mut self.slots[pos];
            if slot.stamp != self.stamp {
                *slot = Slot {
                    coord,
                    stamp: self.stamp,
                };
                self.len += 1;
                return true;
            }
            if slot.coord == coord {
                return false;
            }
            pos = (pos + 1) & self.mask;
        }
    }

    #[cfg(test)]
    pub fn contains(&self, coord: Coord) -> bool {
        let mut pos = self.home(coord);
        loop {
            let slot = &self.slots[pos];
            if slot.stamp != self.stamp {
                return false;
            }
            if slot.coord == coord {
                return true;
            }
            pos = (pos + 1) & self.mask;
        }
    }
}

impl Default for CoordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::CoordSet;
    use crate::deltalife::Coord;

    #[test]
    fn dedups_within_step_and_resets_across_steps() {
        let mut set = CoordSet::new();
        set.begin_step();
        assert!(set.insert(Coord::new(1, 2)));
        assert!(!set.insert(Coord::new(1, 2)));
        assert!(set.insert(Coord::new(-5, 9)));
        assert_eq!(set.len(), 2);

        set.begin_step();
        assert!(!set.contains(Coord::new(1, 2)));
        assert!(set.insert(Coord::new(1, 2)));
        assert!(!set.insert(Coord::new(1, 2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn reserve_and_insert_many() {
        let mut set = CoordSet::with_capacity(8);
        set.begin_step();
        set.reserve_for(10_000);
        for i in 0..10_000i64 {
            assert!(set.insert(Coord::new(i, -i)));
        }
        for i in 0..10_000i64 {
            assert!(!set.insert(Coord::new(i, -i)));
            assert!(set.contains(Coord::new(i, -i)));
        }
    }

    #[test]
    fn grows_without_reserve() {
        let mut set = CoordSet::with_capacity(1);
        set.begin_step();
        for y in -40..40i64 {
            for x in -40..40i64 {
                assert!(set.insert(Coord::new(x, y)));
            }
        }
        assert_eq!(set.len(), 6_400);
        assert!(set.contains(Coord::new(-40, 39)));
        assert!(!set.contains(Coord::new(40, 40)));
    }

    #[test]
    fn extreme_coordinates_are_ordinary_keys() {
        let mut set = CoordSet::new();
        set.begin_step();
        assert!(set.insert(Coord::new(i64::MIN, i64::MAX)));
        assert!(set.insert(Coord::new(i64::MAX, i64::MIN)));
        assert!(!set.insert(Coord::new(i64::MIN, i64::MAX)));
    }
}
