use std::cmp::Ordering;

use glam::{IVec3, Vec3};

use crate::constants::GRID_SIZE;

/// One occupied unit cube. `x` and `z` index the 3x3 footprint grid,
/// `y` is the layer (0 = ground).
///
/// Cells order by layer first, then x, then z, so a sorted set of cells
/// reads bottom-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// The (x, z) position of this cell, ignoring its layer.
    pub const fn footprint(self) -> Footprint {
        Footprint::new(self.x, self.z)
    }

    /// True when x and z lie on the footprint grid.
    pub const fn on_grid(self) -> bool {
        self.x < GRID_SIZE && self.z < GRID_SIZE
    }

    pub fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }

    /// World-space center of the unit cube occupying this cell.
    pub fn center(self) -> Vec3 {
        self.to_ivec3().as_vec3() + Vec3::splat(0.5)
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x, self.z).cmp(&(other.y, other.x, other.z))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An (x, z) grid position, independent of layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Footprint {
    pub x: u8,
    pub z: u8,
}

impl Footprint {
    pub const fn new(x: u8, z: u8) -> Self {
        Self { x, z }
    }

    /// Apparent depth under the fixed 315° view: `z - x`, in -2..=2.
    /// Larger values sit farther back (and higher on screen).
    pub const fn distance(self) -> i8 {
        self.z as i8 - self.x as i8
    }

    /// The cell at this footprint on layer `y`.
    pub const fn at(self, y: u8) -> Cell {
        Cell::new(self.x, y, self.z)
    }

    /// All footprints of the grid, x outer and z inner.
    pub fn all() -> impl Iterator<Item = Footprint> {
        (0..GRID_SIZE).flat_map(|x| (0..GRID_SIZE).map(move |z| Footprint::new(x, z)))
    }
}

/// Named sound effects the game triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Correct,
    Wrong,
    Victory,
}

impl SoundKind {
    pub fn name(self) -> &'static str {
        match self {
            SoundKind::Correct => "correct",
            SoundKind::Wrong => "wrong",
            SoundKind::Victory => "victory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FOOTPRINT_COUNT;
    use std::collections::BTreeSet;

    #[test]
    fn test_footprint_enumeration_order() {
        let all: Vec<Footprint> = Footprint::all().collect();
        assert_eq!(all.len(), FOOTPRINT_COUNT);
        assert_eq!(all[0], Footprint::new(0, 0));
        assert_eq!(all[1], Footprint::new(0, 1));
        assert_eq!(all[3], Footprint::new(1, 0));
        assert_eq!(all[8], Footprint::new(2, 2));
    }

    #[test]
    fn test_distance_range() {
        assert_eq!(Footprint::new(0, 2).distance(), 2);
        assert_eq!(Footprint::new(2, 0).distance(), -2);
        assert_eq!(Footprint::new(1, 1).distance(), 0);
        for fp in Footprint::all() {
            assert!((-2..=2).contains(&fp.distance()));
        }
    }

    #[test]
    fn test_cells_sort_bottom_up() {
        let set: BTreeSet<Cell> = [Cell::new(0, 1, 0), Cell::new(2, 0, 2), Cell::new(1, 0, 0)]
            .into_iter()
            .collect();
        let ys: Vec<u8> = set.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 0, 1]);
        assert_eq!(set.iter().next(), Some(&Cell::new(1, 0, 0)));
    }

    #[test]
    fn test_cell_geometry() {
        let cell = Cell::new(2, 1, 0);
        assert_eq!(cell.footprint(), Footprint::new(2, 0));
        assert_eq!(cell.to_ivec3(), IVec3::new(2, 1, 0));
        assert_eq!(cell.center(), Vec3::new(2.5, 1.5, 0.5));
        assert!(cell.on_grid());
        assert!(!Cell::new(3, 0, 0).on_grid());
    }
}
