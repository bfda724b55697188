//! Layered cube arrangements and their invariants.
//!
//! A `Structure` is a set of unique cells on the 3x3 grid. A valid structure
//! obeys the support rule: every cube above the ground sits directly on top of
//! another cube, so the footprints of each layer are a subset of the layer
//! below. `validate` walks every cell and looks for the cell underneath it.

use std::collections::BTreeSet;

use cubecount_core::types::{Cell, Footprint};
use thiserror::Error;

/// Cells that, when occupied, cover one of a cube's three view-facing sides
/// under the fixed start view: the +x side, the top, and the -z side.
const VIEW_FACING_OFFSETS: [(i32, i32, i32); 3] = [(1, 0, 0), (0, 1, 0), (0, 0, -1)];

/// Step from a cube toward the viewer along the isometric view diagonal.
const VIEW_DIAGONAL: (i32, i32, i32) = (1, 1, -1);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("structure has no cubes")]
    Empty,

    #[error("cell ({}, {}, {}) lies outside the 3x3 grid", .0.x, .0.y, .0.z)]
    OffGrid(Cell),

    #[error("cell ({}, {}, {}) has no cube beneath it", .0.x, .0.y, .0.z)]
    Unsupported(Cell),
}

/// A set of occupied cube cells. Iteration is bottom-up (layer, then x, then z).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    cells: BTreeSet<Cell>,
}

impl Structure {
    /// Build a structure from arbitrary cells. Duplicates collapse; cells off
    /// the grid are rejected. Support is not checked here (see `validate`).
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, StructureError> {
        let mut set = BTreeSet::new();
        for cell in cells {
            if !cell.on_grid() {
                return Err(StructureError::OffGrid(cell));
            }
            set.insert(cell);
        }
        Ok(Self { cells: set })
    }

    /// Stack whole layers: `layers[y]` lists the footprints occupied on layer y.
    pub(crate) fn from_layers(layers: &[Vec<Footprint>]) -> Self {
        let cells = layers
            .iter()
            .enumerate()
            .flat_map(|(y, footprints)| footprints.iter().map(move |fp| fp.at(y as u8)))
            .collect();
        Self { cells }
    }

    /// Total cube count. This is the answer the player has to find.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of occupied layers (0 for an empty structure).
    pub fn height(&self) -> u8 {
        self.cells.iter().map(|c| c.y + 1).max().unwrap_or(0)
    }

    /// Footprints occupied on layer `y`.
    pub fn layer(&self, y: u8) -> BTreeSet<Footprint> {
        self.cells
            .iter()
            .filter(|c| c.y == y)
            .map(|c| c.footprint())
            .collect()
    }

    /// Cube count per layer, ground first.
    pub fn layer_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.height() as usize];
        for cell in &self.cells {
            counts[cell.y as usize] += 1;
        }
        counts
    }

    /// Check the support invariant (and grid bounds) for every cell.
    ///
    /// Returns the first violation found walking bottom-up. Footprint
    /// containment between consecutive layers follows from support, and the
    /// per-layer footprint bound follows from set semantics on a 3x3 grid.
    pub fn validate(&self) -> Result<(), StructureError> {
        if self.cells.is_empty() {
            return Err(StructureError::Empty);
        }
        for &cell in &self.cells {
            if !cell.on_grid() {
                return Err(StructureError::OffGrid(cell));
            }
            if cell.y > 0 && !self.contains(Cell::new(cell.x, cell.y - 1, cell.z)) {
                return Err(StructureError::Unsupported(cell));
            }
        }
        Ok(())
    }

    /// Cubes that cannot be seen from the fixed start view.
    ///
    /// This is a lower bound: a cube counts as hidden when a cube sits in
    /// front of it on the view diagonal, or when all three of its view-facing
    /// sides touch other cubes. Partial covering by several cubes is not
    /// detected.
    pub fn occluded_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|&cell| self.covered_on_diagonal(cell) || self.enclosed_from_view(cell))
            .collect()
    }

    fn covered_on_diagonal(&self, cell: Cell) -> bool {
        let (dx, dy, dz) = VIEW_DIAGONAL;
        (1..).map_while(|k| self.offset(cell, dx * k, dy * k, dz * k)).any(|c| self.contains(c))
    }

    fn enclosed_from_view(&self, cell: Cell) -> bool {
        VIEW_FACING_OFFSETS.iter().all(|&(dx, dy, dz)| {
            self.offset(cell, dx, dy, dz)
                .is_some_and(|neighbor| self.contains(neighbor))
        })
    }

    /// Neighbor of `cell` by the given offset, if it lies on the grid and at
    /// or below the top layer.
    fn offset(&self, cell: Cell, dx: i32, dy: i32, dz: i32) -> Option<Cell> {
        let x = cell.x as i32 + dx;
        let y = cell.y as i32 + dy;
        let z = cell.z as i32 + dz;
        if x < 0 || z < 0 || y < 0 || y >= self.height() as i32 {
            return None;
        }
        let candidate = Cell::new(x as u8, y as u8, z as u8);
        candidate.on_grid().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(cells: &[(u8, u8, u8)]) -> Structure {
        Structure::from_cells(cells.iter().map(|&(x, y, z)| Cell::new(x, y, z)))
            .expect("cells on grid")
    }

    #[test]
    fn test_column_is_valid() {
        let s = structure(&[(1, 0, 1), (1, 1, 1), (1, 2, 1)]);
        assert_eq!(s.validate(), Ok(()));
        assert_eq!(s.height(), 3);
        assert_eq!(s.layer_counts(), vec![1, 1, 1]);
    }

    #[test]
    fn test_floating_cube_rejected() {
        let s = structure(&[(0, 0, 0), (1, 1, 1)]);
        assert_eq!(
            s.validate(),
            Err(StructureError::Unsupported(Cell::new(1, 1, 1)))
        );
    }

    #[test]
    fn test_gap_in_column_rejected() {
        let s = structure(&[(2, 0, 2), (2, 2, 2)]);
        assert_eq!(
            s.validate(),
            Err(StructureError::Unsupported(Cell::new(2, 2, 2)))
        );
    }

    #[test]
    fn test_off_grid_rejected() {
        let err = Structure::from_cells([Cell::new(0, 0, 3)]).unwrap_err();
        assert_eq!(err, StructureError::OffGrid(Cell::new(0, 0, 3)));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Structure::default().validate(), Err(StructureError::Empty));
        assert_eq!(Structure::default().height(), 0);
    }

    #[test]
    fn test_duplicates_collapse() {
        let s = structure(&[(0, 0, 0), (0, 0, 0), (1, 0, 0)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_layers_and_counts() {
        let s = Structure::from_layers(&[
            vec![Footprint::new(0, 0), Footprint::new(0, 1), Footprint::new(1, 1)],
            vec![Footprint::new(0, 1)],
        ]);
        assert_eq!(s.len(), 4);
        assert_eq!(s.layer_counts(), vec![3, 1]);
        assert!(s.layer(1).is_subset(&s.layer(0)));
        assert!(s.layer(2).is_empty());
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_single_layer_nothing_hidden() {
        // A flat layer shows the top of every cube.
        let s = Structure::from_layers(&[Footprint::all().collect()]);
        assert!(s.occluded_cells().is_empty());
    }

    #[test]
    fn test_cube_behind_diagonal_is_hidden() {
        // (1,1,0) sits in front of (0,0,1) on the view diagonal.
        let s = structure(&[(0, 0, 1), (1, 0, 0), (1, 1, 0)]);
        assert_eq!(s.occluded_cells(), vec![Cell::new(0, 0, 1)]);
    }

    #[test]
    fn test_enclosed_cube_is_hidden() {
        // (0,0,1) has cubes on its +x side, on top, and on its -z side.
        let s = structure(&[(0, 0, 1), (1, 0, 1), (0, 1, 1), (0, 0, 0)]);
        let hidden = s.occluded_cells();
        assert!(hidden.contains(&Cell::new(0, 0, 1)));
        assert!(!hidden.contains(&Cell::new(0, 1, 1)));
    }
}
