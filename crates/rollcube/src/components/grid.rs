//! Grid floor — a rectangular map of blocks and goals the cube rolls over.
//!
//! Cells are stored row-major: index = row * depth + col, where a row runs
//! along +x and a column along +z.

use crate::api::floor::Floor;

/// What sits in one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Block,
    Goal,
}

/// A finite floor. Anything outside the grid is empty.
#[derive(Debug, Clone)]
pub struct GridFloor {
    /// Number of rows (x extent).
    pub width: u32,
    /// Number of columns (z extent).
    pub depth: u32,
    /// Grid coordinates of cell (0, 0).
    pub origin: (i32, i32),
    cells: Vec<Cell>,
    completed: bool,
}

impl GridFloor {
    /// Create an empty floor.
    pub fn new(width: u32, depth: u32) -> Self {
        Self {
            width,
            depth,
            origin: (0, 0),
            cells: vec![Cell::Empty; (width * depth) as usize],
            completed: false,
        }
    }

    /// Set the grid coordinates of cell (0, 0).
    pub fn with_origin(mut self, x: i32, z: i32) -> Self {
        self.origin = (x, z);
        self
    }

    fn index(&self, x: i32, z: i32) -> Option<usize> {
        let lx = x.checked_sub(self.origin.0)?;
        let lz = z.checked_sub(self.origin.1)?;
        if lx < 0 || lz < 0 || lx >= self.width as i32 || lz >= self.depth as i32 {
            return None;
        }
        Some(lx as usize * self.depth as usize + lz as usize)
    }

    /// Cell at grid coordinates `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> Cell {
        self.index(x, z).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Set a cell. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, z: i32, cell: Cell) {
        if let Some(i) = self.index(x, z) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle of `w × d` cells starting at `(x, z)`.
    pub fn fill_rect(&mut self, x: i32, z: i32, w: u32, d: u32, cell: Cell) {
        for gx in x..x + w as i32 {
            for gz in z..z + d as i32 {
                self.set(gx, gz, cell);
            }
        }
    }

    /// Whether `(x, z)` lies inside the grid.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        self.index(x, z).is_some()
    }

    /// Whether the actor has reached the goal on this floor.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Forget a previous completion (for replays).
    pub fn reset_completion(&mut self) {
        self.completed = false;
    }

    /// Iterate over goal cells in grid coordinates.
    pub fn goals(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (ox, oz) = self.origin;
        let depth = self.depth as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Goal)
            .map(move |(i, _)| (ox + (i / depth) as i32, oz + (i % depth) as i32))
    }
}

impl Floor for GridFloor {
    fn has_block(&self, x: i32, z: i32) -> bool {
        self.get(x, z) == Cell::Block
    }

    fn has_goal(&self, x: i32, z: i32) -> bool {
        self.get(x, z) == Cell::Goal
    }

    fn complete_level(&mut self) {
        if !self.completed {
            log::info!("level complete");
        }
        self.completed = true;
    }

    fn reset(&mut self) {
        self.reset_completion();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_grid_is_empty() {
        let mut floor = GridFloor::new(2, 2);
        floor.fill_rect(0, 0, 2, 2, Cell::Block);
        assert!(floor.has_block(1, 1));
        assert!(!floor.has_block(2, 0));
        assert!(!floor.has_block(-1, 0));
        assert!(!floor.has_goal(5, 5));
    }

    #[test]
    fn origin_shifts_lookup() {
        let mut floor = GridFloor::new(3, 3).with_origin(-1, -1);
        floor.set(-1, -1, Cell::Goal);
        assert!(floor.has_goal(-1, -1));
        assert!(floor.contains(1, 1));
        assert!(!floor.contains(2, 2));
        assert_eq!(floor.goals().collect::<Vec<_>>(), vec![(-1, -1)]);
    }

    #[test]
    fn goal_is_not_a_block() {
        let mut floor = GridFloor::new(4, 4);
        floor.set(3, 1, Cell::Goal);
        assert!(!floor.has_block(3, 1));
        assert!(floor.has_goal(3, 1));
        assert_eq!(floor.goals().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn completion_flag_resets() {
        let mut floor = GridFloor::new(1, 1);
        floor.complete_level();
        floor.complete_level();
        assert!(floor.is_completed());
        floor.reset_completion();
        assert!(!floor.is_completed());
    }
}
