//! Game board state: cell grid, ship placement, hit and sink detection.

use crate::common::EngineError;
use crate::shape::ShipShape;
use core::fmt;
use rand::Rng;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Unoccupied and placeable.
    Empty,
    /// Unhit ship segment.
    Ship,
    /// Ship segment that has been struck.
    Hit,
    /// Unoccupied buffer cell next to a ship; not placeable.
    Blocked,
}

/// The cell itself plus its eight neighbors.
fn neighbors_including_self(x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
    (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
}

/// A square grid holding one player's fleet.
///
/// Invariant: once populated, every `Ship` cell belongs to exactly one placed
/// ship, and every ship is ringed by `Blocked` cells (or the map edge) on all
/// eight neighbors, so no two ships touch even diagonally.
#[derive(Clone, PartialEq, Eq)]
pub struct GameBoard {
    size: i32,
    cells: Vec<CellState>,
}

impl GameBoard {
    /// Create an empty board with the given side length.
    pub fn new(size: i32) -> Self {
        GameBoard {
            size,
            cells: vec![CellState::Empty; (size * size) as usize],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True iff `(x, y)` lies within the board.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// State of the cell at `(x, y)`, or `None` when outside the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        if self.is_inside(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    /// True iff every cell of `shape`, translated to origin `(x, y)`, is
    /// inside the board and currently `Empty`. The shape is taken with its
    /// rotation already applied.
    pub fn can_place(&self, shape: &ShipShape, x: i32, y: i32) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(dx, dy)| self.cell(x + dx, y + dy) == Some(CellState::Empty))
    }

    /// Mark every shape cell `Ship`, then mark each of its `Empty` neighbors
    /// `Blocked` to keep a one-cell buffer around the ship.
    ///
    /// Does not re-validate the position; callers go through [`can_place`]
    /// first. Skipping validation here keeps explicit test setups possible.
    ///
    /// [`can_place`]: GameBoard::can_place
    pub fn place(&mut self, shape: &ShipShape, x: i32, y: i32) {
        for &(dx, dy) in shape.cells() {
            let idx = self.index(x + dx, y + dy);
            self.cells[idx] = CellState::Ship;
        }
        for &(dx, dy) in shape.cells() {
            for (nx, ny) in neighbors_including_self(x + dx, y + dy) {
                if self.cell(nx, ny) == Some(CellState::Empty) {
                    let idx = self.index(nx, ny);
                    self.cells[idx] = CellState::Blocked;
                }
            }
        }
    }

    /// Place `shape` at a random position with a random rotation.
    ///
    /// One of the four rotations is chosen uniformly once per call, then up
    /// to `max_attempts` uniformly random origins are tried; the first that
    /// passes [`can_place`] is placed.
    ///
    /// [`can_place`]: GameBoard::can_place
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        shape: &ShipShape,
        max_attempts: u32,
    ) -> Result<(), EngineError> {
        let rotated = match rng.random_range(0..4) {
            1 => shape.rotate90(),
            2 => shape.rotate180(),
            3 => shape.rotate270(),
            _ => shape.clone(),
        };

        for _ in 0..max_attempts {
            let x = rng.random_range(0..self.size);
            let y = rng.random_range(0..self.size);
            if self.can_place(&rotated, x, y) {
                self.place(&rotated, x, y);
                return Ok(());
            }
        }
        Err(EngineError::PlacementExhausted)
    }

    /// Register a shot at `(x, y)`.
    ///
    /// Returns `true` and marks the cell `Hit` when it held an unhit ship
    /// segment. Anything else (`Empty`, `Blocked`, already `Hit`, or outside
    /// the board) counts as a miss and leaves the board unchanged.
    pub fn register_hit(&mut self, x: i32, y: i32) -> bool {
        if self.cell(x, y) == Some(CellState::Ship) {
            let idx = self.index(x, y);
            self.cells[idx] = CellState::Hit;
            true
        } else {
            false
        }
    }

    /// True iff the ship containing the hit cell at `(x, y)` is fully sunk.
    ///
    /// Returns `false` immediately unless the cell is `Hit`. Boards carry no
    /// ship-identity metadata and shapes may be non-linear, so the ship is
    /// recovered as the 8-connected component of `Hit`/`Ship` cells around
    /// `(x, y)`; it is sunk iff that component contains no `Ship` cell. The
    /// walk is an explicit-stack traversal with a visited set, so cyclic
    /// shapes and large clusters cannot blow the call stack.
    pub fn is_ship_sunk(&self, x: i32, y: i32) -> bool {
        if self.cell(x, y) != Some(CellState::Hit) {
            return false;
        }

        let mut visited = vec![false; (self.size * self.size) as usize];
        let mut stack = vec![(x, y)];
        visited[self.index(x, y)] = true;

        while let Some((cx, cy)) = stack.pop() {
            for (nx, ny) in neighbors_including_self(cx, cy) {
                match self.cell(nx, ny) {
                    Some(CellState::Ship) => return false,
                    Some(CellState::Hit) => {
                        let idx = self.index(nx, ny);
                        if !visited[idx] {
                            visited[idx] = true;
                            stack.push((nx, ny));
                        }
                    }
                    _ => {}
                }
            }
        }
        true
    }

    /// True iff no cell on the board still holds an unhit ship segment.
    pub fn all_ships_sunk(&self) -> bool {
        !self.cells.iter().any(|&c| c == CellState::Ship)
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.cells[self.index(x, y)] {
                    CellState::Empty => '~',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Blocked => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GameBoard {{ size: {} }}", self.size)?;
        fmt::Display::fmt(self, f)
    }
}
