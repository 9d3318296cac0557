//! Ship shapes as sets of relative cell offsets, with 90-degree rotations.

/// Relative cell positions defining a ship's footprint.
///
/// Offsets are `(dx, dy)` from an origin cell chosen at placement time.
/// Rotations return a new shape; the receiver is never mutated. No
/// connectivity validation is performed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipShape {
    cells: Vec<(i32, i32)>,
}

impl ShipShape {
    /// Create a shape from relative cell offsets.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Offsets making up this shape.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Number of cells the shape occupies.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the shape occupies no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Shape rotated 90 degrees clockwise.
    pub fn rotate90(&self) -> Self {
        Self::new(self.cells.iter().map(|&(dx, dy)| (dy, -dx)))
    }

    /// Shape rotated 180 degrees.
    pub fn rotate180(&self) -> Self {
        Self::new(self.cells.iter().map(|&(dx, dy)| (-dx, -dy)))
    }

    /// Shape rotated 270 degrees clockwise.
    pub fn rotate270(&self) -> Self {
        Self::new(self.cells.iter().map(|&(dx, dy)| (-dy, dx)))
    }
}

/// A ship shape paired with how many instances go on each board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipDefinition {
    pub shape: ShipShape,
    pub count: u32,
}

impl ShipDefinition {
    /// Create a definition placing `count` instances of `shape`.
    pub fn new(shape: ShipShape, count: u32) -> Self {
        Self { shape, count }
    }
}
