/// Single signed axis of an axial hex coordinate.
pub type Coord = i16;

/// Index of a cell within the board's storage order.
pub type CellId = usize;

/// Count type used for cell and mine totals.
pub type CellCount = usize;
