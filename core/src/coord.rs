use serde::{Deserialize, Serialize};

use crate::*;

const SIN_30: f64 = 0.5;
const COS_30: f64 = 0.866_025_403_784_438_6;

/// The six axial deltas `(dh, dk)` with both components in `{-1, 0, 1}` and
/// `dh != dk`. The two excluded diagonals, `(1, 1)` and `(-1, -1)`, are what
/// turns the square neighborhood into a hexagonal one.
pub const NEIGHBOR_OFFSETS: [(Coord, Coord); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// Axial coordinates of one cell on the hexagonal grid.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HexCoord {
    h: Coord,
    k: Coord,
}

impl HexCoord {
    pub const fn new(h: Coord, k: Coord) -> Self {
        Self { h, k }
    }

    pub const fn h(self) -> Coord {
        self.h
    }

    pub const fn k(self) -> Coord {
        self.k
    }

    /// Whether `other` is one of the six hex neighbors of this coordinate.
    pub fn is_adjacent(self, other: HexCoord) -> bool {
        let dh = i32::from(other.h) - i32::from(self.h);
        let dk = i32::from(other.k) - i32::from(self.k);
        dh != dk && (-1..=1).contains(&dh) && (-1..=1).contains(&dk)
    }

    /// Applies `delta`, returning a value only when it stays inside the
    /// coordinate range.
    pub fn offset(self, (dh, dk): (Coord, Coord)) -> Option<HexCoord> {
        let h = self.h.checked_add(dh)?;
        let k = self.k.checked_add(dk)?;
        Some(Self { h, k })
    }

    pub fn neighbors(self) -> impl Iterator<Item = HexCoord> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&delta| self.offset(delta))
    }

    /// Canonical axial to pixel projection for cells drawn with the given
    /// diameter. Renderers position cells with this instead of redoing grid
    /// math.
    pub fn to_pixel(self, diameter: f64) -> (f64, f64) {
        let x = f64::from(self.k) * diameter * COS_30;
        let y = f64::from(self.h) * diameter + f64::from(self.k) * diameter * SIN_30;
        (x, y)
    }
}
