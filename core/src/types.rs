/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for clue counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Identifier the remote API uses for a category.
pub type CategoryId = u64;

/// Dollar amount shown on a hidden clue.
pub type Dollars = u32;

/// Amount shown on row 0; each following row adds the same again.
pub const DOLLAR_STEP: Dollars = 100;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Value printed on a hidden cell in `row`: `$100` for the first row, `$500` for the fifth.
pub const fn dollar_value(row: Coord) -> Dollars {
    DOLLAR_STEP * (row as Dollars + 1)
}
