/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub const fn total_cells((width, height): Coord2) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

pub const fn in_bounds((x, y): Coord2, (width, height): Coord2) -> bool {
    x < width && y < height
}

/// Converts coordinates into an ndarray index, x-major.
pub(crate) fn nd_index((x, y): Coord2) -> [usize; 2] {
    [x as usize, y as usize]
}

/// Maps a flat cell index in `[0, width*height)` back to coordinates,
/// following the row-by-row `y*width + x` ordering.
pub(crate) const fn coords_of(index: CellCount, width: Coord) -> Coord2 {
    let width = width as CellCount;
    ((index % width) as Coord, (index / width) as Coord)
}

const MOORE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the in-bounds Moore neighborhood of `center` on a grid of size
/// `bounds`: up to 8 cells, fewer at edges and corners.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    MOORE_OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        in_bounds((x, y), bounds).then_some((x, y))
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<_> = moore_neighbors((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(moore_neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(moore_neighbors((2, 1), (3, 3)).count(), 5);
    }

    #[test]
    fn flat_index_follows_row_major_ordering() {
        assert_eq!(coords_of(0, 5), (0, 0));
        assert_eq!(coords_of(4, 5), (4, 0));
        assert_eq!(coords_of(7, 5), (2, 1));
        assert_eq!(coords_of(24, 5), (4, 4));
    }
}
