//! Piece module - falling-piece shapes and the rotation transform
//!
//! A shape is a small boolean matrix with its origin at the top-left; the
//! seven canonical spawn shapes are ragged (1x4 up to 3x2), so shapes carry
//! their own dimensions instead of living in a fixed 4x4 frame. Rotation is
//! a matrix transform (read each column bottom to top), not a lookup table.

use arrayvec::ArrayVec;

use blockfall_types::ShapeKind;

/// Maximum shape edge length (the line piece, rotated, is 4 tall)
pub const MAX_SHAPE_DIM: usize = 4;

/// One row of a shape matrix
pub type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// A piece shape - rectangular boolean matrix, origin top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Build a shape from row slices (1 = filled)
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4; shapes are
    /// only ever built from the canonical tables below and from rotations.
    fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty());
        assert!(rows.iter().all(|row| row.len() == rows[0].len()));

        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect();
        Self { rows }
    }

    /// The canonical spawn shape for a kind
    pub fn canonical(kind: ShapeKind) -> Self {
        let rows: &[&[u8]] = match kind {
            ShapeKind::Square => &[&[1, 1], &[1, 1]],
            ShapeKind::Line => &[&[1, 1, 1, 1]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::L => &[&[1, 0], &[1, 0], &[1, 1]],
            ShapeKind::J => &[&[0, 1], &[0, 1], &[1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
        };
        Self::from_rows(rows)
    }

    /// Width of the shape matrix in cells
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Height of the shape matrix in cells
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at (x, y) within the matrix is filled
    pub fn at(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Iterate the filled cells as (x, y) offsets from the origin
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Count of filled cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }

    /// The shape rotated 90 degrees clockwise.
    ///
    /// Each output row is an input column read bottom to top; a w x h matrix
    /// becomes h x w. Four rotations restore the original.
    pub fn rotated(&self) -> Self {
        let mut rows = ArrayVec::new();
        for x in 0..self.width() {
            let mut row = ShapeRow::new();
            for y in (0..self.height()).rev() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}

/// The active falling piece: a shape plus its grid anchor.
///
/// The anchor is the grid position of the shape's top-left origin. Candidate
/// pieces produced by the transform engine may hold anchors that put cells
/// outside the grid; such candidates are discarded, never committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    shape: Shape,
}

impl Piece {
    /// Create a piece with its canonical spawn shape at the given anchor
    pub fn new(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            shape: Shape::canonical(kind),
        }
    }

    /// The current shape matrix
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The same piece with the anchor translated by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// The same piece with a replacement shape (used by rotation)
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self {
            shape,
            ..self.clone()
        }
    }

    /// Iterate the filled cells in grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.cells().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shapes_have_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(
                Shape::canonical(kind).filled_count(),
                4,
                "{:?} should have 4 cells",
                kind
            );
        }
    }

    #[test]
    fn test_canonical_dimensions() {
        assert_eq!(Shape::canonical(ShapeKind::Square).width(), 2);
        assert_eq!(Shape::canonical(ShapeKind::Square).height(), 2);
        assert_eq!(Shape::canonical(ShapeKind::Line).width(), 4);
        assert_eq!(Shape::canonical(ShapeKind::Line).height(), 1);
        assert_eq!(Shape::canonical(ShapeKind::L).width(), 2);
        assert_eq!(Shape::canonical(ShapeKind::L).height(), 3);
        assert_eq!(Shape::canonical(ShapeKind::T).width(), 3);
        assert_eq!(Shape::canonical(ShapeKind::T).height(), 2);
    }

    #[test]
    fn test_line_rotation_round_trip() {
        let line = Shape::canonical(ShapeKind::Line);

        let vertical = line.rotated();
        assert_eq!(vertical.width(), 1);
        assert_eq!(vertical.height(), 4);
        for y in 0..4 {
            assert!(vertical.at(0, y));
        }

        // The line is symmetric under 180 degrees.
        assert_eq!(vertical.rotated(), line);
    }

    #[test]
    fn test_four_rotations_restore_any_shape() {
        for kind in ShapeKind::ALL {
            let shape = Shape::canonical(kind);
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape, "{:?} should survive four rotations", kind);
        }
    }

    #[test]
    fn test_rotation_orientation_is_clockwise() {
        // L spawns as:
        //   #.
        //   #.
        //   ##
        // and one clockwise turn gives:
        //   ###
        //   #..
        let rotated = Shape::canonical(ShapeKind::L).rotated();
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 2);
        assert!(rotated.at(0, 0) && rotated.at(1, 0) && rotated.at(2, 0));
        assert!(rotated.at(0, 1));
        assert!(!rotated.at(1, 1) && !rotated.at(2, 1));
    }

    #[test]
    fn test_piece_cells_translated_by_anchor() {
        let piece = Piece::new(ShapeKind::Square, 4, 7);
        let mut cells: Vec<_> = piece.cells().collect();
        cells.sort();
        assert_eq!(cells, vec![(4, 7), (4, 8), (5, 7), (5, 8)]);
    }
}
