//! Pieces module - tetromino shape matrices and rotation
//!
//! A shape is a small rectangular 0/1 matrix (its bounding box). Rotation is a
//! pure transpose-with-column-reversal that yields a new matrix with swapped
//! dimensions; there is no kick/offset search at this layer.

use crate::types::PieceKind;

/// Largest bounding-box side among the seven tetrominoes.
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular occupancy matrix of a piece, stored in a fixed 4x4 buffer with
/// explicit width/height. Value type: every operation builds a new `Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    mask: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from 0/1 rows. All rows must have equal length.
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let width = rows[0].len();
        debug_assert!(width > 0 && width <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                mask[y][x] = v != 0;
            }
        }
        Self {
            width: width as u8,
            height: rows.len() as u8,
            mask,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is occupied. Out-of-range is empty.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.mask[y as usize][x as usize]
    }

    /// Iterate the occupied cells as (dx, dy) offsets from the piece origin.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.mask[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// 90-degree clockwise rotation: new[x][height - 1 - y] = old[y][x].
    /// Returns a new rectangular matrix with swapped dimensions.
    pub fn rotated(&self) -> Self {
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let h = self.height as usize;
        for y in 0..h {
            for x in 0..self.width as usize {
                if self.mask[y][x] {
                    mask[x][h - 1 - y] = true;
                }
            }
        }
        Self {
            width: self.height,
            height: self.width,
            mask,
        }
    }
}

/// Canonical (spawn-orientation) shape for a piece kind.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}
