//! Shape module - piece templates and pure rotation
//!
//! Each of the 7 kinds maps to an immutable bounding-box boolean matrix
//! (rows and cols both <= 4). Rotation produces a new matrix by transposing
//! and row-reversing (a 90-degree clockwise turn); it never mutates a
//! template and performs no validity check - placement validity is the
//! engine's job.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Cell offsets of a shape relative to its anchor, (dx, dy) = (col, row).
/// Every tetromino occupies exactly 4 cells.
pub type ShapeOffsets = ArrayVec<(i8, i8), 4>;

/// The 7 canonical templates, one row-list per kind.
const I_TEMPLATE: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_TEMPLATE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const S_TEMPLATE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const Z_TEMPLATE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// A shape's occupied-cell matrix within its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; 4]; 4],
}

impl ShapeMatrix {
    /// The canonical (unrotated) template for a piece kind.
    pub fn template(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(I_TEMPLATE),
            ShapeKind::O => Self::from_rows(O_TEMPLATE),
            ShapeKind::T => Self::from_rows(T_TEMPLATE),
            ShapeKind::L => Self::from_rows(L_TEMPLATE),
            ShapeKind::J => Self::from_rows(J_TEMPLATE),
            ShapeKind::S => Self::from_rows(S_TEMPLATE),
            ShapeKind::Z => Self::from_rows(Z_TEMPLATE),
        }
    }

    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= 4);
        let mut bits = [[false; 4]; 4];
        for (r, row) in rows.iter().enumerate() {
            debug_assert!(!row.is_empty() && row.len() <= 4);
            for (c, v) in row.iter().enumerate() {
                bits[r][c] = *v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            bits,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied. Out-of-box cells are not.
    pub fn is_set(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.bits[row as usize][col as usize]
    }

    /// Rotate 90 degrees clockwise: transpose, then reverse each row.
    ///
    /// Pure function of the matrix, independent of board position.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut bits = [[false; 4]; 4];
        for r in 0..cols {
            for c in 0..rows {
                bits[r][c] = self.bits[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Occupied cells as anchor-relative offsets, row-major order.
    pub fn offsets(&self) -> ShapeOffsets {
        let mut out = ShapeOffsets::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.bits[r as usize][c as usize] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(
                ShapeMatrix::template(kind).offsets().len(),
                4,
                "{} template",
                kind.as_str()
            );
        }
    }

    #[test]
    fn test_i_template_is_flat() {
        let i = ShapeMatrix::template(ShapeKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));
        assert_eq!(&i.offsets()[..], &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let vertical = ShapeMatrix::template(ShapeKind::I).rotated();
        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        assert_eq!(&vertical.offsets()[..], &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_rotate_o_is_invariant() {
        let o = ShapeMatrix::template(ShapeKind::O);
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn test_rotate_t_cycle() {
        let t = ShapeMatrix::template(ShapeKind::T);
        let east = t.rotated();
        assert_eq!((east.rows(), east.cols()), (3, 2));
        // T pointing left after one clockwise turn.
        assert_eq!(&east.offsets()[..], &[(1, 0), (0, 1), (1, 1), (1, 2)]);
        assert_ne!(east, t);
    }

    #[test]
    fn test_four_rotations_return_to_template() {
        for kind in ShapeKind::ALL {
            let template = ShapeMatrix::template(kind);
            let mut shape = template;
            for _ in 0..4 {
                shape = shape.rotated();
            }
            assert_eq!(shape, template, "{} after 4 rotations", kind.as_str());
        }
    }

    #[test]
    fn test_i_bounding_shape_period_two() {
        let i = ShapeMatrix::template(ShapeKind::I);
        assert_eq!(i.rotated().rotated(), i);
    }

    #[test]
    fn test_rotation_does_not_mutate_source() {
        let s = ShapeMatrix::template(ShapeKind::S);
        let copy = s;
        let _ = s.rotated();
        assert_eq!(s, copy);
    }
}
