//! Shapes module - base piece matrices
//!
//! Each kind has one rectangular 0/1 matrix in its spawn orientation.
//! Rows run top to bottom. Everything here is static and immutable.

use crate::types::PieceKind;

/// Rows of a base shape, top row first; `1` marks an occupied cell.
pub type BaseShape = &'static [&'static [u8]];

const I_SHAPE: BaseShape = &[&[1, 1, 1, 1]];
const J_SHAPE: BaseShape = &[&[1, 0, 0], &[1, 1, 1]];
const L_SHAPE: BaseShape = &[&[0, 0, 1], &[1, 1, 1]];
const O_SHAPE: BaseShape = &[&[1, 1], &[1, 1]];
const S_SHAPE: BaseShape = &[&[0, 1, 1], &[1, 1, 0]];
const T_SHAPE: BaseShape = &[&[0, 1, 0], &[1, 1, 1]];
const Z_SHAPE: BaseShape = &[&[1, 1, 0], &[0, 1, 1]];

/// Get the base matrix for a piece kind
pub fn base_shape(kind: PieceKind) -> BaseShape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Side of the square a kind rotates in: the larger base dimension.
pub fn bounding_size(kind: PieceKind) -> u8 {
    let shape = base_shape(kind);
    let height = shape.len();
    let width = shape.first().map_or(0, |row| row.len());
    height.max(width) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let count: u32 = base_shape(kind)
                .iter()
                .flat_map(|row| row.iter())
                .map(|&v| v as u32)
                .sum();
            assert_eq!(count, 4, "{:?} should have 4 minos", kind);
        }
    }

    #[test]
    fn every_shape_is_rectangular() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            let width = shape[0].len();
            assert!(shape.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn bounding_sizes() {
        assert_eq!(bounding_size(PieceKind::I), 4);
        assert_eq!(bounding_size(PieceKind::O), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(bounding_size(kind), 3);
        }
    }
}
