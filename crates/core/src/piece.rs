//! Piece module - live piece instances and their orientation matrices
//!
//! A live piece carries its own square matrix; rotating it rotates the matrix
//! in place (transpose and reverse) rather than looking up a rotation table.
//! The matrix is a fixed 4x4 array with a live `size`, so pieces are `Copy`.

use crate::shapes::{base_shape, bounding_size};
use crate::types::{Cell, PieceKind, RotateDir};

/// Largest matrix side any kind needs (the I piece).
pub const MAX_PIECE_SIZE: usize = 4;

/// Square orientation matrix of a piece
///
/// Only the top-left `size x size` block is meaningful; the rest stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    size: u8,
    cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceMatrix {
    /// Build the spawn orientation of a kind, padded to its bounding square.
    pub fn from_kind(kind: PieceKind) -> Self {
        let mut cells = [[None; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (r, row) in base_shape(kind).iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    cells[r][c] = Some(kind);
                }
            }
        }
        Self {
            size: bounding_size(kind),
            cells,
        }
    }

    /// Side of the square.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at (row, col); outside the square is empty.
    pub fn get(&self, row: u8, col: u8) -> Cell {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Rows of the live square, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// (row, col) of every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |r| {
            (0..n).filter_map(move |c| self.get(r, c).map(|_| (r, c)))
        })
    }

    /// Return a copy turned a quarter in `dir`.
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let n = self.size as usize;
        let mut cells = [[None; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for r in 0..n {
            for c in 0..n {
                match dir {
                    RotateDir::Cw => cells[c][n - 1 - r] = self.cells[r][c],
                    RotateDir::Ccw => cells[n - 1 - c][r] = self.cells[r][c],
                }
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    /// Board column of the matrix's left edge
    pub x: i8,
    /// Board row of the matrix's top edge (negative while above the board)
    pub y: i8,
}

impl Piece {
    /// Build a fresh piece for a board `cols` wide.
    ///
    /// The piece is centered horizontally and placed so only its bottom matrix
    /// row reaches row 0. Nothing is checked against the board here.
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        let matrix = PieceMatrix::from_kind(kind);
        let size = matrix.size() as i8;
        Self {
            kind,
            matrix,
            x: (cols as i8 - size).div_euclid(2),
            y: 1 - size,
        }
    }

    /// Absolute (x, y) of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c)| (self.x + c as i8, self.y + r as i8))
    }

    /// Copy moved by (dx, dy).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy carrying a different orientation at column `x`.
    pub fn with_matrix(&self, matrix: PieceMatrix, x: i8) -> Self {
        Self { matrix, x, ..*self }
    }
}
