//! A square bit grid sized at runtime.
//!
//! Cells of a `size×size` grid are packed row-major into a single unsigned
//! integer `T`, so the largest usable size depends on `T::BITS`. The board
//! keeps its ship, hit, miss and busy masks in these grids.

use core::fmt;
use core::mem;
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitGridError {
    /// Requested `size*size` exceeds the capacity of `T`.
    #[error("grid of size {size} exceeds capacity of {capacity} bits")]
    SizeTooLarge { size: usize, capacity: usize },
    /// Row or column index is outside `[0, size)`.
    #[error("index out of bounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A `size×size` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    bits: T,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty grid, failing if `size*size` does not fit into `T`.
    pub fn new(size: usize) -> Result<Self, BitGridError> {
        let capacity = Self::capacity();
        if size * size > capacity {
            return Err(BitGridError::SizeTooLarge { size, capacity });
        }
        Ok(BitGrid {
            size,
            bits: T::zero(),
        })
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears every cell.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitGridError> {
        if row >= self.size || col >= self.size {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = if self.get(r, c).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
