// lattice.rs - Square spin lattice with periodic boundary conditions

use crate::error::IsingError;
use rand::Rng;

/// An L x L grid of +/-1 spins, stored row-major.
///
/// The grid is toroidal: neighbor lookups wrap modulo the side length, so
/// every site has exactly four neighbors. The shape is fixed at
/// construction and every cell holds exactly +1 or -1 at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    side: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// All spins +1 (cold start).
    pub fn aligned(side: usize) -> Self {
        Self {
            side,
            spins: vec![1; side * side],
        }
    }

    /// Each spin +1 or -1 with equal probability (hot start), using a
    /// caller-supplied RNG (preferred for reproducibility).
    pub fn random_with(rng: &mut impl Rng, side: usize) -> Self {
        let spins = (0..side * side)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Self { side, spins }
    }

    /// Adopt a caller-built row-major buffer.
    ///
    /// Validates the square shape and the +/-1 domain up front, so the
    /// simulation itself never has to re-check either.
    pub fn from_spins(side: usize, spins: Vec<i8>) -> Result<Self, IsingError> {
        let expected = side * side;
        if spins.len() != expected {
            return Err(IsingError::DimensionMismatch {
                side,
                expected,
                actual: spins.len(),
            });
        }
        for (index, &value) in spins.iter().enumerate() {
            if value != 1 && value != -1 {
                return Err(IsingError::InvalidSpin { index, value });
            }
        }
        Ok(Self { side, spins })
    }

    /// Side length L.
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of sites, L * L.
    #[inline(always)]
    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// Row-major view of all spins.
    #[inline(always)]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Spin at (row, col). Both indices must be in `[0, side)`.
    #[inline(always)]
    pub fn spin(&self, row: usize, col: usize) -> i8 {
        debug_assert!(row < self.side && col < self.side);
        self.spins[row * self.side + col]
    }

    /// Checked spin read.
    pub fn get(&self, row: usize, col: usize) -> Result<i8, IsingError> {
        if row >= self.side || col >= self.side {
            return Err(IsingError::IndexOutOfRange {
                row,
                col,
                side: self.side,
            });
        }
        Ok(self.spin(row, col))
    }

    /// Multiply the spin at (row, col) by -1.
    #[inline(always)]
    pub fn flip(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.side && col < self.side);
        self.spins[row * self.side + col] *= -1;
    }

    /// Sum over the four nearest neighbors of (row, col), resolved with
    /// periodic wrap-around in each direction independently. In `[-4, 4]`.
    #[inline(always)]
    pub fn neighbor_sum(&self, row: usize, col: usize) -> i32 {
        let side = self.side;
        let up = self.spin((row + side - 1) % side, col);
        let down = self.spin((row + 1) % side, col);
        let left = self.spin(row, (col + side - 1) % side);
        let right = self.spin(row, (col + 1) % side);
        (up + down + left + right) as i32
    }

    /// Mean spin, in `[-1, 1]`.
    pub fn magnetization(&self) -> f64 {
        let total: i64 = self.spins.iter().map(|&s| s as i64).sum();
        total as f64 / self.n_spins() as f64
    }
}
