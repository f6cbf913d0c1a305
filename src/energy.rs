// energy.rs - Local and global energy for the nearest-neighbor ferromagnet

use crate::error::IsingError;
use crate::lattice::Lattice;

/// Energy change from flipping the spin at (row, col), without flipping it.
///
/// `dE = 2 * s(row, col) * sum(neighbors)` with the four neighbors wrapped
/// periodically, so for +/-1 spins the result is an even integer in
/// `[-8, 8]`. Returned as `f64` because it feeds `exp(-dE/T)` directly.
pub fn energy_change(lattice: &Lattice, row: usize, col: usize) -> Result<f64, IsingError> {
    let side = lattice.side();
    if row >= side || col >= side {
        return Err(IsingError::IndexOutOfRange { row, col, side });
    }
    Ok(energy_change_unchecked(lattice, row, col))
}

/// Unchecked form for the driver's hot loop, where the site has been drawn
/// in `[0, side)` by construction. Behavior for out-of-range indices is a
/// panic, never an out-of-bounds read.
#[inline(always)]
pub fn energy_change_unchecked(lattice: &Lattice, row: usize, col: usize) -> f64 {
    let spin = lattice.spin(row, col) as i32;
    (2 * spin * lattice.neighbor_sum(row, col)) as f64
}

/// Global energy `-sum_<ij> s_i s_j` over nearest-neighbor pairs, counting
/// each bond once via the forward (down, right) neighbors.
pub fn total_energy(lattice: &Lattice) -> f64 {
    let side = lattice.side();
    let mut total: i64 = 0;
    for row in 0..side {
        for col in 0..side {
            let s = lattice.spin(row, col) as i64;
            let down = lattice.spin((row + 1) % side, col) as i64;
            let right = lattice.spin(row, (col + 1) % side) as i64;
            total += s * (down + right);
        }
    }
    -(total as f64)
}

/// Global energy divided by the number of sites. In `[-2, 2]`.
pub fn energy_per_spin(lattice: &Lattice) -> f64 {
    total_energy(lattice) / lattice.n_spins() as f64
}
