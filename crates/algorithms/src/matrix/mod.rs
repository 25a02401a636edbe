//! Square matrices over Z/26Z
//!
//! Inversion uses Gauss-Jordan elimination on the augmented matrix
//! `[M | I]`. Because 26 is not prime, a pivot must be a *unit* mod 26
//! (odd and not a multiple of 13), not merely non-zero. When no single row
//! offers a unit in the pivot column, two rows are combined first; this
//! keeps invertibility exactly equivalent to `gcd(det M, 26) = 1`.
//!
//! Determinants are reduced at every step, so no intermediate value grows
//! beyond a few thousand even for 5×5 keys.

use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use classicrypt_params::alphabet::MODULUS;

use crate::alphabet::{mod26, modulo};
use crate::error::{validate, Error, Result};
use crate::modular::{is_unit, mod_inverse};

/// An `n×n` matrix with entries in `0..=25`, stored row-major
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ModMatrix {
    n: usize,
    data: Vec<u8>,
}

impl ModMatrix {
    /// Build a matrix from rows, reducing every entry mod 26
    ///
    /// Fails if the rows do not form a non-empty square.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        validate::min_length("matrix rows", n, 1)?;

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            validate::length("matrix row", row.len(), n)?;
            data.extend(row.iter().map(|&v| mod26(v)));
        }
        Ok(Self { n, data })
    }

    /// Build an `n×n` matrix from row-major values, reducing mod 26
    pub fn from_values(values: &[i64], n: usize) -> Result<Self> {
        validate::min_length("matrix size", n, 1)?;
        validate::length("matrix values", values.len(), n * n)?;
        Ok(Self {
            n,
            data: values.iter().map(|&v| mod26(v)).collect(),
        })
    }

    /// The identity matrix
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0u8; n * n];
        for i in 0..n {
            data[i * n + i] = 1;
        }
        Self { n, data }
    }

    /// Dimension of the matrix
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry at `row`, `col`
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.n + col]
    }

    /// Copy of the entries as rows
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.data.chunks(self.n.max(1)).map(<[u8]>::to_vec).collect()
    }

    /// `M · v mod 26`, treating `v` as a column vector
    pub fn mul_vec(&self, v: &[u8]) -> Result<Vec<u8>> {
        validate::length("vector", v.len(), self.n)?;
        Ok(self
            .data
            .chunks(self.n.max(1))
            .map(|row| {
                let sum: i64 = row
                    .iter()
                    .zip(v)
                    .map(|(&m, &x)| i64::from(m) * i64::from(x))
                    .sum();
                mod26(sum)
            })
            .collect())
    }

    /// `self · other mod 26`
    pub fn mul(&self, other: &ModMatrix) -> Result<ModMatrix> {
        validate::length("matrix product", other.n, self.n)?;
        let n = self.n;
        let mut data = vec![0u8; n * n];
        for i in 0..n {
            for j in 0..n {
                let sum: i64 = (0..n)
                    .map(|k| i64::from(self.get(i, k)) * i64::from(other.get(k, j)))
                    .sum();
                data[i * n + j] = mod26(sum);
            }
        }
        Ok(ModMatrix { n, data })
    }

    /// Inverse mod 26 by Gauss-Jordan elimination
    ///
    /// Returns [`Error::Singular`] when some column has no usable pivot.
    pub fn inverse(&self) -> Result<ModMatrix> {
        let n = self.n;
        let width = 2 * n;

        // Augmented matrix [M | I]
        let mut aug: Vec<Vec<i64>> = (0..n)
            .map(|i| {
                let mut row = Vec::with_capacity(width);
                row.extend((0..n).map(|j| i64::from(self.get(i, j))));
                row.extend((0..n).map(|j| i64::from(i == j)));
                row
            })
            .collect();

        for col in 0..n {
            let pivot_row = find_pivot(&mut aug, col).ok_or(Error::Singular { size: n })?;
            aug.swap(col, pivot_row);

            let inv = mod_inverse(aug[col][col], MODULUS).ok_or(Error::Singular { size: n })?;
            for v in aug[col].iter_mut() {
                *v = modulo(*v * inv, MODULUS);
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[row][col];
                if factor == 0 {
                    continue;
                }
                for j in 0..width {
                    aug[row][j] = modulo(aug[row][j] - factor * aug[col][j], MODULUS);
                }
            }
        }

        let data = aug
            .iter()
            .flat_map(|row| row[n..].iter().map(|&v| v as u8))
            .collect();
        aug.zeroize();
        Ok(ModMatrix { n, data })
    }

    /// Whether the matrix has an inverse mod 26
    pub fn is_invertible(&self) -> bool {
        self.inverse().is_ok()
    }

    /// Determinant mod 26, by cofactor expansion with reduction at each step
    pub fn determinant(&self) -> u8 {
        let rows: Vec<Vec<i64>> = self
            .data
            .chunks(self.n.max(1))
            .map(|row| row.iter().map(|&v| i64::from(v)).collect())
            .collect();
        mod26(det_mod(&rows))
    }

    /// Draw random matrices until one is invertible mod 26
    pub fn random_invertible<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        loop {
            let candidate = Self {
                n,
                data: (0..n * n).map(|_| rng.gen_range(0..26u8)).collect(),
            };
            if candidate.is_invertible() {
                return candidate;
            }
        }
    }
}

impl core::fmt::Debug for ModMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModMatrix")
            .field("n", &self.n)
            .field("rows", &self.rows())
            .finish()
    }
}

/// Locate a row at or below `col` whose entry in `col` is a unit mod 26
///
/// If none exists, try to manufacture one by adding a multiple of another
/// candidate row. Adding rows never changes invertibility, and if the
/// column's remaining entries generate the whole ring some pair always
/// yields a unit.
fn find_pivot(aug: &mut [Vec<i64>], col: usize) -> Option<usize> {
    let n = aug.len();
    if let Some(row) = (col..n).find(|&r| is_unit(aug[r][col], MODULUS)) {
        return Some(row);
    }

    for target in col..n {
        for source in col..n {
            if source == target || aug[source][col] == 0 {
                continue;
            }
            for k in 1..MODULUS {
                if is_unit(aug[target][col] + k * aug[source][col], MODULUS) {
                    let source_row = aug[source].clone();
                    for (t, s) in aug[target].iter_mut().zip(source_row) {
                        *t = modulo(*t + k * s, MODULUS);
                    }
                    return Some(target);
                }
            }
        }
    }
    None
}

fn det_mod(rows: &[Vec<i64>]) -> i64 {
    match rows.len() {
        0 => 1,
        1 => modulo(rows[0][0], MODULUS),
        2 => modulo(rows[0][0] * rows[1][1] - rows[0][1] * rows[1][0], MODULUS),
        n => {
            let mut det = 0;
            for j in 0..n {
                if rows[0][j] == 0 {
                    continue;
                }
                let minor: Vec<Vec<i64>> = rows[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|&(c, _)| c != j)
                            .map(|(_, &v)| v)
                            .collect()
                    })
                    .collect();
                let sign = if j % 2 == 0 { 1 } else { -1 };
                det = modulo(det + sign * rows[0][j] * det_mod(&minor), MODULUS);
            }
            det
        }
    }
}
