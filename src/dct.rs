//! 2D discrete cosine transform over a square grid.
//!
//! Cosine values and normalization coefficients are precomputed once per
//! grid size; the transform itself is the separable two-pass formulation
//! (1D DCT over rows, then over columns), which matches the direct
//! definition
//!
//! ```text
//! F(u,v) = (c[u]*c[v]/4) * Σ_i Σ_j f[i][j]
//!          * cos((2i+1)/(2N)*u*π) * cos((2j+1)/(2N)*v*π)
//! ```
//!
//! within floating-point tolerance at O(N³) instead of O(N⁴).

use std::f64::consts::PI;

/// Precomputed DCT tables for an N×N grid.
///
/// `cos[u * n + i] = cos((2i+1)/(2N) * u * π)`, `coeff[0] = 1/√2` and
/// `coeff[u>0] = 1`. Immutable after construction and safe to share across
/// threads.
pub struct CosTable {
    n: usize,
    cos: Vec<f64>,
    coeff: Vec<f64>,
}

impl CosTable {
    pub fn new(n: usize) -> Self {
        let mut cos = vec![0.0; n * n];
        let mut coeff = vec![1.0; n];
        coeff[0] = 1.0 / 2.0_f64.sqrt();
        for u in 0..n {
            for i in 0..n {
                cos[u * n + i] = ((2 * i + 1) as f64 / (2.0 * n as f64) * u as f64 * PI).cos();
            }
        }
        Self { n, cos, coeff }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Forward 2D DCT of a row-major N×N grid.
    ///
    /// The row pass folds in `c[v]/2` and the column pass `c[u]/2`, so the
    /// composition carries the full `c[u]*c[v]/4` normalization.
    pub fn transform(&self, grid: &[f64]) -> Vec<f64> {
        let n = self.n;
        debug_assert_eq!(grid.len(), n * n);

        // Row pass: temp[i][v] = c[v]/2 * Σ_j grid[i][j] * cos[v][j]
        let mut temp = vec![0.0f64; n * n];
        for i in 0..n {
            let row = &grid[i * n..(i + 1) * n];
            for v in 0..n {
                let basis = &self.cos[v * n..(v + 1) * n];
                let mut sum = 0.0;
                for j in 0..n {
                    sum += row[j] * basis[j];
                }
                temp[i * n + v] = self.coeff[v] / 2.0 * sum;
            }
        }

        // Column pass: out[u][v] = c[u]/2 * Σ_i temp[i][v] * cos[u][i]
        let mut out = vec![0.0f64; n * n];
        for u in 0..n {
            let basis = &self.cos[u * n..(u + 1) * n];
            for v in 0..n {
                let mut sum = 0.0;
                for i in 0..n {
                    sum += temp[i * n + v] * basis[i];
                }
                out[u * n + v] = self.coeff[u] / 2.0 * sum;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct O(N⁴) evaluation of the definition, as a reference.
    fn dct_direct(grid: &[f64], n: usize) -> Vec<f64> {
        let mut coeff = vec![1.0; n];
        coeff[0] = 1.0 / 2.0_f64.sqrt();
        let mut out = vec![0.0f64; n * n];
        for u in 0..n {
            for v in 0..n {
                let mut sum = 0.0;
                for i in 0..n {
                    for j in 0..n {
                        sum += grid[i * n + j]
                            * ((2 * i + 1) as f64 / (2.0 * n as f64) * u as f64 * PI).cos()
                            * ((2 * j + 1) as f64 / (2.0 * n as f64) * v as f64 * PI).cos();
                    }
                }
                out[u * n + v] = coeff[u] * coeff[v] / 4.0 * sum;
            }
        }
        out
    }

    #[test]
    fn separable_matches_direct_definition() {
        let n = 8;
        // Deterministic non-trivial grid.
        let grid: Vec<f64> = (0..n * n)
            .map(|i| ((i * 31 + 17) % 256) as f64)
            .collect();

        let fast = CosTable::new(n).transform(&grid);
        let direct = dct_direct(&grid, n);
        for (a, b) in fast.iter().zip(&direct) {
            assert!((a - b).abs() < 1e-8, "fast={a}, direct={b}");
        }
    }

    #[test]
    fn flat_grid_concentrates_in_dc() {
        let n = 32;
        let value = 100.0;
        let grid = vec![value; n * n];
        let out = CosTable::new(n).transform(&grid);

        // F(0,0) = (1/8) * value * N² for a constant grid.
        let expected_dc = value * (n * n) as f64 / 8.0;
        assert!((out[0] - expected_dc).abs() < 1e-6);
        for (idx, &f) in out.iter().enumerate().skip(1) {
            assert!(f.abs() < 1e-6, "AC coefficient {idx} = {f}");
        }
    }

    #[test]
    fn single_basis_function_produces_a_spike() {
        let n = 8;
        let u = 3;
        let grid: Vec<f64> = (0..n)
            .flat_map(|i| {
                let value = ((2 * i + 1) as f64 / (2.0 * n as f64) * u as f64 * PI).cos();
                std::iter::repeat_n(value, n)
            })
            .collect();

        let out = CosTable::new(n).transform(&grid);
        // F(u,0) = (1/(4√2)) * (N/2) * N for this input; everything else ~0.
        let expected = (n * n) as f64 / (8.0 * 2.0_f64.sqrt());
        assert!((out[u * n] - expected).abs() < 1e-9);
        for (idx, &f) in out.iter().enumerate() {
            if idx != u * n {
                assert!(f.abs() < 1e-9, "coefficient {idx} = {f}");
            }
        }
    }
}
