/// One-dimensional sample of random values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    vals: Vec<f64>,
}

impl Sample {
    pub fn new(vals: Vec<f64>) -> Self {
        Self { vals }
    }

    pub fn vals(&self) -> &[f64] {
        &self.vals
    }
}

/// Two-dimensional grid of random values, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    n_rows: usize,
    n_cols: usize,
    vals: Vec<f64>,
}

impl Grid {
    /// Create a grid from row-major values.
    ///
    /// Returns `None` if `vals` does not hold exactly `n_rows * n_cols` values.
    pub fn new(n_rows: usize, n_cols: usize, vals: Vec<f64>) -> Option<Self> {
        if vals.len() != n_rows.checked_mul(n_cols)? {
            return None;
        }
        Some(Self {
            n_rows,
            n_cols,
            vals,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn vals(&self) -> &[f64] {
        &self.vals
    }
}
