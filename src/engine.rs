use crate::model::{Grid, Sample};
use anyhow::{Context, Result, bail};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::{Normal, Uniform};

/// Sample generation engine.
///
/// Owns the random number generator used to draw every sample of a run.
pub struct Engine {
    rng: ChaCha12Rng,
}

impl Engine {
    /// Create a new `Engine`.
    ///
    /// With a seed the generated values are reproducible bit-for-bit,
    /// otherwise the generator is seeded from the operating system.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng().context("failed to seed from os")?,
        };
        Ok(Self { rng })
    }

    /// Draw `n_points` values uniformly from `[0, 1)`.
    pub fn generate_uniform(&mut self, n_points: usize) -> Result<Sample> {
        let dist = Uniform::new(0.0, 1.0).context("failed to construct uniform distribution")?;
        let vals = (0..n_points).map(|_| dist.sample(&mut self.rng)).collect();
        Ok(Sample::new(vals))
    }

    /// Draw a `n_rows x n_cols` grid of normally distributed values.
    pub fn generate_normal(
        &mut self,
        n_rows: usize,
        n_cols: usize,
        mean: f64,
        std_dev: f64,
    ) -> Result<Grid> {
        if !mean.is_finite() {
            bail!("mean must be finite, but is {mean}");
        }
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            bail!("standard deviation must be finite and non-negative, but is {std_dev}");
        }
        let dist = Normal::new(mean, std_dev).context("failed to construct normal distribution")?;
        let n_vals = n_rows
            .checked_mul(n_cols)
            .context("grid size overflows usize")?;
        let vals = (0..n_vals).map(|_| dist.sample(&mut self.rng)).collect();
        Grid::new(n_rows, n_cols, vals).context("failed to construct grid")
    }
}
