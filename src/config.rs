use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Run configuration.
///
/// Every field has a default, so an empty file (or no file at all) gives
/// the standard parameters. See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parameters of the uniform sample report.
    pub report: ReportConfig,
    /// Parameters of the normal grid statistics.
    pub array: ArrayConfig,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of uniform values to draw.
    pub n_points: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { n_points: 1000 }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayConfig {
    /// Number of grid rows.
    pub n_rows: usize,
    /// Number of grid columns.
    pub n_cols: usize,
    /// Mean of the normal distribution.
    pub mean: f64,
    /// Standard deviation of the normal distribution.
    pub std_dev: f64,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            n_rows: 1000,
            n_cols: 10,
            mean: 10.0,
            std_dev: 1.0,
        }
    }
}

const MAX_N_VALS: usize = 10_000_000;

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::parse(&contents)
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.report.n_points, 1..=MAX_N_VALS).context("invalid number of points")?;

        check_num(self.array.n_rows, 1..=100_000).context("invalid number of rows")?;
        check_num(self.array.n_cols, 1..=100_000).context("invalid number of columns")?;
        let n_vals = self
            .array
            .n_rows
            .checked_mul(self.array.n_cols)
            .context("invalid number of grid values")?;
        check_num(n_vals, 1..=MAX_N_VALS).context("invalid number of grid values")?;

        if !self.array.mean.is_finite() {
            bail!("mean must be finite, but is {}", self.array.mean);
        }
        check_num(self.array.std_dev, 0.0..=1e6).context("invalid standard deviation")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
