use crate::model::{Grid, Sample};
use serde::Serialize;

/// Single-pass accumulator of mean, variance and extrema.
pub struct Accumulator {
    n_vals: usize,
    mean: f64,
    diff_2_sum: f64,
    min: f64,
    max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            n_vals: 0,
            mean: 0.0,
            diff_2_sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;

        let diff_a = val - self.mean;
        self.mean += diff_a / self.n_vals as f64;

        let diff_b = val - self.mean;
        self.diff_2_sum += diff_a * diff_b;

        self.min = self.min.min(val);
        self.max = self.max.max(val);
    }

    /// Population statistics of the values added so far.
    ///
    /// Every field is NaN if no value has been added.
    pub fn report(&self) -> GridSummary {
        if self.n_vals == 0 {
            return GridSummary {
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }
        GridSummary {
            mean: self.mean,
            std_dev: (self.diff_2_sum / self.n_vals as f64).sqrt(),
            min: self.min,
            max: self.max,
        }
    }
}

pub fn summarize_sample(sample: &Sample) -> SampleSummary {
    let vals = sample.vals();
    SampleSummary {
        mean: compute_mean(vals),
        median: compute_median(vals),
        std_dev: compute_var(vals).sqrt(),
    }
}

pub fn summarize_grid(grid: &Grid) -> GridSummary {
    let mut acc = Accumulator::new();
    for &val in grid.vals() {
        acc.add(val);
    }
    acc.report()
}

pub fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}

/// Population variance (denominator `n`).
pub fn compute_var(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    let mean = compute_mean(vals);
    vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / vals.len() as f64
}

/// Middle value of the sorted data, averaging the two middle values for even lengths.
pub fn compute_median(vals: &[f64]) -> f64 {
    let n_vals = vals.len();
    if n_vals == 0 {
        return f64::NAN;
    }
    let mut sorted = vals.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = n_vals / 2;
    if n_vals % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
