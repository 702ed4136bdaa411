use crate::stats::SampleSummary;
use anyhow::{Context, Result};
use std::io::Write;

/// Write the human-readable sample report.
pub fn write_sample_report<W: Write>(
    out: &mut W,
    n_points: usize,
    summary: &SampleSummary,
) -> Result<()> {
    writeln!(out, "Generated {n_points} random numbers").context("failed to write report")?;
    writeln!(out, "Mean: {}", summary.mean).context("failed to write report")?;
    writeln!(out, "Median: {}", summary.median).context("failed to write report")?;
    writeln!(out, "Standard Deviation: {}", summary.std_dev).context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}
