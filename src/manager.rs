use crate::config::Config;
use crate::engine::Engine;
use crate::report::write_sample_report;
use crate::stats::{summarize_grid, summarize_sample};
use anyhow::{Context, Result};
use rmp_serde::encode;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub struct Manager {
    cfg: Config,
    engine: Engine,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(cfg_file: Option<P>, seed: Option<u64>) -> Result<Self> {
        let cfg = match cfg_file {
            Some(cfg_file) => {
                let cfg_file = cfg_file.as_ref();
                Config::from_file(cfg_file)
                    .with_context(|| format!("failed to load {cfg_file:?}"))?
            }
            None => Config::default(),
        };
        log::info!("{cfg:#?}");

        let engine = Engine::new(seed).context("failed to construct engine")?;

        Ok(Self { cfg, engine })
    }

    /// Draw the uniform sample and write its report to `out`.
    pub fn run_stats_report<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let n_points = self.cfg.report.n_points;

        let sample = self
            .engine
            .generate_uniform(n_points)
            .context("failed to generate sample")?;
        log::info!("generated {} uniform values", sample.vals().len());

        let summary = summarize_sample(&sample);
        log::debug!("{summary:?}");

        write_sample_report(out, n_points, &summary).context("failed to write sample report")?;

        Ok(())
    }

    /// Draw the normal grid, log its statistics and optionally save them.
    pub fn run_array_stats<P: AsRef<Path>>(&mut self, file: Option<P>) -> Result<()> {
        let arr = &self.cfg.array;

        let grid = self
            .engine
            .generate_normal(arr.n_rows, arr.n_cols, arr.mean, arr.std_dev)
            .context("failed to generate grid")?;
        log::info!("generated {:?} normal grid", grid.shape());

        let summary = summarize_grid(&grid);
        log::info!("{summary:?}");

        if let Some(file) = file {
            let file = file.as_ref();
            let file =
                File::create(file).with_context(|| format!("failed to create {file:?}"))?;
            let mut writer = BufWriter::new(file);
            encode::write_named(&mut writer, &summary).context("failed to serialize summary")?;
            writer.flush().context("failed to flush writer stream")?;
        }

        Ok(())
    }
}
