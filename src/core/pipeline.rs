use crate::domain::model::{GridTarget, ReanalysisVar};
use crate::domain::ports::{ConfigProvider, Pipeline, ToolRunner};
use crate::utils::error::{NudgeError, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Stage implementations that delegate all real work to the external tools.
pub struct NudgePipeline<R: ToolRunner, C: ConfigProvider> {
    runner: R,
    config: C,
}

impl<R: ToolRunner, C: ConfigProvider> NudgePipeline<R, C> {
    pub fn new(runner: R, config: C) -> Self {
        Self { runner, config }
    }
}

fn arg(path: &Path) -> String {
    path.display().to_string()
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| NudgeError::ConfigError {
            message: format!("Input path has no file name: {}", path.display()),
        })
}

#[async_trait]
impl<R: ToolRunner, C: ConfigProvider> Pipeline for NudgePipeline<R, C> {
    async fn convert(&self, grib_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        self.runner.lookup(self.config.converter()).await?;

        // Parameter table shipped alongside the GRIB inputs.
        let grid_table = self.config.input_dir().join("godas.tab");

        let mut outfiles = Vec::with_capacity(grib_files.len());
        for inf in grib_files {
            let outf = self
                .config
                .output_dir()
                .join(format!("{}.nc", file_name(inf)?));

            let args = vec![
                "-f".to_string(),
                "nc".to_string(),
                "-t".to_string(),
                arg(&grid_table),
                "copy".to_string(),
                arg(inf),
                arg(&outf),
            ];
            self.runner.run(self.config.converter(), &args).await?;
            outfiles.push(outf);
        }

        Ok(outfiles)
    }

    async fn regrid(
        &self,
        grid: GridTarget,
        pentad_files: &[PathBuf],
        var: ReanalysisVar,
    ) -> Result<Vec<PathBuf>> {
        let regridder = arg(self.config.regridder());

        let mut outputs = Vec::with_capacity(pentad_files.len());
        for inf in pentad_files {
            let outf = self
                .config
                .output_dir()
                .join(format!("{}{}.nc", file_name(inf)?, var));

            // The regridder refuses to overwrite, so drop stale results first.
            if outf.exists() {
                fs::remove_file(&outf)?;
            }

            let args = vec![
                self.config.domain().to_string(),
                arg(inf),
                var.as_str().to_string(),
                grid.as_str().to_string(),
                arg(&outf),
            ];
            self.runner.run(&regridder, &args).await?;
            outputs.push(outf);
        }

        Ok(outputs)
    }

    async fn clear_stale(&self, grid: GridTarget) -> Result<()> {
        for name in grid.expected_outputs() {
            let path = self.config.output_dir().join(name);
            if path.exists() {
                tracing::debug!("removing stale output: {}", path.display());
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    async fn generate(
        &self,
        grid: GridTarget,
        var: ReanalysisVar,
        forcing_files: &[PathBuf],
    ) -> Result<()> {
        let mut args = vec![
            grid.as_str().to_string(),
            var.as_str().to_string(),
            "--output_dir".to_string(),
            arg(self.config.output_dir()),
            "--domain".to_string(),
            self.config.domain().to_string(),
            "--forcing_files".to_string(),
        ];
        args.extend(forcing_files.iter().map(|p| arg(p)));

        self.runner.run(&arg(self.config.makenudge()), &args).await
    }

    async fn verify(&self, grid: GridTarget) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::new();
        for name in grid.expected_outputs() {
            let path = self.config.output_dir().join(name);
            if !path.exists() {
                return Err(NudgeError::MissingOutput { path });
            }
            outputs.push(path);
        }
        Ok(outputs)
    }
}
