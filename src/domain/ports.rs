use crate::domain::model::{GridTarget, ReanalysisVar};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Runs external programs. Exit code 0 is success, anything else is an error.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, tool: &str, args: &[String]) -> Result<()>;

    /// Check that a tool is resolvable on PATH before committing to a run.
    async fn lookup(&self, tool: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn converter(&self) -> &str;
    fn regridder(&self) -> &Path;
    fn makenudge(&self) -> &Path;
    fn domain(&self) -> &str;
}

/// The stages of a nudging-file run, in the order the engine drives them.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// GRIB pentad files to NetCDF.
    async fn convert(&self, grib_files: &[PathBuf]) -> Result<Vec<PathBuf>>;

    /// Regrid converted pentad files onto the target model grid.
    async fn regrid(
        &self,
        grid: GridTarget,
        pentad_files: &[PathBuf],
        var: ReanalysisVar,
    ) -> Result<Vec<PathBuf>>;

    /// Remove any leftover final outputs from a previous run.
    async fn clear_stale(&self, grid: GridTarget) -> Result<()>;

    /// Synthesize the nudging files for one variable from its forcing files.
    async fn generate(
        &self,
        grid: GridTarget,
        var: ReanalysisVar,
        forcing_files: &[PathBuf],
    ) -> Result<()>;

    /// Confirm every expected final output exists and return their paths.
    async fn verify(&self, grid: GridTarget) -> Result<Vec<PathBuf>>;
}
