pub mod toml_config;

use crate::data::fetch::TEST_DATA_URL;
use crate::domain::model::GridTarget;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ocean-nudge")]
#[command(about = "Build ocean model nudging files from GODAS reanalysis data")]
pub struct CliConfig {
    /// Target model grid
    #[arg(value_enum)]
    pub grid: GridTarget,

    #[arg(long, default_value = "test_data/input")]
    pub input_dir: PathBuf,

    #[arg(long, default_value = "test_data/output")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "cdo")]
    pub converter: String,

    #[arg(long, default_value = "regrid_simple.py")]
    pub regridder: PathBuf,

    #[arg(long, default_value = "makenudge.py")]
    pub makenudge: PathBuf,

    /// Reanalysis domain name passed to the regridder and generator
    #[arg(long, default_value = "GODAS")]
    pub domain: String,

    /// Only process the first GRIB input file
    #[arg(long)]
    pub minimal: bool,

    /// Download the sample dataset if it is not already present
    #[arg(long)]
    pub fetch: bool,

    /// Directory the sample dataset is downloaded and extracted into
    #[arg(long, default_value = ".")]
    pub data_root: PathBuf,

    #[arg(long, default_value = TEST_DATA_URL)]
    pub data_url: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Load settings from a TOML file instead of CLI flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn converter(&self) -> &str {
        &self.converter
    }

    fn regridder(&self) -> &Path {
        &self.regridder
    }

    fn makenudge(&self) -> &Path {
        &self.makenudge
    }

    fn domain(&self) -> &str {
        &self.domain
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_non_empty_string("converter", &self.converter)?;
        validate_non_empty_string("domain", &self.domain)?;
        validate_url("data_url", &self.data_url)?;
        Ok(())
    }
}
