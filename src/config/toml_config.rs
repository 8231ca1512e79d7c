use crate::domain::model::GridTarget;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML alternative to CLI flags, for runs that are repeated often.
///
/// ```toml
/// [pipeline]
/// grid = "nemo"
/// domain = "GODAS"
/// minimal = false
///
/// [tools]
/// converter = "cdo"
/// regridder = "../regridder/regrid_simple.py"
/// makenudge = "../makenudge.py"
///
/// [paths]
/// input_dir = "test_data/input"
/// output_dir = "test_data/output"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub pipeline: PipelineSection,
    pub tools: ToolsSection,
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    pub grid: GridTarget,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default)]
    pub minimal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsSection {
    #[serde(default = "default_converter")]
    pub converter: String,
    pub regridder: PathBuf,
    pub makenudge: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

fn default_domain() -> String {
    "GODAS".to_string()
}

fn default_converter() -> String {
    "cdo".to_string()
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn grid(&self) -> GridTarget {
        self.pipeline.grid
    }

    pub fn minimal(&self) -> bool {
        self.pipeline.minimal
    }
}

impl ConfigProvider for FileConfig {
    fn input_dir(&self) -> &Path {
        &self.paths.input_dir
    }

    fn output_dir(&self) -> &Path {
        &self.paths.output_dir
    }

    fn converter(&self) -> &str {
        &self.tools.converter
    }

    fn regridder(&self) -> &Path {
        &self.tools.regridder
    }

    fn makenudge(&self) -> &Path {
        &self.tools.makenudge
    }

    fn domain(&self) -> &str {
        &self.pipeline.domain
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.input_dir", &self.paths.input_dir)?;
        validate_path("paths.output_dir", &self.paths.output_dir)?;
        validate_non_empty_string("tools.converter", &self.tools.converter)?;
        validate_non_empty_string("pipeline.domain", &self.pipeline.domain)?;
        Ok(())
    }
}
