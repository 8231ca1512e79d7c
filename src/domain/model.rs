use crate::utils::error::{NudgeError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Ocean model grid a nudging run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridTarget {
    Nemo,
    Mom,
    Mom1,
}

impl GridTarget {
    /// Name the external tools expect on their command lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            GridTarget::Nemo => "NEMO",
            GridTarget::Mom => "MOM",
            GridTarget::Mom1 => "MOM1",
        }
    }

    /// Final nudging files the generator must leave in the output directory.
    pub fn expected_outputs(&self) -> &'static [&'static str] {
        match self {
            GridTarget::Nemo => &["votemper_nomask.nc", "vosaline_nomask.nc", "resto.nc"],
            GridTarget::Mom | GridTarget::Mom1 => &[
                "temp_sponge.nc",
                "salt_sponge.nc",
                "temp_sponge_coeff.nc",
                "salt_sponge_coeff.nc",
            ],
        }
    }
}

impl fmt::Display for GridTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reanalysis field to nudge towards. Every run processes both, temp first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReanalysisVar {
    Temp,
    Salt,
}

impl ReanalysisVar {
    pub const ALL: [ReanalysisVar; 2] = [ReanalysisVar::Temp, ReanalysisVar::Salt];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReanalysisVar::Temp => "temp",
            ReanalysisVar::Salt => "salt",
        }
    }
}

impl fmt::Display for ReanalysisVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pipeline run: a grid target plus the GRIB pentad files to feed it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: GridTarget,
    pub grib_files: Vec<PathBuf>,
}

impl Scenario {
    /// Glob `*.grb` under the input directory, sorted for a deterministic order.
    pub fn discover(grid: GridTarget, input_dir: &Path) -> Result<Self> {
        let pattern = input_dir.join("*.grb");
        let mut grib_files = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            grib_files.push(entry?);
        }
        grib_files.sort();

        if grib_files.is_empty() {
            return Err(NudgeError::NoInputFiles {
                dir: input_dir.to_path_buf(),
            });
        }

        Ok(Self { grid, grib_files })
    }

    /// Keep only the first GRIB file, for quick single-pentad runs.
    pub fn minimal(mut self) -> Self {
        self.grib_files.truncate(1);
        self
    }
}
