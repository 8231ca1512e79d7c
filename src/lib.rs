pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

pub use config::{toml_config::FileConfig, CliConfig};
pub use crate::core::{engine::NudgeEngine, pipeline::NudgePipeline, tools::SystemToolRunner};
pub use data::fetch::{DatasetFetcher, TEST_DATA_URL};
pub use domain::model::{GridTarget, ReanalysisVar, Scenario};
pub use domain::ports::{ConfigProvider, Pipeline, ToolRunner};
pub use utils::error::{NudgeError, Result};
