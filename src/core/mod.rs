pub mod engine;
pub mod pipeline;
pub mod tools;

pub use crate::domain::model::{GridTarget, ReanalysisVar, Scenario};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ToolRunner};
pub use crate::utils::error::Result;
