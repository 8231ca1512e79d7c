use crate::domain::model::{ReanalysisVar, Scenario};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Drives one scenario through the pipeline stages, strictly in sequence.
/// The first stage error aborts the run; there are no retries.
pub struct NudgeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NudgeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, scenario: &Scenario) -> Result<Vec<PathBuf>> {
        let grid = scenario.grid;
        tracing::info!(
            "Starting nudging run for {} with {} GRIB file(s)",
            grid,
            scenario.grib_files.len()
        );

        tracing::info!("Converting GRIB inputs to NetCDF...");
        let pentad_files = self.pipeline.convert(&scenario.grib_files).await?;
        tracing::info!("Converted {} pentad file(s)", pentad_files.len());

        let mut forcing_files = Vec::with_capacity(ReanalysisVar::ALL.len());
        for var in ReanalysisVar::ALL {
            tracing::info!("Regridding {} onto the {} grid...", var, grid);
            forcing_files.push(self.pipeline.regrid(grid, &pentad_files, var).await?);
        }

        self.pipeline.clear_stale(grid).await?;

        for (var, files) in ReanalysisVar::ALL.iter().zip(&forcing_files) {
            tracing::info!("Generating {} nudging files...", var);
            self.pipeline.generate(grid, *var, files).await?;
        }

        let outputs = self.pipeline.verify(grid).await?;
        tracing::info!("Run complete, {} nudging file(s) in place", outputs.len());
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GridTarget;
    use crate::utils::error::NudgeError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockPipeline {
        stages: Arc<Mutex<Vec<String>>>,
        fail_stage: Option<&'static str>,
    }

    impl MockPipeline {
        fn log(&self, stage: String) -> Result<()> {
            if self.fail_stage == Some(stage.split(' ').next().unwrap_or("")) {
                return Err(NudgeError::ToolFailed {
                    tool: stage,
                    status: 2,
                });
            }
            self.stages.lock().unwrap().push(stage);
            Ok(())
        }

        fn stages(&self) -> Vec<String> {
            self.stages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Pipeline for MockPipeline {
        async fn convert(&self, grib_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
            self.log(format!("convert {}", grib_files.len()))?;
            Ok(grib_files.to_vec())
        }

        async fn regrid(
            &self,
            _grid: GridTarget,
            pentad_files: &[PathBuf],
            var: ReanalysisVar,
        ) -> Result<Vec<PathBuf>> {
            self.log(format!("regrid {}", var))?;
            Ok(pentad_files.to_vec())
        }

        async fn clear_stale(&self, _grid: GridTarget) -> Result<()> {
            self.log("clear_stale".to_string())
        }

        async fn generate(
            &self,
            _grid: GridTarget,
            var: ReanalysisVar,
            _forcing_files: &[PathBuf],
        ) -> Result<()> {
            self.log(format!("generate {}", var))
        }

        async fn verify(&self, grid: GridTarget) -> Result<Vec<PathBuf>> {
            self.log("verify".to_string())?;
            Ok(grid
                .expected_outputs()
                .iter()
                .map(|name| PathBuf::from(*name))
                .collect())
        }
    }

    fn scenario() -> Scenario {
        Scenario {
            grid: GridTarget::Nemo,
            grib_files: vec![PathBuf::from("a.grb"), PathBuf::from("b.grb")],
        }
    }

    #[tokio::test]
    async fn test_stages_run_in_order() {
        let pipeline = MockPipeline::default();
        let engine = NudgeEngine::new(pipeline.clone());

        let outputs = engine.run(&scenario()).await.unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(
            pipeline.stages(),
            vec![
                "convert 2",
                "regrid temp",
                "regrid salt",
                "clear_stale",
                "generate temp",
                "generate salt",
                "verify",
            ]
        );
    }

    #[tokio::test]
    async fn test_regrid_failure_aborts_before_generate() {
        let pipeline = MockPipeline {
            fail_stage: Some("regrid"),
            ..Default::default()
        };
        let engine = NudgeEngine::new(pipeline.clone());

        let err = engine.run(&scenario()).await.unwrap_err();

        assert!(matches!(err, NudgeError::ToolFailed { status: 2, .. }));
        assert_eq!(pipeline.stages(), vec!["convert 2"]);
    }

    #[tokio::test]
    async fn test_generate_failure_aborts_before_verify() {
        let pipeline = MockPipeline {
            fail_stage: Some("generate"),
            ..Default::default()
        };
        let engine = NudgeEngine::new(pipeline.clone());

        engine.run(&scenario()).await.unwrap_err();

        let stages = pipeline.stages();
        assert!(!stages.contains(&"verify".to_string()));
        assert_eq!(stages.last().unwrap(), "clear_stale");
    }
}
