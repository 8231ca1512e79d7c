use anyhow::Context;
use clap::Parser;
use ocean_nudge::utils::{logger, validation::Validate};
use ocean_nudge::{
    CliConfig, ConfigProvider, DatasetFetcher, FileConfig, GridTarget, NudgeEngine,
    NudgePipeline, Scenario, SystemToolRunner,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting ocean-nudge");

    if let Some(path) = config.config.take() {
        let file = FileConfig::load(&path)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        file.validate()?;
        let grid = file.grid();
        let minimal = file.minimal();
        return run(grid, minimal, file).await;
    }

    config.validate()?;

    if config.fetch {
        let fetcher = DatasetFetcher::with_url(SystemToolRunner, config.data_url.clone());
        let data_dir = fetcher.ensure(&config.data_root).await?;
        config.input_dir = data_dir.join("input");
        config.output_dir = data_dir.join("output");
    }

    let grid = config.grid;
    let minimal = config.minimal;
    run(grid, minimal, config).await
}

async fn run<C: ConfigProvider>(grid: GridTarget, minimal: bool, config: C) -> anyhow::Result<()> {
    std::fs::create_dir_all(config.output_dir())?;

    let mut scenario = Scenario::discover(grid, config.input_dir())?;
    if minimal {
        scenario = scenario.minimal();
    }

    let pipeline = NudgePipeline::new(SystemToolRunner, config);
    let engine = NudgeEngine::new(pipeline);

    match engine.run(&scenario).await {
        Ok(outputs) => {
            for path in &outputs {
                println!("{}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Nudging run failed: {}", e);
            std::process::exit(1);
        }
    }
}
