use crate::domain::ports::ToolRunner;
use crate::utils::error::{NudgeError, Result};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEST_DATA_URL: &str =
    "http://s3-ap-southeast-2.amazonaws.com/dp-drop/ocean-nudge/test/test_data.tar.gz";

const TARBALL_NAME: &str = "test_data.tar.gz";
const DATA_DIR_NAME: &str = "test_data";

/// Makes sure the sample GODAS dataset is available under a base directory,
/// downloading and extracting the archive when it is not.
pub struct DatasetFetcher<R: ToolRunner> {
    runner: R,
    client: Client,
    url: String,
}

impl<R: ToolRunner> DatasetFetcher<R> {
    pub fn new(runner: R) -> Self {
        Self::with_url(runner, TEST_DATA_URL)
    }

    pub fn with_url(runner: R, url: impl Into<String>) -> Self {
        Self {
            runner,
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the dataset directory, fetching it first if absent.
    pub async fn ensure(&self, base_dir: &Path) -> Result<PathBuf> {
        let data_dir = base_dir.join(DATA_DIR_NAME);
        if data_dir.exists() {
            tracing::debug!("dataset already present: {}", data_dir.display());
            return Ok(data_dir);
        }

        let tarball = base_dir.join(TARBALL_NAME);
        if !tarball.exists() {
            self.download(&tarball).await?;
        }

        tracing::info!("extracting {}", tarball.display());
        self.runner
            .run(
                "tar",
                &[
                    "zxf".to_string(),
                    tarball.display().to_string(),
                    "-C".to_string(),
                    base_dir.display().to_string(),
                ],
            )
            .await?;

        if !data_dir.exists() {
            return Err(NudgeError::MissingOutput { path: data_dir });
        }

        Ok(data_dir)
    }

    async fn download(&self, dest: &Path) -> Result<()> {
        tracing::info!("downloading {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, &bytes)?;

        tracing::debug!("wrote {} bytes to {}", bytes.len(), dest.display());
        Ok(())
    }
}
