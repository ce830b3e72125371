//! Where per-stand schedule datasets come from.

use std::future::Future;
use std::path::PathBuf;

use crate::domain::{ScheduleError, ScheduleRecord, StandCode};

use super::http::HttpScheduleSource;

/// A store of per-stand schedule datasets.
///
/// Implementations must return [`ScheduleError::NotFound`] when the stand
/// has no dataset and [`ScheduleError::Load`] when a dataset exists but
/// cannot be read or parsed.
pub trait ScheduleSource: Send + Sync {
    fn fetch(
        &self,
        stand: &StandCode,
    ) -> impl Future<Output = Result<Vec<ScheduleRecord>, ScheduleError>> + Send;
}

/// Parse a dataset body (`[ScheduleRecord]`).
pub(crate) fn parse_dataset(
    stand: &StandCode,
    json: &str,
) -> Result<Vec<ScheduleRecord>, ScheduleError> {
    serde_json::from_str(json).map_err(|e| ScheduleError::load(stand.as_str(), e.to_string()))
}

/// Datasets stored as `<dir>/<stand>.json`.
#[derive(Debug, Clone)]
pub struct FileScheduleSource {
    dir: PathBuf,
}

impl FileScheduleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn dataset_path(&self, stand: &StandCode) -> PathBuf {
        self.dir.join(format!("{}.json", stand.as_str()))
    }
}

impl ScheduleSource for FileScheduleSource {
    async fn fetch(&self, stand: &StandCode) -> Result<Vec<ScheduleRecord>, ScheduleError> {
        let path = self.dataset_path(stand);

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScheduleError::not_found(stand.as_str()));
            }
            Err(e) => {
                return Err(ScheduleError::load(
                    stand.as_str(),
                    format!("failed to read {}: {}", path.display(), e),
                ));
            }
        };

        parse_dataset(stand, &json)
    }
}

/// The dataset source chosen at startup.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    Files(FileScheduleSource),
    Http(HttpScheduleSource),
}

impl ScheduleSource for DatasetSource {
    async fn fetch(&self, stand: &StandCode) -> Result<Vec<ScheduleRecord>, ScheduleError> {
        match self {
            DatasetSource::Files(source) => source.fetch(stand).await,
            DatasetSource::Http(source) => source.fetch(stand).await,
        }
    }
}
