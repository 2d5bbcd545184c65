use std::time::Duration;

use crate::application::ports::FileLoaderError;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a CPU-bound parser on the blocking pool, bounded by [`EXTRACTION_TIMEOUT`].
pub(super) async fn run_blocking_extraction<F>(job: F) -> Result<String, FileLoaderError>
where
    F: FnOnce() -> Result<String, FileLoaderError> + Send + 'static,
{
    let outcome = tokio::time::timeout(EXTRACTION_TIMEOUT, tokio::task::spawn_blocking(job))
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?;

    outcome
}
