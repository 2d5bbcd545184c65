use std::sync::Arc;

use crate::application::ports::{AttachmentSource, FileLoader, LlmClient};
use crate::application::services::AnalysisService;
use crate::presentation::middleware::AccessGate;

pub struct AppState<S, F, L>
where
    S: AttachmentSource,
    F: FileLoader,
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<S, F, L>>,
    /// Used directly by the debug routes.
    pub attachment_source: Arc<S>,
    pub access_gate: AccessGate,
}

impl<S, F, L> Clone for AppState<S, F, L>
where
    S: AttachmentSource,
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            attachment_source: Arc::clone(&self.attachment_source),
            access_gate: self.access_gate.clone(),
        }
    }
}
