mod analysis_service;
mod size_guard;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use size_guard::{MAX_ATTACHMENT_BYTES, SizeCheck, SizeGuard};
