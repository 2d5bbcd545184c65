mod analyze;
mod analyze_attachment;
mod debug;
mod error;
mod health;

pub use analyze::analyze_handler;
pub use analyze_attachment::analyze_attachment_handler;
pub use debug::{debug_attachment_handler, test_download_handler};
pub use error::{ApiError, ErrorResponse, storage_error_summary};
pub use health::health_handler;
