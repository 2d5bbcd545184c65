mod smartsheet_client;

pub use smartsheet_client::{DEFAULT_SMARTSHEET_BASE_URL, SmartsheetClient};
