mod bot_error;
mod fetch_error;
mod scan_report;
mod scan_request;
mod token_metadata;

pub use bot_error::BotError;
pub use fetch_error::FetchError;
pub use scan_report::ScanReport;
pub use scan_request::{ScanRequest, MAX_MINT_CHARS};
pub use token_metadata::{Authority, TokenMetadata, DEFAULT_NAME, DEFAULT_SYMBOL};
