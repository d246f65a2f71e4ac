pub const DEFAULT_MAX_RECORDS: usize = 10;
/// Largest page the store will return for a single list call.
pub const MAX_PAGE_SIZE: usize = 100;

pub const DEFAULT_DUPLICATION_FACTOR: usize = 1;
pub const MAX_PROCESSED_TEXT_BYTES: usize = 1024 * 1024;

pub const RATING_FIELD: &str = "Rating";

pub const REVIEW_CREATED_MESSAGE: &str = "Show review added successfully.";
pub const JSON_BODY_REQUIRED_MESSAGE: &str = "Request body must be in JSON format.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Both 'show' and 'rating' are required fields.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Review store request failed.";

pub const DEFAULT_STORE_API_URL: &str = "https://api.airtable.com/v0";
pub const CONFIG_FILE_ENV: &str = "SR_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "./config.json";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;
pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 8080;
