use reqwest::Client;

use show_review_api::config::StoreConfig;
use show_review_api::store_client::ReviewStoreClient;

pub const TABLE_PATH: &str = "/v0/appTEST/tblTEST";
pub const TEST_API_KEY: &str = "test-key";
pub const AUTH_HEADER: &str = "Bearer test-key";

pub fn create_store_config(base_url: &str) -> StoreConfig {
    StoreConfig {
        api_url: format!("{}/v0", base_url),
        base_id: "appTEST".to_string(),
        table_id: "tblTEST".to_string(),
        api_key: TEST_API_KEY.to_string(),
        connect_timeout_secs: 5,
        read_timeout_secs: 5,
    }
}

pub fn create_store_client(base_url: &str) -> ReviewStoreClient {
    ReviewStoreClient::new(Client::new(), &create_store_config(base_url))
}
