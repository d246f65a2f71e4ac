use crate::models::review::CreateReviewRequest;

pub fn create_review_request(
    show: Option<&str>,
    rating: Option<i64>,
    notes: Option<&str>,
) -> CreateReviewRequest {
    CreateReviewRequest {
        show: show.map(str::to_string),
        rating,
        notes: notes.map(str::to_string),
    }
}

pub fn sample_config_json() -> String {
    serde_json::json!({
        "store": {
            "base_id": "appTEST",
            "table_id": "tblTEST",
            "api_key": "SR_STORE_API_KEY"
        }
    })
    .to_string()
}
