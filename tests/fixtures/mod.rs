use serde_json::{Value, json};

use show_review_api::models::review::Review;

pub fn review(show: &str, rating: i64, notes: &str) -> Review {
    Review {
        show: show.to_string(),
        rating,
        notes: notes.to_string(),
    }
}

pub fn sample_reviews() -> Vec<Review> {
    vec![
        review("Naruto", 9, "Classic"),
        review("The Office", 7, ""),
        review("Dark", 10, "Confusing in a good way"),
        review("Lost", 4, "The ending..."),
        review("Severance", 8, ""),
    ]
}

pub fn sample_record(id: &str, show: &str, rating: i64, notes: Option<&str>) -> Value {
    let mut fields = json!({"Show": show, "Rating": rating});
    if let Some(notes) = notes {
        fields["Notes"] = json!(notes);
    }
    json!({
        "id": id,
        "createdTime": "2024-05-01T12:00:00.000Z",
        "fields": fields
    })
}

pub fn sample_page(records: Vec<Value>, offset: Option<&str>) -> Value {
    match offset {
        Some(offset) => json!({"records": records, "offset": offset}),
        None => json!({"records": records}),
    }
}
