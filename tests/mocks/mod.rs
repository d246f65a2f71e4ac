use std::sync::Mutex;

use async_trait::async_trait;

use show_review_api::errors::ShowReviewError;
use show_review_api::models::review::{ListOptions, Review, ReviewRecord, SortOrder};
use show_review_api::store_client::ReviewStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    AddReview(Review),
    ListReviews(ListOptions),
}

/// Keeps records in memory and applies sort/limit the way the remote table does.
pub struct InMemoryReviewStore {
    records: Mutex<Vec<ReviewRecord>>,
    calls: Mutex<Vec<StoreCall>>,
    failure: Option<ShowReviewError>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        let store = Self::new();
        {
            let mut records = store.records.lock().unwrap();
            for review in reviews {
                let id = format!("rec{}", records.len() + 1);
                records.push(to_record(id, review));
            }
        }
        store
    }

    pub fn failing(error: ShowReviewError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn get_calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn to_record(id: String, review: Review) -> ReviewRecord {
    ReviewRecord {
        id,
        created_time: "2024-05-01T12:00:00.000Z".to_string(),
        fields: review,
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn add_review(&self, review: &Review) -> Result<ReviewRecord, ShowReviewError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::AddReview(review.clone()));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let mut records = self.records.lock().unwrap();
        let record = to_record(format!("rec{}", records.len() + 1), review.clone());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_reviews(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<ReviewRecord>, ShowReviewError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::ListReviews(*options));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let mut records = self.records.lock().unwrap().clone();
        match options.sort {
            Some(SortOrder::Asc) => records.sort_by_key(|r| r.fields.rating),
            Some(SortOrder::Desc) => records.sort_by(|a, b| b.fields.rating.cmp(&a.fields.rating)),
            None => {}
        }
        records.truncate(options.max_records);
        Ok(records)
    }
}
