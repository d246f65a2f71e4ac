use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::consts;
use crate::errors::ShowReviewError;
use crate::models::review::{ListOptions, Review, ReviewRecord};
use crate::models::table::{CreateRecord, RecordPage};

/// Create/query access to the table holding show reviews.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn add_review(&self, review: &Review) -> Result<ReviewRecord, ShowReviewError>;

    async fn list_reviews(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<ReviewRecord>, ShowReviewError>;
}

#[derive(Clone)]
pub struct ReviewStoreClient {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl ReviewStoreClient {
    pub fn new(client: reqwest::Client, config: &StoreConfig) -> Self {
        Self {
            client,
            table_url: format!(
                "{}/{}/{}",
                config.api_url.trim_end_matches('/'),
                config.base_id,
                config.table_id
            ),
            api_key: config.api_key.clone(),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ShowReviewError> {
        let response = request.bearer_auth(&self.api_key).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ShowReviewError::RemoteStoreError(format!(
                "status {status}, text {text}"
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ReviewStore for ReviewStoreClient {
    async fn add_review(&self, review: &Review) -> Result<ReviewRecord, ShowReviewError> {
        log::debug!("creating record in {}: {:?}", self.table_url, review);

        let request = self
            .client
            .post(&self.table_url)
            .json(&CreateRecord { fields: review });

        self.send(request).await
    }

    async fn list_reviews(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<ReviewRecord>, ShowReviewError> {
        let mut records: Vec<ReviewRecord> = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let remaining = options.max_records - records.len();
            let mut params: Vec<(&str, String)> =
                vec![("maxRecords", options.max_records.to_string())];
            if remaining > 0 {
                params.push(("pageSize", remaining.min(consts::MAX_PAGE_SIZE).to_string()));
            }
            if let Some(sort) = options.sort {
                params.push(("sort[0][field]", consts::RATING_FIELD.to_string()));
                params.push(("sort[0][direction]", sort.direction().to_string()));
            }
            if let Some(offset) = &offset {
                params.push(("offset", offset.clone()));
            }

            log::debug!("listing records from {}: {:?}", self.table_url, params);

            let page: RecordPage = self
                .send(self.client.get(&self.table_url).query(&params))
                .await?;
            let fetched = page.records.len();
            records.extend(page.records);

            match page.offset {
                Some(next) if fetched > 0 && records.len() < options.max_records => {
                    offset = Some(next)
                }
                _ => break,
            }
        }

        records.truncate(options.max_records);
        Ok(records)
    }
}
