use std::str::FromStr;

use serde::{self, Deserialize, Serialize};

use crate::consts;
use crate::errors::ShowReviewError;

/// A show review as stored in the remote table. Field names follow the
/// table's column names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    #[serde(rename = "Show")]
    pub show: String,
    #[serde(rename = "Rating")]
    pub rating: i64,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: String,
    #[serde(rename = "createdTime")]
    pub created_time: String,
    pub fields: Review,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub show: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateReviewRequest {
    pub fn validate(self) -> Result<Review, ShowReviewError> {
        let show = self.show.filter(|show| !show.is_empty());
        let rating = self.rating.filter(|rating| *rating != 0);

        let (show, rating) = match (show, rating) {
            (Some(show), Some(rating)) => (show, rating),
            _ => {
                return Err(ShowReviewError::ValidationError(
                    consts::REQUIRED_FIELDS_MESSAGE.to_string(),
                ));
            }
        };

        Ok(Review {
            show,
            rating,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

static SORT_ORDERS: phf::Map<&'static str, SortOrder> = phf::phf_map! {
    "ASC" => SortOrder::Asc,
    "DESC" => SortOrder::Desc,
};

impl SortOrder {
    /// Direction keyword understood by the remote store.
    pub fn direction(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ShowReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SORT_ORDERS
            .get(s)
            .copied()
            .ok_or_else(|| ShowReviewError::ValidationError("Invalid sort value".to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListReviewsQuery {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub max_records: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub sort: Option<SortOrder>,
    pub max_records: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort: None,
            max_records: consts::DEFAULT_MAX_RECORDS,
        }
    }
}

impl ListReviewsQuery {
    pub fn validate(self) -> Result<ListOptions, ShowReviewError> {
        let sort = match self.sort.as_deref() {
            None | Some("") => None,
            Some(sort) => Some(sort.parse::<SortOrder>()?),
        };

        Ok(ListOptions {
            sort,
            max_records: self.max_records.unwrap_or(consts::DEFAULT_MAX_RECORDS),
        })
    }
}
