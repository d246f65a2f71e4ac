//! Wire format of the remote table API.

use serde::{self, Deserialize, Serialize};

use super::review::{Review, ReviewRecord};

#[derive(Debug, Serialize, Clone)]
pub(crate) struct CreateRecord<'a> {
    pub(crate) fields: &'a Review,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecordPage {
    pub records: Vec<ReviewRecord>,
    /// Cursor for the next page; absent on the last one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offset: Option<String>,
}
