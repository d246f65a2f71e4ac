use std::str::FromStr;

use serde::{self, Deserialize, Serialize};

use crate::errors::ShowReviewError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capitalization {
    #[serde(rename = "UPPER")]
    Upper,
    #[serde(rename = "LOWER")]
    Lower,
    #[default]
    None,
}

static CAPITALIZATIONS: phf::Map<&'static str, Capitalization> = phf::phf_map! {
    "UPPER" => Capitalization::Upper,
    "LOWER" => Capitalization::Lower,
    "None" => Capitalization::None,
};

impl FromStr for Capitalization {
    type Err = ShowReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CAPITALIZATIONS.get(s).copied().ok_or_else(|| {
            ShowReviewError::ValidationError("Invalid capitalization value".to_string())
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UppercaseQuery {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProcessTextQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub duplication_factor: Option<i64>,
    #[serde(default)]
    pub capitalization: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UppercaseResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessTextResponse {
    pub processed_text: String,
}
