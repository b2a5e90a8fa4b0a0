//! Wire types for the contact API.
//!
//! These mirror the server's request/response bodies for
//! `POST /api/contact`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Headcount bracket offered in the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Tiny,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "200+")]
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [Self::Tiny, Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "200+",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == raw.trim())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tiny => "1-10 employees",
            Self::Small => "11-50 employees",
            Self::Medium => "51-200 employees",
            Self::Large => "200+ employees",
        }
    }
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company_size: CompanySize,
    pub message: String,
}

/// Successful response of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub ok: bool,
    pub reference: Uuid,
}

/// Error response body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRejection {
    pub ok: bool,
    pub error: String,
}
