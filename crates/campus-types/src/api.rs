use serde::{Deserialize, Serialize};

// -- Shared --

/// Body of every plain acknowledgement (`{"message": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every handler error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// -- ID cards --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdCardUploadResponse {
    pub message: String,
    pub qr_link: String,
    pub qr_image: String,
}

/// Profile returned by a successful secure view. Never carries the digest
/// or the stored file paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCardProfile {
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub year: String,
    pub college_name: String,
    pub college_contact: String,
}

// -- Connect --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorMatch {
    pub name: String,
    pub contact: String,
    pub availability: String,
}

// -- Lost & found --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostItemSummary {
    pub name: String,
    pub desc: String,
    pub img: String,
}

// -- Guidance --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub recommended_field: String,
}

/// Either a concrete recommendation or an explanatory message; the two shapes
/// are distinguished only by their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollegeRecommendation {
    Found {
        college_type: String,
        recommended_college: String,
    },
    Message {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub response: String,
}

// -- Service --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    pub message: String,
    pub docs: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
