use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SSH key pair generated by the backend when the request asked for one.
/// The private key is shown to the user exactly once and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedKey {
    pub private_key: String,
    pub public_key: String,
}

/// Backend acknowledgement for a submitted deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returneddata: Option<Value>,
    #[serde(default, rename = "generatedKey", skip_serializing_if = "Option::is_none")]
    pub generated_key: Option<GeneratedKey>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
