use serde::{Deserialize, Serialize};

/// One authenticated browser session. `token` is the backend-issued
/// bearer token; it is attached to every backend exchange made on this
/// session's behalf and never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub username: String,
    pub token: Option<String>,
}
