use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::session::Session;

#[derive(Clone)]
pub struct AppState {
    /// Active browser sessions keyed by the `session_id` cookie value.
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    /// Pending flash messages keyed by session id, drained on next render.
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    pub backend_base_url: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn session_for(&self, sid: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(sid).cloned()
    }

    pub fn drop_session(&self, sid: &str) {
        self.sessions.lock().unwrap().remove(sid);
        self.flash_store.lock().unwrap().remove(sid);
    }
}
