use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, CurrentUser, Session};
use crate::services::HttpTransport;

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get("session_id").map(|c| c.value().to_string())
}

pub fn current_session_from_jar(state: &AppState, jar: &CookieJar) -> Option<Session> {
    let sid = session_id_from_jar(jar)?;
    state.session_for(&sid)
}

pub fn build_current_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let session = current_session_from_jar(state, jar)?;
    Some(CurrentUser {
        username: session.username.clone(),
        email: session.email,
    })
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(sid) = session_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&sid).unwrap_or_default()
}

pub fn push_flash(state: &AppState, jar: &CookieJar, message: impl Into<String>) {
    if let Some(sid) = session_id_from_jar(jar) {
        state
            .flash_store
            .lock()
            .unwrap()
            .entry(sid)
            .or_default()
            .push(message.into());
    }
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let current_user = build_current_user(state, jar);
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        current_user,
        backend_hostname: crate::utils::hostname_from_url(&state.backend_base_url),
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

pub fn inject_context(state: &AppState, jar: &CookieJar, mut html: String) -> Response {
    // Inject a global context object into the HTML for page scripts.
    let backend_hostname = crate::utils::hostname_from_url(&state.backend_base_url);
    let base_url = state.public_base_url.clone();
    let current_user = build_current_user(state, jar);
    let context = serde_json::json!({
        "backendHostname": backend_hostname,
        "baseUrl": base_url,
        "currentUser": current_user,
    });
    let context_str = serde_json::to_string(&context).unwrap_or_else(|_| "{}".into());
    let inject = format!(
        r#"<script>window.__APP_CONTEXT__ = {};</script></body>"#,
        context_str
    );
    html = html.replace("</body>", &inject);
    Html(html).into_response()
}

pub fn render_template<T: askama::Template>(state: &AppState, jar: &CookieJar, t: T) -> Response {
    match t.render() {
        Ok(body) => inject_context(state, jar, body),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn absolute_url_from_state(state: &AppState, path: &str) -> String {
    crate::utils::absolute_url(&state.public_base_url, path)
}

/// Production transport for the submission pipeline, credentialed with the
/// session's backend token.
pub fn transport_for(state: &AppState, session: &Session) -> HttpTransport {
    HttpTransport {
        client: state.client.clone(),
        backend_base_url: state.backend_base_url.clone(),
        token: session.token.clone(),
    }
}
