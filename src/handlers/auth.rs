use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::api;
use crate::config::SESSION_COOKIE_DAYS;
use crate::models::{AppState, Session};
use crate::services::random_session_id;
use crate::templates::{LoginTemplate, SignupTemplate};

use super::helpers::{
    build_template_globals, current_session_from_jar, push_flash, render_template,
    session_id_from_jar, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn session_cookie(sid: String) -> Cookie<'static> {
    let mut cookie = Cookie::new("session_id", sid);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(time::Duration::days(SESSION_COOKIE_DAYS));
    cookie
}

fn session_from_outcome(outcome: &api::AuthOutcome, fallback_email: &str) -> Session {
    let email = outcome
        .user
        .get("email")
        .and_then(|v| v.as_str())
        .unwrap_or(fallback_email)
        .to_string();
    let username = outcome
        .user
        .get("username")
        .and_then(|v| v.as_str())
        .unwrap_or(&email)
        .to_string();
    Session { email, username, token: outcome.token.clone() }
}

pub async fn login_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_session_from_jar(&state, &jar).is_some() {
        return Redirect::to("/").into_response();
    }
    let TemplateGlobals {
        current_user,
        backend_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(
        &state,
        &jar,
        LoginTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            error: None,
            email: String::new(),
        },
    )
}

pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    match api::login(&state.client, &state.backend_base_url, form.email.trim(), &form.password).await
    {
        Ok(outcome) => {
            let session = session_from_outcome(&outcome, form.email.trim());
            let sid = random_session_id();
            state.sessions.lock().unwrap().insert(sid.clone(), session);
            (jar.add(session_cookie(sid)), Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::info!(%e, "Login rejected");
            let TemplateGlobals {
                current_user,
                backend_hostname,
                base_url,
                flash_messages,
                has_flash_messages,
            } = build_template_globals(&state, &jar);
            render_template(
                &state,
                &jar,
                LoginTemplate {
                    current_user,
                    backend_hostname,
                    base_url,
                    flash_messages,
                    has_flash_messages,
                    error: Some(e.to_string()),
                    email: form.email,
                },
            )
        }
    }
}

pub async fn signup_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_session_from_jar(&state, &jar).is_some() {
        return Redirect::to("/").into_response();
    }
    let TemplateGlobals {
        current_user,
        backend_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(
        &state,
        &jar,
        SignupTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            error: None,
            username: String::new(),
            email: String::new(),
        },
    )
}

pub async fn signup_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> impl IntoResponse {
    match api::signup(
        &state.client,
        &state.backend_base_url,
        form.username.trim(),
        form.email.trim(),
        &form.password,
    )
    .await
    {
        Ok(outcome) => {
            // The backend logs new users straight in when it issues a
            // token; otherwise they go through the login page.
            if outcome.token.is_some() {
                let session = session_from_outcome(&outcome, form.email.trim());
                let sid = random_session_id();
                state.sessions.lock().unwrap().insert(sid.clone(), session);
                return (jar.add(session_cookie(sid)), Redirect::to("/")).into_response();
            }
            Redirect::to("/login").into_response()
        }
        Err(e) => {
            tracing::info!(%e, "Signup rejected");
            let TemplateGlobals {
                current_user,
                backend_hostname,
                base_url,
                flash_messages,
                has_flash_messages,
            } = build_template_globals(&state, &jar);
            render_template(
                &state,
                &jar,
                SignupTemplate {
                    current_user,
                    backend_hostname,
                    base_url,
                    flash_messages,
                    has_flash_messages,
                    error: Some(e.to_string()),
                    username: form.username,
                    email: form.email,
                },
            )
        }
    }
}

pub async fn logout_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(sid) = session_id_from_jar(&jar) {
        let token = state.session_for(&sid).and_then(|s| s.token);
        if let Err(e) =
            api::logout(&state.client, &state.backend_base_url, token.as_deref()).await
        {
            tracing::warn!(%e, "Backend logout failed; dropping local session anyway");
        }
        state.drop_session(&sid);
    }
    let cleared = jar.remove(Cookie::new("session_id", ""));
    (cleared, Redirect::to("/login")).into_response()
}

/// Landing redirect. A stored session is re-validated against the backend
/// once per landing so a revoked token does not keep a ghost login alive.
pub async fn root_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let Some(session) = current_session_from_jar(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };
    if let Some(token) = session.token.as_deref() {
        match api::check_auth(&state.client, &state.backend_base_url, token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                if let Some(sid) = session_id_from_jar(&jar) {
                    state.drop_session(&sid);
                }
                push_flash(&state, &jar, "Your session expired, please log in again");
                return Redirect::to("/login").into_response();
            }
            Err(e) => {
                // Backend unreachable: keep the local session and let the
                // page loads surface any real failures.
                tracing::warn!(%e, "check-auth failed during landing");
            }
        }
    }
    Redirect::to("/dashboard").into_response()
}
