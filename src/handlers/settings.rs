use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::api;
use crate::models::AppState;
use crate::services::validate_provider_key;
use crate::templates::SettingsTemplate;

use super::helpers::{
    build_template_globals, current_session_from_jar, push_flash, render_template, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct SettingsForm {
    pub provider_key: String,
}

fn render_settings(state: &AppState, jar: &CookieJar, error: Option<String>) -> Response {
    let TemplateGlobals {
        current_user,
        backend_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(
        state,
        jar,
        SettingsTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            error,
        },
    )
}

pub async fn settings_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    render_settings(&state, &jar, None)
}

pub async fn settings_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SettingsForm>,
) -> impl IntoResponse {
    let Some(session) = current_session_from_jar(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };

    let key = form.provider_key.trim();
    if let Err(message) = validate_provider_key(key) {
        return render_settings(&state, &jar, Some(message));
    }

    match api::update_provider(
        &state.client,
        &state.backend_base_url,
        session.token.as_deref(),
        &session.email,
        key,
    )
    .await
    {
        Ok(message) => {
            push_flash(&state, &jar, message);
            Redirect::to("/deployments/new").into_response()
        }
        Err(e) => render_settings(&state, &jar, Some(e.to_string())),
    }
}
