use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::api;
use crate::models::AppState;
use crate::templates::DeploymentsTemplate;

use super::helpers::{
    absolute_url_from_state, build_template_globals, current_session_from_jar, push_flash,
    render_template, TemplateGlobals,
};

pub async fn deployments_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let session = current_session_from_jar(&state, &jar);
    let token = session.as_ref().and_then(|s| s.token.clone());
    let email = session.map(|s| s.email).unwrap_or_default();

    let (deployments, error) =
        match api::load_deployments(&state.client, &state.backend_base_url, token.as_deref(), &email)
            .await
        {
            Ok(list) => (list, None),
            Err(e) => {
                tracing::warn!(%e, "Failed to fetch deployments");
                (Vec::new(), Some("Could not load deployments".to_string()))
            }
        };

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
        DeploymentsTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            deployments,
            error,
            new_deployment_url: absolute_url_from_state(&state, "/deployments/new"),
            refresh_url: absolute_url_from_state(&state, "/deployments"),
        },
    )
}

#[derive(Deserialize)]
pub struct UndeployForm {
    pub project_id: String,
    pub project_name: String,
}

pub async fn undeploy_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UndeployForm>,
) -> impl IntoResponse {
    let Some(session) = current_session_from_jar(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };
    match api::undeploy(
        &state.client,
        &state.backend_base_url,
        session.token.as_deref(),
        &session.email,
        &form.project_id,
        &form.project_name,
    )
    .await
    {
        Ok(response) => {
            push_flash(&state, &jar, response.message);
        }
        Err(e) => {
            push_flash(&state, &jar, format!("Teardown failed: {}", e));
        }
    }
    Redirect::to("/deployments").into_response()
}
