use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::api::{load_deployments, load_stats};
use crate::models::{AppState, DeploymentStats};
use crate::templates::DashboardTemplate;

use super::helpers::{
    absolute_url_from_state, build_template_globals, current_session_from_jar, render_template,
    TemplateGlobals,
};

const RECENT_LIMIT: usize = 5;

pub async fn dashboard_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let session = current_session_from_jar(&state, &jar);
    let token = session.as_ref().and_then(|s| s.token.clone());
    let email = session.map(|s| s.email).unwrap_or_default();

    // Stats are a passive refresh: on failure the tiles show zeros.
    let stats = match load_stats(&state.client, &state.backend_base_url, token.as_deref()).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!(%e, "Failed to fetch deployment stats");
            DeploymentStats::default()
        }
    };

    let (recent_deployments, deployments_error) =
        match load_deployments(&state.client, &state.backend_base_url, token.as_deref(), &email).await
        {
            Ok(mut list) => {
                list.truncate(RECENT_LIMIT);
                (list, None)
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to fetch recent deployments");
                (Vec::new(), Some("Could not load recent deployments".to_string()))
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
        DashboardTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            stats,
            recent_deployments,
            deployments_error,
            new_deployment_url: absolute_url_from_state(&state, "/deployments/new"),
        },
    )
}
