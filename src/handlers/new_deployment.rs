use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::models::{AppState, Field, IpOption, SshKeyOption};
use crate::services::{submit, FieldValue, FormState, SubmitError};
use crate::templates::new_deployment_template::{select_options_for, summary_entries_for};
use crate::templates::{DeployResultTemplate, NewDeploymentTemplate};

use super::helpers::{
    absolute_url_from_state, build_template_globals, current_session_from_jar, push_flash,
    render_template, transport_for, TemplateGlobals,
};

/// Raw field values as posted by the browser. Radios are absent until
/// picked, selects post empty strings.
#[derive(Deserialize, Default)]
pub struct NewDeploymentForm {
    pub project_name: Option<String>,
    pub cloud_provider: Option<String>,
    pub instance_type: Option<String>,
    pub application_type: Option<String>,
    pub region: Option<String>,
    pub volume_size: Option<String>,
    pub ip_option: Option<String>,
    pub ssh_key_option: Option<String>,
    pub ssh_key: Option<String>,
    /// Only present on blur-validation calls.
    pub field: Option<String>,
}

/// Replay the posted values through the form state, field by field. The
/// key text is applied before the key option so choosing "generate"
/// clears any stale key material.
fn form_state_from(form: &NewDeploymentForm) -> FormState {
    let mut state = FormState::default();
    let text = |v: &Option<String>| v.clone().map(FieldValue::Text);
    state.set_field(Field::ProjectName, text(&form.project_name));
    state.set_field(Field::CloudProvider, text(&form.cloud_provider));
    state.set_field(Field::InstanceType, text(&form.instance_type));
    state.set_field(Field::ApplicationType, text(&form.application_type));
    state.set_field(Field::Region, text(&form.region));
    state.set_field(Field::VolumeSize, text(&form.volume_size));
    state.set_field(Field::IpOption, text(&form.ip_option));
    state.set_field(Field::SshKey, text(&form.ssh_key));
    state.set_field(Field::SshKeyOption, text(&form.ssh_key_option));
    state
}

fn render_form(state: &AppState, jar: &CookieJar, form_state: &FormState) -> Response {
    let config = form_state.config();
    let (providers, instance_options, application_options) = select_options_for(config);
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
        NewDeploymentTemplate {
            current_user,
            backend_hostname,
            base_url,
            flash_messages,
            has_flash_messages,
            project_name: config.project_name.clone(),
            region: config.region.clone(),
            volume_size: config.volume_size,
            ssh_key: config.ssh_key.clone(),
            providers,
            instance_options,
            application_options,
            ip_reserved_checked: config.ip_option == Some(IpOption::Reserved),
            ip_dynamic_checked: config.ip_option == Some(IpOption::Dynamic),
            ssh_generate_checked: config.ssh_key_option == Some(SshKeyOption::Generate),
            ssh_existing_checked: config.ssh_key_option == Some(SshKeyOption::Existing),
            errors: form_state.errors().clone(),
            summary_open: form_state.summary_open(),
            summary_entries: summary_entries_for(config),
            submit_url: absolute_url_from_state(state, "/deployments/new"),
            validate_url: absolute_url_from_state(state, "/deployments/new/validate"),
        },
    )
}

pub async fn new_deployment_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    render_form(&state, &jar, &FormState::default())
}

pub async fn new_deployment_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NewDeploymentForm>,
) -> impl IntoResponse {
    let Some(session) = current_session_from_jar(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };

    let mut form_state = form_state_from(&form);
    form_state.set_deploy_clicked(true);
    form_state.set_summary_open(false);

    let transport = transport_for(&state, &session);
    match submit(&transport, form_state.config(), &session.email).await {
        Ok(response) if response.is_success() => {
            let asked_to_generate =
                form_state.config().ssh_key_option == Some(SshKeyOption::Generate);
            let (generated_private_key, generated_public_key) = match response.generated_key {
                Some(ref key) if asked_to_generate => {
                    (Some(key.private_key.clone()), Some(key.public_key.clone()))
                }
                _ => (None, None),
            };
            // Confirmed success: the draft is done.
            form_state.reset();
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
                DeployResultTemplate {
                    current_user,
                    backend_hostname,
                    base_url,
                    flash_messages,
                    has_flash_messages,
                    status_label: "Deployment started".into(),
                    message: response.message,
                    generated_private_key,
                    generated_public_key,
                    deployments_url: absolute_url_from_state(&state, "/deployments"),
                },
            )
        }
        Ok(response) => {
            // 2xx with a non-success status still leaves the form editable.
            form_state.set_deploy_clicked(false);
            push_flash(&state, &jar, response.message);
            render_form(&state, &jar, &form_state)
        }
        Err(SubmitError::Unauthenticated) => Redirect::to("/login").into_response(),
        Err(SubmitError::Validation(errors)) => {
            form_state.set_deploy_clicked(false);
            form_state.set_errors(errors);
            render_form(&state, &jar, &form_state)
        }
        Err(SubmitError::Backend(e)) => {
            form_state.set_deploy_clicked(false);
            push_flash(&state, &jar, e.to_string());
            render_form(&state, &jar, &form_state)
        }
    }
}

/// Blur-time validation endpoint: re-runs the single-field rules against
/// the posted draft and returns the message, if any.
pub async fn validate_post(
    State(_state): State<AppState>,
    Form(form): Form<NewDeploymentForm>,
) -> impl IntoResponse {
    let Some(field) = form.field.as_deref().and_then(Field::parse) else {
        return Json(json!({ "error": null }));
    };
    let mut form_state = form_state_from(&form);
    let error = form_state.validate_field(field);
    Json(json!({ "error": error }))
}
