use crate::models::{
    ApplicationType, CloudProvider, DeploymentConfig, Field, FieldErrors, InstanceType, IpOption,
    SshKeyOption,
};
use crate::services::validation::{validate_config, validate_field};
use crate::utils::parse_optional_int;

/// A value arriving from the form layer. Select and text inputs come in as
/// text; the volume slider may come in pre-parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
}

impl FieldValue {
    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Int(_) => None,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Text(s) => parse_optional_int(Some(&s.to_string())),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Int(_) => false,
        }
    }
}

/// Holds one form instance's draft configuration and its error map.
///
/// `summary_open` mirrors the host UI's summary panel: it opens as soon as
/// any field gets content. `deploy_clicked` is the caller-owned submit
/// latch; it drops back to false on every edit so a stale submit cannot
/// reuse a previously validated state.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    config: DeploymentConfig,
    errors: FieldErrors,
    summary_open: bool,
    deploy_clicked: bool,
}

impl FormState {
    pub fn new(config: DeploymentConfig) -> Self {
        FormState { config, ..FormState::default() }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn summary_open(&self) -> bool {
        self.summary_open
    }

    pub fn deploy_clicked(&self) -> bool {
        self.deploy_clicked
    }

    pub fn set_deploy_clicked(&mut self, clicked: bool) {
        self.deploy_clicked = clicked;
    }

    pub fn set_summary_open(&mut self, open: bool) {
        self.summary_open = open;
    }

    /// Store a new field value. An absent value is rejected and ignored,
    /// so only explicit logic (the generate/existing switch) can clear a
    /// field. Storing clears the field's error and drops the submit latch;
    /// non-empty content opens the summary panel.
    pub fn set_field(&mut self, field: Field, value: Option<FieldValue>) {
        let Some(value) = value else { return };

        let stored = match field {
            Field::ProjectName => value.as_text().map(|s| {
                self.config.project_name = s.to_string();
            }),
            Field::Region => value.as_text().map(|s| {
                self.config.region = s.to_string();
            }),
            Field::SshKey => value.as_text().map(|s| {
                self.config.ssh_key = s.to_string();
            }),
            Field::CloudProvider => value.as_text().map(|s| {
                self.config.cloud_provider = CloudProvider::parse(s.trim());
            }),
            Field::InstanceType => value.as_text().map(|s| {
                self.config.instance_type = InstanceType::parse(s.trim());
            }),
            Field::ApplicationType => value.as_text().map(|s| {
                self.config.application_type = ApplicationType::parse(s.trim());
            }),
            Field::IpOption => value.as_text().map(|s| {
                self.config.ip_option = IpOption::parse(s.trim());
            }),
            Field::SshKeyOption => value.as_text().map(|s| {
                self.config.ssh_key_option = SshKeyOption::parse(s.trim());
                if self.config.ssh_key_option == Some(SshKeyOption::Generate) {
                    // Key material from a previous "existing" choice is stale.
                    self.config.ssh_key.clear();
                    self.errors.clear(Field::SshKey);
                }
            }),
            Field::VolumeSize => value.as_int().map(|n| {
                self.config.volume_size = n;
            }),
        };
        if stored.is_none() {
            return;
        }

        self.errors.clear(field);
        self.deploy_clicked = false;
        if !value.is_empty() {
            self.summary_open = true;
        }
    }

    /// Blur-time validation of a single field; the result is stored and
    /// returned.
    pub fn validate_field(&mut self, field: Field) -> Option<String> {
        let error = validate_field(field, &self.config);
        self.errors.set(field, error.clone());
        error
    }

    /// Submit-time validation of the whole configuration; the full error
    /// map is stored and returned.
    pub fn validate_all(&mut self) -> FieldErrors {
        let errors = validate_config(&self.config);
        self.errors = errors.clone();
        errors
    }

    /// Back to defaults, used only once a submission is confirmed.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}
