use tilde::models::{CloudProvider, DeploymentConfig, Field, IpOption, SshKeyOption};
use tilde::services::{FieldValue, FormState};

#[test]
fn test_new_starts_from_given_config() {
    let initial = DeploymentConfig { region: "fsn1".into(), ..DeploymentConfig::default() };
    let state = FormState::new(initial);
    assert_eq!(state.config().region, "fsn1");
    assert!(!state.summary_open());
    assert!(state.errors().is_empty());
}

#[test]
fn test_defaults() {
    let state = FormState::default();
    assert_eq!(state.config().volume_size, 10);
    assert_eq!(state.config().project_name, "");
    assert!(state.config().cloud_provider.is_none());
    assert!(!state.summary_open());
    assert!(!state.deploy_clicked());
}

#[test]
fn test_set_field_stores_value_and_opens_summary() {
    let mut state = FormState::default();
    state.set_field(Field::ProjectName, Some(FieldValue::Text("demo".into())));
    assert_eq!(state.config().project_name, "demo");
    assert!(state.summary_open());

    state.set_field(Field::CloudProvider, Some(FieldValue::Text("AWS".into())));
    assert_eq!(state.config().cloud_provider, Some(CloudProvider::Aws));
}

#[test]
fn test_set_field_rejects_absent_value() {
    let mut state = FormState::default();
    state.set_field(Field::ProjectName, Some(FieldValue::Text("demo".into())));
    state.set_field(Field::ProjectName, None);
    // An absent value must not clear the stored one.
    assert_eq!(state.config().project_name, "demo");
}

#[test]
fn test_empty_value_does_not_open_summary() {
    let mut state = FormState::default();
    state.set_field(Field::ProjectName, Some(FieldValue::Text("".into())));
    assert!(!state.summary_open());
    assert_eq!(state.config().project_name, "");
}

#[test]
fn test_set_field_clears_error_and_drops_submit_latch() {
    let mut state = FormState::default();
    assert!(state.validate_field(Field::ProjectName).is_some());
    assert!(state.errors().get(Field::ProjectName).is_some());

    state.set_deploy_clicked(true);
    state.set_field(Field::ProjectName, Some(FieldValue::Text("demo".into())));
    assert!(state.errors().get(Field::ProjectName).is_none());
    assert!(!state.deploy_clicked());
}

#[test]
fn test_volume_size_parses_from_text() {
    let mut state = FormState::default();
    state.set_field(Field::VolumeSize, Some(FieldValue::Text("250".into())));
    assert_eq!(state.config().volume_size, 250);

    // Unparseable input leaves the previous value in place.
    state.set_field(Field::VolumeSize, Some(FieldValue::Text("lots".into())));
    assert_eq!(state.config().volume_size, 250);

    state.set_field(Field::VolumeSize, Some(FieldValue::Int(42)));
    assert_eq!(state.config().volume_size, 42);
}

#[test]
fn test_switching_to_generate_clears_key() {
    let mut state = FormState::default();
    state.set_field(Field::SshKeyOption, Some(FieldValue::Text("existing".into())));
    state.set_field(Field::SshKey, Some(FieldValue::Text("ssh-rsa AAAA= user".into())));
    assert_eq!(state.config().ssh_key, "ssh-rsa AAAA= user");

    state.set_field(Field::SshKeyOption, Some(FieldValue::Text("generate".into())));
    assert_eq!(state.config().ssh_key_option, Some(SshKeyOption::Generate));
    assert_eq!(state.config().ssh_key, "");
    assert!(state.errors().get(Field::SshKey).is_none());
}

#[test]
fn test_ssh_key_validity_follows_current_option() {
    let mut state = FormState::default();
    state.set_field(Field::SshKey, Some(FieldValue::Text("not-a-key".into())));
    state.set_field(Field::SshKeyOption, Some(FieldValue::Text("generate".into())));
    // Option switched to generate after the key was typed: no error.
    assert_eq!(state.validate_field(Field::SshKey), None);

    state.set_field(Field::SshKeyOption, Some(FieldValue::Text("existing".into())));
    // Now the same (empty, it was cleared) key is required again.
    assert_eq!(state.validate_field(Field::SshKey), Some("SSH key is required".into()));
}

#[test]
fn test_validate_all_reports_every_problem() {
    let mut state = FormState::default();
    state.set_field(Field::ProjectName, Some(FieldValue::Text("demo".into())));
    let errors = state.validate_all();
    // Everything except project name and volume size (default 10) is missing.
    assert!(errors.get(Field::ProjectName).is_none());
    assert!(errors.get(Field::VolumeSize).is_none());
    assert!(errors.get(Field::CloudProvider).is_some());
    assert!(errors.get(Field::InstanceType).is_some());
    assert!(errors.get(Field::ApplicationType).is_some());
    assert!(errors.get(Field::Region).is_some());
    assert!(errors.get(Field::IpOption).is_some());
    assert!(errors.get(Field::SshKeyOption).is_some());
    assert_eq!(errors.len(), 6);
    // The map is stored on the state as well.
    assert_eq!(state.errors(), &errors);
}

#[test]
fn test_reset_returns_to_defaults() {
    let mut state = FormState::default();
    state.set_field(Field::ProjectName, Some(FieldValue::Text("demo".into())));
    state.set_field(Field::IpOption, Some(FieldValue::Text("reserved".into())));
    assert_eq!(state.config().ip_option, Some(IpOption::Reserved));

    state.reset();
    assert_eq!(state.config().project_name, "");
    assert!(state.config().ip_option.is_none());
    assert_eq!(state.config().volume_size, 10);
    assert!(!state.summary_open());
}
