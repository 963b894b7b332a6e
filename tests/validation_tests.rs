use tilde::models::{
    ApplicationType, CloudProvider, DeploymentConfig, Field, InstanceType, IpOption, SshKeyOption,
};
use tilde::services::{is_valid_ssh_key, validate_config, validate_field, validate_provider_key};

fn demo_config() -> DeploymentConfig {
    DeploymentConfig {
        project_name: "demo".into(),
        cloud_provider: Some(CloudProvider::Aws),
        instance_type: Some(InstanceType::Small),
        application_type: Some(ApplicationType::Wordpress),
        region: "eu-west-1".into(),
        volume_size: 20,
        ip_option: Some(IpOption::Dynamic),
        ssh_key_option: Some(SshKeyOption::Generate),
        ssh_key: String::new(),
    }
}

#[test]
fn test_valid_config_has_no_errors() {
    let errors = validate_config(&demo_config());
    assert!(errors.is_empty(), "expected no errors, got {:?}", errors);
}

#[test]
fn test_each_missing_field_flags_only_itself() {
    let cases: Vec<(Field, DeploymentConfig)> = vec![
        (Field::ProjectName, DeploymentConfig { project_name: "".into(), ..demo_config() }),
        (Field::CloudProvider, DeploymentConfig { cloud_provider: None, ..demo_config() }),
        (Field::InstanceType, DeploymentConfig { instance_type: None, ..demo_config() }),
        (Field::ApplicationType, DeploymentConfig { application_type: None, ..demo_config() }),
        (Field::Region, DeploymentConfig { region: "   ".into(), ..demo_config() }),
        (Field::IpOption, DeploymentConfig { ip_option: None, ..demo_config() }),
        (Field::SshKeyOption, DeploymentConfig { ssh_key_option: None, ..demo_config() }),
    ];
    for (field, config) in cases {
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1, "expected one error for {:?}", field);
        assert!(errors.get(field).is_some(), "missing error for {:?}", field);
    }
}

#[test]
fn test_project_name_length_limit() {
    let config = DeploymentConfig { project_name: "x".repeat(51), ..demo_config() };
    let errors = validate_config(&config);
    assert_eq!(
        errors.get(Field::ProjectName),
        Some("Project name must be less than 50 characters")
    );

    let config = DeploymentConfig { project_name: "x".repeat(50), ..demo_config() };
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_volume_size_boundaries() {
    let config = DeploymentConfig { volume_size: 1000, ..demo_config() };
    assert!(validate_config(&config).is_empty());

    let config = DeploymentConfig { volume_size: 1001, ..demo_config() };
    assert_eq!(
        validate_config(&config).get(Field::VolumeSize),
        Some("Volume size must be less than 1000 GiB")
    );

    let config = DeploymentConfig { volume_size: 0, ..demo_config() };
    assert_eq!(
        validate_config(&config).get(Field::VolumeSize),
        Some("Volume size must be positive")
    );

    let config = DeploymentConfig { volume_size: 1, ..demo_config() };
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_ssh_key_irrelevant_unless_existing() {
    // Garbage key content is ignored while the option is "generate".
    let config = DeploymentConfig {
        ssh_key_option: Some(SshKeyOption::Generate),
        ssh_key: "not-a-key".into(),
        ..demo_config()
    };
    assert!(validate_config(&config).is_empty());
    assert_eq!(validate_field(Field::SshKey, &config), None);

    // And also while no option is picked at all.
    let config = DeploymentConfig {
        ssh_key_option: None,
        ssh_key: "not-a-key".into(),
        ..demo_config()
    };
    assert_eq!(validate_field(Field::SshKey, &config), None);
}

#[test]
fn test_existing_key_requires_content() {
    let config = DeploymentConfig {
        ssh_key_option: Some(SshKeyOption::Existing),
        ssh_key: "".into(),
        ..demo_config()
    };
    assert_eq!(validate_config(&config).get(Field::SshKey), Some("SSH key is required"));
}

#[test]
fn test_existing_key_format() {
    let config = DeploymentConfig {
        ssh_key_option: Some(SshKeyOption::Existing),
        ssh_key: "ssh-rsa AAAAB3NzaC1yc2E= user@host".into(),
        ..demo_config()
    };
    assert!(validate_config(&config).is_empty());
    assert_eq!(validate_field(Field::SshKey, &config), None);

    let config = DeploymentConfig { ssh_key: "not-a-key".into(), ..config };
    assert_eq!(
        validate_field(Field::SshKey, &config),
        Some("Must be a valid ssh-rsa key (e.g. 'ssh-rsa AAAAB3Nza...')".into())
    );
    assert!(validate_config(&config).get(Field::SshKey).is_some());
}

#[test]
fn test_existing_key_length_limit() {
    let long_key = format!("ssh-rsa {}", "A".repeat(2100));
    let config = DeploymentConfig {
        ssh_key_option: Some(SshKeyOption::Existing),
        ssh_key: long_key,
        ..demo_config()
    };
    assert_eq!(validate_config(&config).get(Field::SshKey), Some("SSH key is too long"));
}

#[test]
fn test_ssh_key_pattern() {
    assert!(is_valid_ssh_key("ssh-rsa AAAAB3NzaC1yc2E= user@host"));
    assert!(is_valid_ssh_key("ssh-rsa AAAAB3NzaC1yc2E="));
    assert!(is_valid_ssh_key("  ssh-rsa AAAAB3NzaC1yc2E= comment  "));
    assert!(!is_valid_ssh_key("not-a-key"));
    assert!(!is_valid_ssh_key("ssh-ed25519 AAAAC3Nza user@host"));
    assert!(!is_valid_ssh_key("ssh-rsa"));
}

#[test]
fn test_validate_field_is_idempotent() {
    let config = DeploymentConfig { project_name: "".into(), ..demo_config() };
    let first = validate_field(Field::ProjectName, &config);
    let second = validate_field(Field::ProjectName, &config);
    assert_eq!(first, second);
    assert_eq!(first, Some("Project name is required".into()));
}

#[test]
fn test_single_field_messages() {
    let config = DeploymentConfig { project_name: "x".repeat(51), ..demo_config() };
    // The blur message differs from the aggregate one, as shipped.
    assert_eq!(
        validate_field(Field::ProjectName, &config),
        Some("Must be less than 50 characters".into())
    );

    let config = DeploymentConfig { ip_option: None, ..demo_config() };
    assert_eq!(validate_field(Field::IpOption, &config), Some("IP option is required".into()));
}

#[test]
fn test_provider_key_validation() {
    let good: String = "Fz19".chars().cycle().take(64).collect();
    assert!(validate_provider_key(&good).is_ok());
    assert!(validate_provider_key(&format!("  {}  ", good)).is_ok());

    assert_eq!(validate_provider_key(""), Err("API key is required".into()));
    assert_eq!(
        validate_provider_key("abc123"),
        Err("Key must be exactly 64 characters (current: 6)".into())
    );
    let with_dash = format!("{}-{}", &good[..31], &good[..32]);
    assert_eq!(
        validate_provider_key(&with_dash),
        Err("Key must contain only letters and numbers".into())
    );
}
