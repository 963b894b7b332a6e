use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "Azure")]
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Azure => "Azure",
            CloudProvider::Gcp => "GCP",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AWS" => Some(CloudProvider::Aws),
            "Azure" => Some(CloudProvider::Azure),
            "GCP" => Some(CloudProvider::Gcp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    Small,
    Medium,
    Large,
}

impl InstanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceType::Small => "small",
            InstanceType::Medium => "medium",
            InstanceType::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(InstanceType::Small),
            "medium" => Some(InstanceType::Medium),
            "large" => Some(InstanceType::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    Wordpress,
    Game,
    Github,
    Shopify,
    CloudHosting,
    Database,
    CiCd,
    ContainerApp,
    StaticSite,
    Cdn,
    Monitoring,
    Ecommerce,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Wordpress => "wordpress",
            ApplicationType::Game => "game",
            ApplicationType::Github => "github",
            ApplicationType::Shopify => "shopify",
            ApplicationType::CloudHosting => "cloud-hosting",
            ApplicationType::Database => "database",
            ApplicationType::CiCd => "ci-cd",
            ApplicationType::ContainerApp => "container-app",
            ApplicationType::StaticSite => "static-site",
            ApplicationType::Cdn => "cdn",
            ApplicationType::Monitoring => "monitoring",
            ApplicationType::Ecommerce => "ecommerce",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wordpress" => Some(ApplicationType::Wordpress),
            "game" => Some(ApplicationType::Game),
            "github" => Some(ApplicationType::Github),
            "shopify" => Some(ApplicationType::Shopify),
            "cloud-hosting" => Some(ApplicationType::CloudHosting),
            "database" => Some(ApplicationType::Database),
            "ci-cd" => Some(ApplicationType::CiCd),
            "container-app" => Some(ApplicationType::ContainerApp),
            "static-site" => Some(ApplicationType::StaticSite),
            "cdn" => Some(ApplicationType::Cdn),
            "monitoring" => Some(ApplicationType::Monitoring),
            "ecommerce" => Some(ApplicationType::Ecommerce),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpOption {
    Reserved,
    Dynamic,
}

impl IpOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpOption::Reserved => "reserved",
            IpOption::Dynamic => "dynamic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reserved" => Some(IpOption::Reserved),
            "dynamic" => Some(IpOption::Dynamic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SshKeyOption {
    Generate,
    Existing,
}

impl SshKeyOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SshKeyOption::Generate => "generate",
            SshKeyOption::Existing => "existing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "generate" => Some(SshKeyOption::Generate),
            "existing" => Some(SshKeyOption::Existing),
            _ => None,
        }
    }
}

/// Identifies a single field of the deployment form. Form input names and
/// the blur-validation endpoint use the snake_case spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    CloudProvider,
    InstanceType,
    ApplicationType,
    Region,
    VolumeSize,
    IpOption,
    SshKeyOption,
    SshKey,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::ProjectName,
        Field::CloudProvider,
        Field::InstanceType,
        Field::ApplicationType,
        Field::Region,
        Field::VolumeSize,
        Field::IpOption,
        Field::SshKeyOption,
        Field::SshKey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ProjectName => "project_name",
            Field::CloudProvider => "cloud_provider",
            Field::InstanceType => "instance_type",
            Field::ApplicationType => "application_type",
            Field::Region => "region",
            Field::VolumeSize => "volume_size",
            Field::IpOption => "ip_option",
            Field::SshKeyOption => "ssh_key_option",
            Field::SshKey => "ssh_key",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project_name" => Some(Field::ProjectName),
            "cloud_provider" => Some(Field::CloudProvider),
            "instance_type" => Some(Field::InstanceType),
            "application_type" => Some(Field::ApplicationType),
            "region" => Some(Field::Region),
            "volume_size" => Some(Field::VolumeSize),
            "ip_option" => Some(Field::IpOption),
            "ssh_key_option" => Some(Field::SshKeyOption),
            "ssh_key" => Some(Field::SshKey),
            _ => None,
        }
    }
}

/// The in-progress deployment configuration, owned by one form instance.
/// Select fields stay `None` until the user picks a value; `ssh_key` is
/// only meaningful while `ssh_key_option` is `Existing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub project_name: String,
    pub cloud_provider: Option<CloudProvider>,
    pub instance_type: Option<InstanceType>,
    pub application_type: Option<ApplicationType>,
    pub region: String,
    pub volume_size: i64,
    pub ip_option: Option<IpOption>,
    pub ssh_key_option: Option<SshKeyOption>,
    pub ssh_key: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        DeploymentConfig {
            project_name: String::new(),
            cloud_provider: None,
            instance_type: None,
            application_type: None,
            region: String::new(),
            volume_size: 10,
            ip_option: None,
            ssh_key_option: None,
            ssh_key: String::new(),
        }
    }
}
