use crate::models::deployment_config::{ApplicationType, CloudProvider, InstanceType};

pub struct ProviderOption {
    pub id: CloudProvider,
    pub name: &'static str,
}

pub struct InstanceOption {
    pub id: InstanceType,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct ApplicationOption {
    pub id: ApplicationType,
    pub name: &'static str,
    pub available: bool,
}

pub fn cloud_providers() -> &'static [ProviderOption] {
    &[
        ProviderOption { id: CloudProvider::Aws, name: "Amazon Web Services" },
        ProviderOption { id: CloudProvider::Azure, name: "Microsoft Azure" },
        ProviderOption { id: CloudProvider::Gcp, name: "Google Cloud Platform" },
    ]
}

pub fn instance_types() -> &'static [InstanceOption] {
    &[
        InstanceOption {
            id: InstanceType::Small,
            name: "Small (1vCPU, 2GB RAM)",
            description: "1 vCPU, 2GB RAM - Good for development and testing",
        },
        InstanceOption {
            id: InstanceType::Medium,
            name: "Medium (2vCPU, 4GB RAM)",
            description: "2 vCPU, 4GB RAM - Best for development and testing",
        },
        InstanceOption {
            id: InstanceType::Large,
            name: "Large (4vCPU, 8GB RAM)",
            description: "4 vCPU, 8GB RAM - Good for development and testing",
        },
    ]
}

// Only a subset of application types is provisionable today; the rest are
// listed but disabled in the form.
pub fn application_types() -> &'static [ApplicationOption] {
    &[
        ApplicationOption { id: ApplicationType::Wordpress, name: "WordPress Site", available: true },
        ApplicationOption { id: ApplicationType::Game, name: "Game", available: true },
        ApplicationOption { id: ApplicationType::Github, name: "GitHub Code", available: true },
        ApplicationOption { id: ApplicationType::Shopify, name: "Shopify Site", available: true },
        ApplicationOption { id: ApplicationType::CloudHosting, name: "Cloud Hosting", available: true },
        ApplicationOption { id: ApplicationType::Database, name: "Database Service", available: false },
        ApplicationOption { id: ApplicationType::CiCd, name: "CI/CD Pipelines", available: false },
        ApplicationOption { id: ApplicationType::ContainerApp, name: "Container Application", available: false },
        ApplicationOption { id: ApplicationType::StaticSite, name: "Static Website", available: false },
        ApplicationOption { id: ApplicationType::Cdn, name: "CDN & Caching", available: false },
        ApplicationOption { id: ApplicationType::Monitoring, name: "Monitoring & Logging", available: false },
        ApplicationOption { id: ApplicationType::Ecommerce, name: "E-commerce Solution", available: false },
    ]
}
