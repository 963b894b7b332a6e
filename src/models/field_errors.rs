use serde::Serialize;

use crate::models::deployment_config::Field;

/// Per-field validation messages. An empty slot means the field is valid
/// or has not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    pub project_name: Option<String>,
    pub cloud_provider: Option<String>,
    pub instance_type: Option<String>,
    pub application_type: Option<String>,
    pub region: Option<String>,
    pub volume_size: Option<String>,
    pub ip_option: Option<String>,
    pub ssh_key_option: Option<String>,
    pub ssh_key: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot_ref(field).as_deref()
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        *self.slot_mut(field) = message;
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    fn slot_ref(&self, field: Field) -> &Option<String> {
        match field {
            Field::ProjectName => &self.project_name,
            Field::CloudProvider => &self.cloud_provider,
            Field::InstanceType => &self.instance_type,
            Field::ApplicationType => &self.application_type,
            Field::Region => &self.region,
            Field::VolumeSize => &self.volume_size,
            Field::IpOption => &self.ip_option,
            Field::SshKeyOption => &self.ssh_key_option,
            Field::SshKey => &self.ssh_key,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ProjectName => &mut self.project_name,
            Field::CloudProvider => &mut self.cloud_provider,
            Field::InstanceType => &mut self.instance_type,
            Field::ApplicationType => &mut self.application_type,
            Field::Region => &mut self.region,
            Field::VolumeSize => &mut self.volume_size,
            Field::IpOption => &mut self.ip_option,
            Field::SshKeyOption => &mut self.ssh_key_option,
            Field::SshKey => &mut self.ssh_key,
        }
    }
}
