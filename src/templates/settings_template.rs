use askama::Template;

use crate::models::CurrentUser;
use crate::templates::BaseTemplate;

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub error: Option<String>,
}

crate::impl_base_template!(SettingsTemplate);
