use askama::Template;

use crate::models::CurrentUser;
use crate::templates::BaseTemplate;

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub current_user: Option<CurrentUser>,
    pub backend_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub error: Option<String>,
    pub username: String,
    pub email: String,
}

crate::impl_base_template!(SignupTemplate);
