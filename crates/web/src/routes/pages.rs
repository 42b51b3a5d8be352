//! Static informational pages.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate;

/// Display the about page.
pub async fn about() -> AboutTemplate {
    AboutTemplate
}

/// Display the contact page.
pub async fn contact() -> ContactTemplate {
    ContactTemplate
}
