mod login_form;
mod logo;

pub use login_form::LoginForm;
pub use logo::AcmeLogo;
