//! Form state and validation rules for the login form, kept free of any
//! rendering concern so the rules can be tested on their own.

/// The two field values owned by the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation messages. An empty string means "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub username: String,
    pub password: String,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";

const PASSWORD_MIN_LEN: usize = 6;

/// Check both fields against the static rules. Both fields are always
/// evaluated, so the caller gets every message in one pass.
pub fn validate(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if credentials.username.is_empty() {
        errors.username = USERNAME_REQUIRED.to_string();
    }

    if credentials.password.is_empty() {
        errors.password = PASSWORD_REQUIRED.to_string();
    } else if credentials.password.chars().count() < PASSWORD_MIN_LEN {
        errors.password = PASSWORD_TOO_SHORT.to_string();
    }

    errors
}

// region:    --- Tests


// endregion: --- Tests
