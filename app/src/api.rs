//! The single outbound call of the app: POSTing the credentials to the
//! authentication endpoint.

use crate::form::Credentials;
use crate::{Error, Result};
use gloo_net::http::Request;
use serde::Serialize;

/// Fixed endpoint of the remote authentication service.
pub const LOGIN_URL: &str = "http://localhost:5001/api/login/login";

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Wire shape expected by the backend model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            user_name: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Send the credentials and return the raw response body. A non-2xx answer
/// is an [`Error::Api`] carrying whatever payload the server produced.
pub async fn post_login(credentials: &Credentials) -> Result<String> {
    let response = Request::post(LOGIN_URL)
        .json(&LoginRequest::from(credentials))?
        .send()
        .await?;

    let body = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(Error::Api {
            status: response.status(),
            body,
        });
    }

    Ok(body)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    type Error = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, Error>; // For tests.

    use super::LoginRequest;
    use crate::form::Credentials;

    #[test]
    fn test_login_request_wire_shape() -> Result<()> {
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        };
        let body = serde_json::to_value(LoginRequest::from(&credentials))?;

        // backend expects camelCase keys
        assert_eq!(body["userName"], "alice");
        assert_eq!(body["password"], "secret1");
        assert_eq!(body.as_object().map(|o| o.len()), Some(2));
        Ok(())
    }
}

// endregion: --- Tests
