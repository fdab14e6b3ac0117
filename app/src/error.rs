use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, From)]
pub enum Error {
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, body: String },

    /// The request never produced a response (network, CORS, ...).
    #[from]
    Request(String),
}

impl Error {
    /// What the submit flow logs: the response payload when the server
    /// produced one, the raw failure message otherwise.
    pub fn detail(&self) -> &str {
        match self {
            Error::Api { body, .. } if !body.is_empty() => body,
            Error::Api { .. } => "empty response body",
            Error::Request(message) => message,
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Error::Request(err.to_string())
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{}", self.detail())
    }
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests

#[cfg(test)]
mod tests {
    type TestError = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, TestError>; // For tests.

    use super::*;

    #[test]
    fn test_detail_prefers_response_body() -> Result<()> {
        let error = Error::Api {
            status: 401,
            body: r#"{"error":"bad credentials"}"#.to_string(),
        };
        assert_eq!(error.detail(), r#"{"error":"bad credentials"}"#);

        let error = Error::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(error.detail(), "empty response body");

        let error = Error::Request("Failed to fetch".to_string());
        assert_eq!(error.detail(), "Failed to fetch");
        Ok(())
    }
}

// endregion: --- Tests
