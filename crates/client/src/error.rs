/// Errors from the backend HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status other than 401/403.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// `message` field of the error body, when it had one.
        message: Option<String>,
        /// Raw response body for debugging.
        body: String,
    },

    /// 401: the stored token was cleared and the session marked expired.
    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    /// 403: the signed-in account lacks permission.
    #[error("Forbidden")]
    Forbidden { message: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A header value could not be built (e.g. a token with control characters).
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// The backend-supplied message, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            }
            | Self::Unauthorized {
                message: Some(message),
            }
            | Self::Forbidden {
                message: Some(message),
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::InvalidHeader(_) => None,
        }
    }

    /// 404, used as control flow (e.g. "no waiting registration").
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
