use std::borrow::Cow;

use reqwest::{header::HeaderMap, StatusCode, Url};
use thiserror::Error;

/// Errors returned by every endpoint call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no API key configured for the {endpoint} request")]
    MissingCredential { endpoint: &'static str },
    #[error("invalid {endpoint} request: {source}")]
    Validation {
        endpoint: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("unable to build the {endpoint} request: {message}")]
    RequestBuild {
        endpoint: &'static str,
        message: String,
    },
    #[error("the {endpoint} request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("the {endpoint} request was cancelled")]
    Cancelled { endpoint: &'static str },
    #[error("the {endpoint} request was rejected: {source}")]
    Api {
        endpoint: &'static str,
        #[source]
        source: Box<ApiError>,
    },
    #[error("unable to decode the {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// HTTP status of the response, when the server answered with a non-200 status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { source, .. } => Some(source.status),
            _ => None,
        }
    }
}

/// A non-200 response. The body is kept verbatim and never decoded.
#[derive(Debug, Error)]
#[error("request to {url} returned {status}{}", body_suffix(.body))]
pub struct ApiError {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: Url,
    pub body: Option<Vec<u8>>,
}

impl ApiError {
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body.as_deref().map(String::from_utf8_lossy)
    }
}

fn body_suffix(body: &Option<Vec<u8>>) -> String {
    match body {
        Some(body) => format!(", response: `{}`", String::from_utf8_lossy(body)),
        None => String::new(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    Required(&'static str),
}

impl From<derive_builder::UninitializedFieldError> for ValidationError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        ValidationError::Required(err.field_name())
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON or a value of the wrong JSON type. `path` locates the
    /// value, e.g. `restaurants[3].restaurant.user_rating`, when known.
    #[error("the response body does not match the expected JSON{}: {source}", path_suffix(.path))]
    Json {
        path: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value {value:?} for `{field}`: {reason}")]
    Field {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DecodeError {
    pub(crate) fn field(field: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        DecodeError::Field {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the offending field, for field-level conversion failures.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            DecodeError::Field { field, .. } => Some(field),
            DecodeError::Json { .. } => None,
        }
    }

    /// Location of a JSON mismatch inside the body.
    pub fn json_path(&self) -> Option<&str> {
        match self {
            DecodeError::Json { path, .. } => path.as_deref(),
            DecodeError::Field { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        DecodeError::Json { path: None, source }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        DecodeError::Json {
            path: (path != ".").then_some(path),
            source: err.into_inner(),
        }
    }
}

fn path_suffix(path: &Option<String>) -> String {
    match path {
        Some(path) => format!(" at `{path}`"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_body() {
        let err = ApiError {
            status: StatusCode::NOT_FOUND,
            headers: HeaderMap::new(),
            url: Url::parse("https://example.com/api/v2.1/restaurant?res_id=1").unwrap(),
            body: Some(br#"{"message":"not found"}"#.to_vec()),
        };
        let message = err.to_string();
        assert!(message.contains("404"), "{message}");
        assert!(message.contains(r#"`{"message":"not found"}`"#), "{message}");
        assert_eq!(err.body_text().unwrap(), r#"{"message":"not found"}"#);
    }

    #[test]
    fn api_error_display_without_body() {
        let err = ApiError {
            status: StatusCode::FORBIDDEN,
            headers: HeaderMap::new(),
            url: Url::parse("https://example.com/api/v2.1/categories").unwrap(),
            body: None,
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com/api/v2.1/categories returned 403 Forbidden"
        );
    }

    #[test]
    fn error_status_only_for_api_errors() {
        let err = Error::Api {
            endpoint: "categories",
            source: Box::new(ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                headers: HeaderMap::new(),
                url: Url::parse("https://example.com/").unwrap(),
                body: None,
            }),
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.to_string().starts_with("the categories request was rejected: "));
        assert_eq!(Error::MissingCredential { endpoint: "restaurant" }.status(), None);
    }

    #[test]
    fn missing_credential_names_endpoint() {
        let err = Error::MissingCredential {
            endpoint: "restaurant",
        };
        assert_eq!(err.to_string(), "no API key configured for the restaurant request");
    }

    #[test]
    fn json_error_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Outer {
            #[allow(dead_code)]
            inner: Inner,
        }
        #[derive(Debug, serde::Deserialize)]
        struct Inner {
            #[allow(dead_code)]
            votes: i64,
        }
        let mut de = serde_json::Deserializer::from_str(r#"{"inner": {"votes": "many"}}"#);
        let err = DecodeError::from(serde_path_to_error::deserialize::<_, Outer>(&mut de).unwrap_err());
        assert_eq!(err.json_path(), Some("inner.votes"));
        assert!(err.to_string().contains("at `inner.votes`"), "{err}");

        let err = DecodeError::from(serde_json::from_str::<Outer>("{").unwrap_err());
        assert_eq!(err.json_path(), None);
    }

    #[test]
    fn uninitialized_field_maps_to_required() {
        let err = ValidationError::from(derive_builder::UninitializedFieldError::new("res_id"));
        assert_eq!(err, ValidationError::Required("res_id"));
    }
}
