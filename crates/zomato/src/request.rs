use reqwest::{
    header::{HeaderMap, HeaderValue},
    Method, Url,
};
use serde::de::DeserializeOwned;

use crate::{
    constants::{API_KEY_HEADER, API_VERSION_PREFIX, DEFAULT_BASE_URL},
    error::{DecodeError, Error, ValidationError},
    ApiKey,
};

/// An outbound request described as plain data.
///
/// `url` always points at the default API host; the client swaps in its
/// configured scheme, host and port when the request is executed.
#[derive(Debug, Clone)]
pub struct RawRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl RawRequest {
    /// Adds the credential header.
    pub fn with_api_key(mut self, api_key: &ApiKey) -> Result<Self, reqwest::header::InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(api_key.get())?;
        value.set_sensitive(true);
        self.headers.insert(API_KEY_HEADER, value);
        Ok(self)
    }

    /// The request URL moved onto `base`, keeping path and query.
    pub fn url_on(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_path(self.url.path());
        url.set_query(self.url.query());
        url.set_fragment(None);
        url
    }
}

/// Anything that can produce a [`RawRequest`].
pub trait BuildRequest {
    fn endpoint_name(&self) -> &'static str;

    fn build_request(&self) -> Result<RawRequest, Error>;
}

impl<R: BuildRequest + ?Sized> BuildRequest for &R {
    fn endpoint_name(&self) -> &'static str {
        (**self).endpoint_name()
    }

    fn build_request(&self) -> Result<RawRequest, Error> {
        (**self).build_request()
    }
}

/// One supported API operation.
pub trait Endpoint: BuildRequest {
    /// Short name used in errors and logs.
    const NAME: &'static str;
    /// Path suffix under the versioned prefix, e.g. `/categories`.
    const PATH: &'static str;

    /// The response exactly as transmitted.
    type Wire: DeserializeOwned;
    /// The normalized response handed to callers.
    type Output;

    /// Rejects requests whose required fields hold their zero value.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn query(&self) -> Query;

    /// Converts the wire shape into the canonical record.
    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError>;

    /// Decodes a 200 response body into the canonical record.
    fn decode(body: &[u8]) -> Result<Self::Output, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let wire: Self::Wire = serde_path_to_error::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Self::normalize(wire)
    }
}

/// Validates `endpoint` and encodes its path and query.
pub(crate) fn endpoint_request<E: Endpoint>(endpoint: &E) -> Result<RawRequest, Error> {
    endpoint.validate().map_err(|source| Error::Validation {
        endpoint: E::NAME,
        source,
    })?;
    let build_error = |message: String| Error::RequestBuild {
        endpoint: E::NAME,
        message,
    };
    let mut url = Url::parse(&format!("{DEFAULT_BASE_URL}{API_VERSION_PREFIX}{}", E::PATH))
        .map_err(|e| build_error(e.to_string()))?;
    let pairs = endpoint.query().finish().map_err(build_error)?;
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(RawRequest {
        method: Method::GET,
        url,
        headers: HeaderMap::new(),
    })
}

macro_rules! impl_build_request {
    ($($endpoint:ty),+ $(,)?) => {
        $(
            impl $crate::request::BuildRequest for $endpoint {
                fn endpoint_name(&self) -> &'static str {
                    <$endpoint as $crate::request::Endpoint>::NAME
                }

                fn build_request(&self) -> Result<$crate::request::RawRequest, $crate::error::Error> {
                    $crate::request::endpoint_request(self)
                }
            }
        )+
    };
}
pub(crate) use impl_build_request;

/// A request builder that adds the credential header to whatever `R` builds.
#[derive(Debug, Clone)]
pub struct Authenticated<'a, R> {
    inner: R,
    api_key: &'a ApiKey,
}

pub fn authenticate<R: BuildRequest>(inner: R, api_key: &ApiKey) -> Authenticated<'_, R> {
    Authenticated { inner, api_key }
}

impl<R: BuildRequest> BuildRequest for Authenticated<'_, R> {
    fn endpoint_name(&self) -> &'static str {
        self.inner.endpoint_name()
    }

    fn build_request(&self) -> Result<RawRequest, Error> {
        self.inner
            .build_request()?
            .with_api_key(self.api_key)
            .map_err(|e| Error::RequestBuild {
                endpoint: self.endpoint_name(),
                message: format!("the API key is not a valid header value: {e}"),
            })
    }
}

/// A query parameter value. Empty and zero values are omitted from the URL.
pub trait QueryValue {
    fn is_omitted(&self) -> bool;

    fn encode(&self) -> Result<String, String>;
}

impl QueryValue for str {
    fn is_omitted(&self) -> bool {
        self.trim().is_empty()
    }

    fn encode(&self) -> Result<String, String> {
        Ok(self.to_owned())
    }
}

impl QueryValue for String {
    fn is_omitted(&self) -> bool {
        self.as_str().is_omitted()
    }

    fn encode(&self) -> Result<String, String> {
        self.as_str().encode()
    }
}

impl QueryValue for i64 {
    fn is_omitted(&self) -> bool {
        *self == 0
    }

    fn encode(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl QueryValue for u64 {
    fn is_omitted(&self) -> bool {
        *self == 0
    }

    fn encode(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl QueryValue for f64 {
    fn is_omitted(&self) -> bool {
        *self == 0.0
    }

    fn encode(&self) -> Result<String, String> {
        if !self.is_finite() {
            return Err(format!("{self} is not a finite number"));
        }
        Ok(self.to_string())
    }
}

// Lists travel as a single comma-joined value.
impl<T: QueryValue> QueryValue for Vec<T> {
    fn is_omitted(&self) -> bool {
        self.iter().all(QueryValue::is_omitted)
    }

    fn encode(&self) -> Result<String, String> {
        let parts = self
            .iter()
            .filter(|item| !item.is_omitted())
            .map(QueryValue::encode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(","))
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn is_omitted(&self) -> bool {
        self.as_ref().map_or(true, QueryValue::is_omitted)
    }

    fn encode(&self) -> Result<String, String> {
        match self {
            Some(value) => value.encode(),
            None => Ok(String::new()),
        }
    }
}

/// Ordered query parameters of one request.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
    error: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: QueryValue + ?Sized>(mut self, key: &'static str, value: &V) -> Self {
        if self.error.is_some() || value.is_omitted() {
            return self;
        }
        match value.encode() {
            Ok(encoded) => self.pairs.push((key, encoded)),
            Err(reason) => self.error = Some(format!("parameter `{key}`: {reason}")),
        }
        self
    }

    pub(crate) fn finish(self) -> Result<Vec<(&'static str, String)>, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.pairs),
        }
    }
}

/// Fails with [`ValidationError::Required`] when `value` holds its zero value.
pub(crate) fn require<V: QueryValue + ?Sized>(
    field: &'static str,
    value: &V,
) -> Result<(), ValidationError> {
    if value.is_omitted() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}
