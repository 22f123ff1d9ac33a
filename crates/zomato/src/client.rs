use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    StatusCode, Url,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{
    common::{
        CategoriesRequest, Category, Cities, CitiesRequest, Collections, CollectionsRequest,
        Cuisine, CuisinesRequest, EntityType, Establishment, EstablishmentsRequest, GeoCode,
        GeoCodeRequest,
    },
    constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ERROR_BODY_LIMIT},
    error::{ApiError, Error},
    location::{LocationDetails, LocationDetailsRequest, Locations, LocationsRequest},
    request::{authenticate, BuildRequest, Endpoint, RawRequest},
    restaurant::{DailyMenuRequest, DailyMenus, Restaurant, RestaurantRequest, Reviews, ReviewsRequest},
    search::{SearchRequest, SearchResults},
    util::default_http_client,
    ApiKey,
};

/// Async client for the Zomato API.
///
/// Configuration is fixed at construction, so a client can be cloned and
/// shared across tasks freely.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
    api_key: Option<ApiKey>,
}

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Server to talk to. Only its scheme, host and port are used.
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientConfigError {
    #[error("invalid base URL `{0}`: {1}")]
    InvalidBaseUrl(String, String),
    #[error("base URL `{0}` has no host")]
    MissingHost(String),
    #[error("unsupported scheme in base URL `{0}`, expected http or https")]
    UnsupportedScheme(String),
    #[error("user agent `{0}` is not a valid header value")]
    InvalidUserAgent(String),
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ClientConfigError> {
        self.base_url()?;
        self.user_agent()?;
        Ok(())
    }

    fn base_url(&self) -> Result<Url, ClientConfigError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(raw)
            .map_err(|e| ClientConfigError::InvalidBaseUrl(raw.to_string(), e.to_string()))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(ClientConfigError::MissingHost(raw.to_string()));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientConfigError::UnsupportedScheme(raw.to_string()));
        }
        Ok(url)
    }

    fn user_agent(&self) -> Result<HeaderValue, ClientConfigError> {
        let raw = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        HeaderValue::from_str(raw).map_err(|_| ClientConfigError::InvalidUserAgent(raw.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid client configuration: {0}")]
    InvalidConfig(#[from] ClientConfigError),
    #[error("unable to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Client {
    /// A blank API key counts as no key; calls then fail with
    /// [`Error::MissingCredential`].
    pub fn new(
        http_client: reqwest::Client,
        config: Option<ClientConfig>,
        api_key: Option<ApiKey>,
    ) -> Result<Self, ClientInitError> {
        let config = config.unwrap_or_default();
        Ok(Self {
            http_client,
            base_url: config.base_url()?,
            user_agent: config.user_agent()?,
            api_key: api_key.filter(|key| !key.is_blank()),
        })
    }

    /// Default HTTP client and server with the given key.
    pub fn with_api_key(api_key: ApiKey) -> Result<Self, ClientInitError> {
        Self::new(default_http_client()?, None, Some(api_key))
    }

    /// Default HTTP client and server, key read from `ZOMATO_API_KEY`.
    pub fn from_env() -> Result<Self, ClientInitError> {
        Self::new(default_http_client()?, None, ApiKey::from_env())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one endpoint request and decodes its response.
    ///
    /// The credential is checked before anything touches the network.
    pub async fn send<E: Endpoint>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> Result<E::Output, Error> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(Error::MissingCredential { endpoint: E::NAME })?;
        let request = authenticate(endpoint, api_key).build_request()?;
        let body = self.execute(E::NAME, request, cancel).await?;
        E::decode(&body).map_err(|source| Error::Decode {
            endpoint: E::NAME,
            source,
        })
    }

    async fn execute(
        &self,
        endpoint: &'static str,
        request: RawRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, Error> {
        let url = request.url_on(&self.base_url);
        tracing::debug!(endpoint, %url, "sending request");
        let pending = self
            .http_client
            .request(request.method, url.clone())
            .headers(request.headers)
            .header(USER_AGENT, self.user_agent.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send();
        let mut response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled { endpoint }),
            response = pending => response.map_err(|source| Error::Transport { endpoint, source })?,
        };

        let status = response.status();
        let headers = response.headers().clone();
        tracing::debug!(endpoint, %status, "received response");

        let limit = if status == StatusCode::OK {
            None
        } else {
            Some(ERROR_BODY_LIMIT)
        };
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled { endpoint }),
            body = read_body(&mut response, limit) => body.map_err(|source| Error::Transport { endpoint, source })?,
        };
        if status != StatusCode::OK {
            return Err(Error::Api {
                endpoint,
                source: Box::new(ApiError {
                    status,
                    headers,
                    url,
                    body: (!body.is_empty()).then_some(body),
                }),
            });
        }
        Ok(body)
    }

    pub async fn categories(&self, cancel: &CancellationToken) -> Result<Vec<Category>, Error> {
        self.send(&CategoriesRequest, cancel).await
    }

    pub async fn cities(
        &self,
        request: &CitiesRequest,
        cancel: &CancellationToken,
    ) -> Result<Cities, Error> {
        self.send(request, cancel).await
    }

    pub async fn collections(
        &self,
        request: &CollectionsRequest,
        cancel: &CancellationToken,
    ) -> Result<Collections, Error> {
        self.send(request, cancel).await
    }

    pub async fn cuisines(
        &self,
        request: &CuisinesRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Cuisine>, Error> {
        self.send(request, cancel).await
    }

    pub async fn establishments(
        &self,
        request: &EstablishmentsRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<Establishment>, Error> {
        self.send(request, cancel).await
    }

    pub async fn geocode(
        &self,
        latitude: f64,
        longitude: f64,
        cancel: &CancellationToken,
    ) -> Result<GeoCode, Error> {
        self.send(&GeoCodeRequest { latitude, longitude }, cancel).await
    }

    pub async fn location_details(
        &self,
        entity_id: i64,
        entity_type: EntityType,
        cancel: &CancellationToken,
    ) -> Result<LocationDetails, Error> {
        let request = LocationDetailsRequest {
            entity_id,
            entity_type,
        };
        self.send(&request, cancel).await
    }

    pub async fn locations(
        &self,
        request: &LocationsRequest,
        cancel: &CancellationToken,
    ) -> Result<Locations, Error> {
        self.send(request, cancel).await
    }

    pub async fn daily_menu(
        &self,
        restaurant_id: i64,
        cancel: &CancellationToken,
    ) -> Result<DailyMenus, Error> {
        self.send(&DailyMenuRequest { restaurant_id }, cancel).await
    }

    pub async fn restaurant(
        &self,
        restaurant_id: i64,
        cancel: &CancellationToken,
    ) -> Result<Restaurant, Error> {
        self.send(&RestaurantRequest { restaurant_id }, cancel).await
    }

    pub async fn reviews(
        &self,
        request: &ReviewsRequest,
        cancel: &CancellationToken,
    ) -> Result<Reviews, Error> {
        self.send(request, cancel).await
    }

    pub async fn search(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> Result<SearchResults, Error> {
        self.send(request, cancel).await
    }
}

/// Reads the body in chunks, keeping at most `limit` bytes when given.
async fn read_body(
    response: &mut reqwest::Response,
    limit: Option<usize>,
) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        match limit {
            Some(limit) if body.len() + chunk.len() >= limit => {
                body.extend_from_slice(&chunk[..limit - body.len()]);
                break;
            }
            _ => body.extend_from_slice(&chunk),
        }
    }
    Ok(body)
}
