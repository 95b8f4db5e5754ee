use std::{fmt, sync::Arc};

use futures::TryFutureExt;
use hyper::{
    body,
    client::{connect::Connect, HttpConnector},
    header, http::request, Body, Client, Request, Response, StatusCode,
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{call::HttpMethod, ids::InstituteNumber};

const USER_AGENT: &str = concat!("informat-lib/", env!("CARGO_PKG_VERSION"));
const INSTITUTE_NUMBER_HEADER: &str = "InstituteNo";
const API_VERSION_HEADER: &str = "api-version";

/// Connector used by [`CallProcessor::new`](CallProcessor::new).
#[cfg(feature = "rustls")]
pub type DefaultConnector = hyper_rustls::HttpsConnector<HttpConnector>;
/// Connector used by [`CallProcessor::new`](CallProcessor::new).
#[cfg(not(feature = "rustls"))]
pub type DefaultConnector = HttpConnector;

/// Builds and sends the HTTP requests of every call.
///
/// Cloning is cheap, the underlying [`Client`](hyper::Client) shares its connection pool.
#[derive(Clone)]
pub struct CallProcessor<C = DefaultConnector> {
    client: Client<C, Body>,
    access_token: Option<Arc<str>>,
    user_agent: Arc<str>,
}

impl CallProcessor<DefaultConnector> {
    pub fn new() -> Self {
        #[cfg(feature = "rustls")]
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_only()
            .enable_http1()
            .build();
        #[cfg(not(feature = "rustls"))]
        let connector = HttpConnector::new();

        Self::with_client(Client::builder().build(connector))
    }
}

impl Default for CallProcessor<DefaultConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CallProcessor<C> {
    /// Use an already configured client, e.g. one with a custom connector or timeouts.
    pub fn with_client(client: Client<C, Body>) -> Self {
        Self {
            client,
            access_token: None,
            user_agent: Arc::from(USER_AGENT),
        }
    }

    /// Bearer token sent in the `Authorization` header of every request.
    ///
    /// Obtaining the token is left to the caller.
    pub fn access_token(mut self, token: impl AsRef<str>) -> Self {
        self.access_token = Some(Arc::from(token.as_ref()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl AsRef<str>) -> Self {
        self.user_agent = Arc::from(user_agent.as_ref());
        self
    }

    /// Start a request with the headers shared by every call.
    ///
    /// The returned builder still accepts a body and additional headers.
    pub fn build_request(
        &self,
        url: &Url,
        method: HttpMethod,
        institute_number: &InstituteNumber,
        api_version: Option<&str>,
    ) -> request::Builder {
        let mut builder = Request::builder()
            .method(method.as_hyper())
            .uri(url.as_str())
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &*self.user_agent)
            .header(INSTITUTE_NUMBER_HEADER, institute_number.as_str());
        if let Some(token) = &self.access_token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(version) = api_version {
            builder = builder.header(API_VERSION_HEADER, version);
        }

        builder
    }
}

impl<C> CallProcessor<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the exchange, returning the response untouched if its status is a success.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Body>, CallError> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        debug!(%method, %uri, "sending request");

        let response = self.client.request(request).await?;
        let status = response.status();
        debug!(%status, %uri, "received response");

        if !status.is_success() {
            let body = body::to_bytes(response.into_body())
                .err_into::<CallError>()
                .await?;
            warn!(%status, %uri, "request was not successful");
            return Err(CallError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(response)
    }
}

impl<C> fmt::Debug for CallProcessor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallProcessor")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Represents errors that can occur while exchanging a request with the API.
#[derive(Debug, Error)]
pub enum CallError {
    /// An argument to build the HTTP request was invalid.
    /// See more [here](https://docs.rs/http/0.2.8/http/request/struct.Builder.html#errors)
    #[error("an argument while building an HTTP request was invalid")]
    MalformedHttpArgs(#[from] hyper::http::Error),
    /// Failed to send the request or to read the response body.
    #[error("failed to send HTTP request")]
    HttpRequestFailed(#[from] hyper::Error),
    #[error("could not build the request URL")]
    InvalidUrl(#[from] url::ParseError),
    /// The API answered with a status outside of 2xx.
    #[error("the API responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}
