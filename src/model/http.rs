/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! HTTP call wrapper
//!
//! [`HttpClient`] attaches the fixed browser-like header set every Voat endpoint
//! expects, builds `{scheme}://{domain}/{api_path}{path}` URLs and parses JSON
//! answers. Anything that is not JSON (CloudFlare or Voat HTML error pages) is
//! reported as [`AppError::Connection`].

use crate::application::config::RestApiConfig;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::SearchOptions;
use reqwest::cookie::Jar;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, CONTENT_TYPE, DNT, HOST, HeaderMap, HeaderValue, ORIGIN,
    REFERER, USER_AGENT as USER_AGENT_HEADER,
};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// A single API call: method, path relative to the API prefix, query and JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API prefix, e.g. `v/news`
    pub path: String,
    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Adds the parameters of a search, if any
    pub fn search(mut self, options: Option<&SearchOptions>) -> Result<Self, AppError> {
        if let Some(options) = options {
            self.query.extend(options.to_query()?);
        }
        Ok(self)
    }

    /// Sets the JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client bound to one domain and API prefix
#[derive(Debug, Clone)]
pub struct HttpClient {
    origin: String,
    api_path: String,
    headers: HeaderMap,
    client: Client,
    no_redirect: Client,
}

impl HttpClient {
    /// Creates a client for `api` serving its endpoints below `api_path`
    ///
    /// A missing trailing `/` is added to `api_path`.
    pub fn new(api: &RestApiConfig, api_path: &str) -> Result<Self, AppError> {
        let mut api_path = api_path.trim_start_matches('/').to_string();
        if !api_path.is_empty() && !api_path.ends_with('/') {
            api_path.push('/');
        }

        let origin = api.origin();
        let headers = fixed_headers(&api.domain, &origin)?;

        // both clients share the cookies of the authorization-code flow
        let jar = Arc::new(Jar::default());
        let timeout = Duration::from_secs(api.timeout);
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(timeout)
            .build()?;
        let no_redirect = Client::builder()
            .cookie_provider(jar)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            origin,
            api_path,
            headers,
            client,
            no_redirect,
        })
    }

    /// Full URL of a path relative to the domain root
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }

    /// Full URL of a path relative to the API prefix
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        self.url(&format!("{}{}", self.api_path, path.trim_start_matches('/')))
    }

    /// API prefix, always ending with `/`
    #[must_use]
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Copy of the headers sent with every request
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    /// Client following redirects
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Client returning redirect responses as they are
    pub(crate) fn no_redirect_client(&self) -> &Client {
        &self.no_redirect
    }

    /// Sends one API call and returns the parsed JSON
    ///
    /// `extra_headers` are added to (and override) the fixed headers.
    pub async fn call(
        &self,
        request: &ApiRequest,
        extra_headers: &HeaderMap,
    ) -> Result<Value, AppError> {
        let url = self.api_url(&request.path);
        debug!("{} {}", request.method, url);

        let mut headers = self.headers();
        headers.extend(extra_headers.clone());

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        parse_json_response(response).await
    }
}

/// Reads a response body as JSON, reporting non-JSON bodies as connection errors
pub async fn parse_json_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);
    let body = response.text().await?;
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            error!("Unexpected (server?) error, status {}: {}", status, e);
            Err(AppError::Connection { status, body })
        }
    }
}

/// Converts a string into a header value
pub(crate) fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::InvalidInput(format!("{value:?} is not a valid header value")))
}

fn fixed_headers(domain: &str, origin: &str) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.8"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(HOST, header_value(domain)?);
    headers.insert(ORIGIN, header_value(origin)?);
    headers.insert(REFERER, header_value(&format!("{origin}/"))?);
    headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    Ok(headers)
}
