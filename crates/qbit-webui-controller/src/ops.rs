//! Internal trait abstracting the WebUI HTTP calls.
//!
//! This module provides the [`WebUiOps`] trait, one method per API endpoint the client
//! uses, and [`HttpTransport`], its `reqwest` implementation. Tests mock the trait.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, RequestBuilder, StatusCode, cookie::Jar, multipart::Form};
use thiserror::Error;
use tracing::trace;
use url::Url;

use crate::endpoint::join_api_path;

pub(crate) const APP_VERSION: &str = "/api/v2/app/version";
pub(crate) const AUTH_LOGIN: &str = "/api/v2/auth/login";
pub(crate) const TORRENTS_ADD: &str = "/api/v2/torrents/add";
pub(crate) const TORRENTS_INFO: &str = "/api/v2/torrents/info";
pub(crate) const TORRENTS_FILES: &str = "/api/v2/torrents/files";
pub(crate) const TORRENTS_DELETE: &str = "/api/v2/torrents/delete";

/// Status and body of a daemon response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// The request never produced a response.
#[derive(Error, Debug)]
#[error("{0}")]
pub(crate) struct TransportError(pub(crate) String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Internal trait that abstracts the WebUI endpoints.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait WebUiOps {
    async fn app_version(&self) -> Result<RawResponse, TransportError>;
    async fn auth_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RawResponse, TransportError>;
    async fn torrents_add(
        &self,
        urls: &str,
        save_path: &str,
        tags: &str,
    ) -> Result<RawResponse, TransportError>;
    async fn torrents_info(&self, tag: &str) -> Result<RawResponse, TransportError>;
    async fn torrents_files(&self, hash: &str) -> Result<RawResponse, TransportError>;
    /// Always keeps the downloaded data.
    async fn torrents_delete(&self, hashes: &str) -> Result<RawResponse, TransportError>;
}

/// HTTP transport holding the session cookies for one WebUI endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// `base` must not carry credentials: reqwest would turn them into a Basic auth header.
    pub(crate) fn new(base: Url, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder().cookie_provider(jar);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, TransportError> {
        let url = join_api_path(&self.base, path)
            .ok_or_else(|| TransportError(format!("cannot join {path} onto {}", self.base)))?;
        trace!("POST {url}");
        Ok(self.client.post(url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        trace!("{status}, {} body bytes", body.len());
        Ok(RawResponse { status, body })
    }
}

impl WebUiOps for HttpTransport {
    async fn app_version(&self) -> Result<RawResponse, TransportError> {
        self.send(self.post(APP_VERSION)?).await
    }

    async fn auth_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RawResponse, TransportError> {
        let form = [("username", username), ("password", password)];
        self.send(self.post(AUTH_LOGIN)?.form(&form)).await
    }

    async fn torrents_add(
        &self,
        urls: &str,
        save_path: &str,
        tags: &str,
    ) -> Result<RawResponse, TransportError> {
        let form = Form::new()
            .text("urls", urls.to_owned())
            .text("savepath", save_path.to_owned())
            .text("tags", tags.to_owned());
        self.send(self.post(TORRENTS_ADD)?.multipart(form)).await
    }

    async fn torrents_info(&self, tag: &str) -> Result<RawResponse, TransportError> {
        self.send(self.post(TORRENTS_INFO)?.form(&[("tag", tag)])).await
    }

    async fn torrents_files(&self, hash: &str) -> Result<RawResponse, TransportError> {
        self.send(self.post(TORRENTS_FILES)?.form(&[("hash", hash)])).await
    }

    async fn torrents_delete(&self, hashes: &str) -> Result<RawResponse, TransportError> {
        let form = [("hashes", hashes), ("deleteFiles", "false")];
        self.send(self.post(TORRENTS_DELETE)?.form(&form)).await
    }
}
