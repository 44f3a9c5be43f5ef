use crate::{
    config::ConsoleConfig,
    error::LookupError,
    lookup::{ConnectionMetadata, ConnectionTester, NameLookup},
    retry::{RetryDisposition, RetryError, RetryPolicy},
};
use async_trait::async_trait;
use model::{
    core::{engine_kind::EngineKind, identifiers::ConnectionId},
    execution::connection::{ConnectionDetails, ConnectionTestRequest},
};
use reqwest::{Client, RequestBuilder, Url};
use std::future::Future;
use tracing::{debug, info, warn};

const CONNECTIONS: &str = "connections";
const FIND_BY_NAME: &str = "find-by-name";
const TEST: &str = "test";

/// HTTP client for the console's connection endpoints.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl ConsoleClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            retry: config.retry.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and returns the body of a successful response.
    async fn fetch_text(&self, request: RequestBuilder, url: &Url) -> Result<String, LookupError> {
        let response = request.send().await.map_err(|e| classify_send_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_send_error(e, url))
    }

    async fn with_retry<F, Fut, T>(&self, what: &str, op: F) -> Result<T, LookupError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LookupError>>,
    {
        let classify = |err: &LookupError| {
            if err.is_retryable() {
                warn!("{what} attempt failed, will retry: {err}");
                RetryDisposition::Retry
            } else {
                RetryDisposition::Stop
            }
        };

        self.retry.run(op, classify).await.map_err(|err| match err {
            RetryError::Fatal(err) => err,
            RetryError::AttemptsExceeded(last, attempts) if attempts > 1 => {
                LookupError::RetriesExhausted {
                    attempts,
                    last: Box::new(last),
                }
            }
            RetryError::AttemptsExceeded(last, _) => last,
        })
    }
}

fn classify_send_error(err: reqwest::Error, url: &Url) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout(url.to_string())
    } else {
        LookupError::Transport(err)
    }
}

#[async_trait]
impl NameLookup for ConsoleClient {
    async fn find_by_name(&self, name: &str) -> Result<Option<ConnectionId>, LookupError> {
        let mut url = self.endpoint(&[CONNECTIONS, FIND_BY_NAME])?;
        url.query_pairs_mut().append_pair("name", name);
        let url = &url;

        debug!("Looking up connection name '{name}'");
        let body = self
            .with_retry("Name lookup", move || {
                self.fetch_text(self.http.get(url.clone()), url)
            })
            .await?;

        let existing = ConnectionId::from_lookup(&body);
        match &existing {
            Some(id) => info!("Connection name '{name}' is taken by connection {id}"),
            None => debug!("Connection name '{name}' is free"),
        }
        Ok(existing)
    }
}

#[async_trait]
impl ConnectionMetadata for ConsoleClient {
    async fn engine_kind(&self, id: &str) -> Result<EngineKind, LookupError> {
        let url = &self.endpoint(&[CONNECTIONS, id.trim()])?;

        debug!("Fetching details of connection {id}");
        let body = self
            .with_retry("Connection lookup", move || {
                self.fetch_text(self.http.get(url.clone()), url)
            })
            .await?;

        let details = ConnectionDetails::from_json(&body).map_err(|e| {
            LookupError::MalformedResponse(format!("connection {id} details: {e}"))
        })?;
        Ok(details.ds_type)
    }
}

#[async_trait]
impl ConnectionTester for ConsoleClient {
    async fn test_connection(&self, request: &ConnectionTestRequest) -> Result<bool, LookupError> {
        let url = &self.endpoint(&[CONNECTIONS, TEST])?;

        info!(
            "Testing {} connection '{}'",
            request.ds_type, request.ds_name
        );
        // Not retried: a connection test may take as long as the timeout on its own.
        let body = self
            .fetch_text(self.http.post(url.clone()).json(request), url)
            .await?;

        let connected = body.trim() == "true";
        if connected {
            info!("Connection test for '{}' succeeded", request.ds_name);
        } else {
            warn!("Connection test for '{}' failed", request.ds_name);
        }
        Ok(connected)
    }
}
