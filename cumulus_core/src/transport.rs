use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::client::PARALLEL_COUNT;

/// One fully composed HTTP request, built fresh per dispatch and never
/// reused after it has been handed to the transport.
#[derive(Clone, Debug)]
pub struct BuiltRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug)]
pub struct TransportError(crate::error::BoxError);

impl TransportError {
    #[inline]
    pub fn new(e: impl Error + Send + Sync + 'static) -> Self {
        Self(Box::new(e))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

/// Injectable transport layer.
///
/// Contract:
/// - Must honor `BuiltRequest` fields (url/headers/body/timeout) as appropriate.
/// - Must be safe for concurrent invocation; the dispatcher adds no locking.
/// - Dropping the returned future must cancel the in-flight request.
/// - Must not leak a concrete HTTP client type in its public surface.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send>>;
}

/// Configuration handed to the concrete transport at selection time.
///
/// `max_connections` is the bounded-parallelism contract the core places
/// on whichever engine is plugged in; the core itself never pools.
#[derive(Clone, Copy, Debug)]
pub struct TransportConfig {
    pub max_connections: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_connections: PARALLEL_COUNT,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[inline]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_connections)
            .connect_timeout(config.connect_timeout);
        if let Some(t) = config.request_timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build().map_err(TransportError::from)?,
        })
    }

    #[inline]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send>> {
        let client = self.client.clone();
        Box::pin(async move {
            let mut rb = client
                .request(req.method, req.url)
                .headers(req.headers);
            if let Some(b) = req.body {
                rb = rb.body(b);
            }
            if let Some(t) = req.timeout {
                rb = rb.timeout(t);
            }
            let resp = rb.send().await.map_err(TransportError::from)?;
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp.bytes().await.map_err(TransportError::from)?;
            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        })
    }
}
