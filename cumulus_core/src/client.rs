use http::header::{AUTHORIZATION, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::credentials::Credentials;
use crate::envelope::Envelope;
use crate::error::{body_as_text, Error};
use crate::request::PendingRequest;
use crate::transport::{BuiltRequest, ReqwestTransport, Transport, TransportConfig};

/// Root URL for the API. Every request path is appended to this verbatim.
pub const BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Connection cap handed to the transport engine at selection time.
pub const PARALLEL_COUNT: usize = 16;

const X_AUTH_EMAIL: &str = "x-auth-email";
const X_AUTH_KEY: &str = "x-auth-key";

/// The single authenticated entry point.
///
/// Owns the credentials, the composed standing headers, and one
/// transport instance for its entire lifetime. Construction performs no
/// network I/O; the transport is shared by all in-flight requests and
/// must be safe for concurrent invocation.
#[derive(Clone)]
pub struct Client<T: Transport = ReqwestTransport> {
    transport: T,
    credentials: Credentials,
    headers: HeaderMap,
}

impl Client<ReqwestTransport> {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        ClientBuilder::new().credentials(credentials).build()
    }

    pub fn with_token(api_token: impl Into<crate::secret::SecretString>) -> Result<Self, Error> {
        Self::new(Credentials::token(api_token))
    }

    pub fn with_user_key(
        email: impl Into<String>,
        api_key: impl Into<crate::secret::SecretString>,
    ) -> Result<Self, Error> {
        Self::new(Credentials::user_key(email, api_key))
    }

    pub fn anonymous() -> Result<Self, Error> {
        Self::new(Credentials::anonymous())
    }
}

impl<T: Transport> Client<T> {
    /// Build a client over a caller-supplied transport (tests, alternate
    /// engines).
    pub fn with_transport(credentials: Credentials, transport: T) -> Result<Self, Error> {
        ClientBuilder::new()
            .credentials(credentials)
            .build_with_transport(transport)
    }

    #[inline]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Headers attached to every request before per-request overrides.
    #[inline]
    pub fn standing_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Start a request against `path` (caller supplies the leading
    /// slash; no normalization is performed).
    #[inline]
    pub fn request(&self, method: Method, path: impl Into<String>) -> PendingRequest<'_, T> {
        PendingRequest::new(self, method, path.into())
    }

    pub async fn get<Out: DeserializeOwned>(&self, path: impl Into<String>) -> Result<Out, Error> {
        self.request(Method::GET, path).execute().await
    }

    pub async fn post<B, Out>(&self, path: impl Into<String>, body: Option<&B>) -> Result<Out, Error>
    where
        B: Serialize + ?Sized,
        Out: DeserializeOwned,
    {
        let mut req = self.request(Method::POST, path);
        if let Some(b) = body {
            req = req.json(b)?;
        }
        req.execute().await
    }

    pub async fn put<B, Out>(&self, path: impl Into<String>, body: &B) -> Result<Out, Error>
    where
        B: Serialize + ?Sized,
        Out: DeserializeOwned,
    {
        self.request(Method::PUT, path).json(body)?.execute().await
    }

    pub async fn patch<B, Out>(&self, path: impl Into<String>, body: &B) -> Result<Out, Error>
    where
        B: Serialize + ?Sized,
        Out: DeserializeOwned,
    {
        self.request(Method::PATCH, path)
            .json(body)?
            .execute()
            .await
    }

    pub async fn delete<Out: DeserializeOwned>(
        &self,
        path: impl Into<String>,
    ) -> Result<Out, Error> {
        self.request(Method::DELETE, path).execute().await
    }

    /// Send one built request and classify the outcome.
    ///
    /// Returns `Ok(None)` exactly for a 404. Status classification runs
    /// before envelope decoding: 403/404 bodies need not be well-formed
    /// envelopes at all.
    pub(crate) async fn dispatch<Out: DeserializeOwned>(
        &self,
        req: BuiltRequest,
    ) -> Result<Option<Envelope<Out>>, Error> {
        debug!(method = %req.method, url = %req.url, "dispatching request");
        let url = req.url.clone();

        let resp = self.transport.send(req).await?;
        let status = resp.status;
        debug!(status = status.as_u16(), %url, "response received");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication);
        }
        if !status.is_success() {
            let preview = body_as_text(&resp.headers, &resp.body);
            return Err(Error::HttpStatus {
                status,
                headers: resp.headers,
                body: preview,
            });
        }

        let envelope: Envelope<Out> = serde_json::from_slice(&resp.body).map_err(|e| {
            Error::Decode {
                source: e.into(),
                body: body_as_text(&resp.headers, &resp.body),
            }
        })?;
        if !envelope.success {
            return Err(Error::Envelope(envelope.errors));
        }
        Ok(Some(envelope))
    }
}

pub struct ClientBuilder {
    credentials: Credentials,
    transport_config: TransportConfig,
    user_agent: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            credentials: Credentials::anonymous(),
            transport_config: TransportConfig::default(),
            user_agent: None,
        }
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn token(self, api_token: impl Into<crate::secret::SecretString>) -> Self {
        self.credentials(Credentials::token(api_token))
    }

    pub fn user_key(
        self,
        email: impl Into<String>,
        api_key: impl Into<crate::secret::SecretString>,
    ) -> Self {
        self.credentials(Credentials::user_key(email, api_key))
    }

    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// One-shot customization hook applied at build time.
    pub fn configure(self, f: impl FnOnce(Self) -> Self) -> Self {
        f(self)
    }

    pub fn build(self) -> Result<Client<ReqwestTransport>, Error> {
        let transport = ReqwestTransport::with_config(self.transport_config)?;
        self.build_with_transport(transport)
    }

    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<Client<T>, Error> {
        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        let headers = compose_headers(&self.credentials, &user_agent)?;
        Ok(Client {
            transport,
            credentials: self.credentials,
            headers,
        })
    }
}

fn default_user_agent() -> String {
    format!(
        "cumulus/{}, {} {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Compose the standing header set once, at construction.
///
/// The token owns `Authorization` when present; email/key headers are
/// attached whenever supplied, even alongside a token. Whether the API
/// accepts the combination is not pre-validated here.
fn compose_headers(credentials: &Credentials, user_agent: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).map_err(|_| Error::InvalidParam("user agent"))?,
    );

    if let Some(email) = credentials.email() {
        headers.insert(
            HeaderName::from_static(X_AUTH_EMAIL),
            HeaderValue::from_str(email).map_err(|_| Error::InvalidParam("email"))?,
        );
    }
    if let Some(key) = credentials.api_key() {
        let mut value =
            HeaderValue::from_str(key.expose()).map_err(|_| Error::InvalidParam("api key"))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(X_AUTH_KEY), value);
    }
    if let Some(token) = credentials.api_token() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| Error::InvalidParam("api token"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
