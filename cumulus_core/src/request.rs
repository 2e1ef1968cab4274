use core::fmt;
use std::time::Duration;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::client::{Client, BASE_URL};
use crate::envelope::Envelope;
use crate::error::Error;
use crate::query::{append_parameters, QueryMap};
use crate::transport::{BuiltRequest, Transport};

/// One request in the making: path, method, optional body, and
/// per-request overrides. Built fresh per call and consumed by dispatch;
/// never reused.
pub struct PendingRequest<'a, T: Transport> {
    client: &'a Client<T>,
    method: Method,
    path: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    query: QueryMap,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl<'a, T: Transport> PendingRequest<'a, T> {
    pub(crate) fn new(client: &'a Client<T>, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
            headers: Vec::new(),
            query: QueryMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Per-request header override. Wins over the client's standing
    /// headers on conflict.
    #[inline]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Appends a query parameter when `value` is present. Parameters are
    /// encoded in insertion order with [`append_parameters`] semantics
    /// (no escaping).
    #[inline]
    pub fn query(mut self, name: impl Into<String>, value: Option<impl fmt::Display>) -> Self {
        self.query.push(name, value);
        self
    }

    #[inline]
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    /// Serializes `body` as the JSON request payload.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        let encoded = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    /// Nullable entry point: dispatches and yields the decoded envelope,
    /// or `None` exactly when the API answered 404.
    pub async fn envelope<Out: DeserializeOwned>(self) -> Result<Option<Envelope<Out>>, Error> {
        let client = self.client;
        let built = self.into_built()?;
        client.dispatch(built).await
    }

    /// Non-nullable entry point: dispatches and yields the result value.
    /// An absent resource (404) or an envelope without a result is
    /// [`Error::EmptyResult`].
    pub async fn execute<Out: DeserializeOwned>(self) -> Result<Out, Error> {
        match self.envelope::<Out>().await? {
            Some(envelope) => envelope.result.ok_or(Error::EmptyResult),
            None => Err(Error::EmptyResult),
        }
    }

    fn into_built(self) -> Result<BuiltRequest, Error> {
        let path = append_parameters(self.path, &self.query);
        let url = Url::parse(&format!("{BASE_URL}{path}"))?;

        let mut headers = self.client.standing_headers().clone();
        for (name, value) in self.headers {
            headers.insert(name, value);
        }
        if self.body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(BuiltRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
            timeout: self.timeout,
        })
    }
}
