use crate::secret::SecretString;

/// Authentication material for the API.
///
/// Two shapes are meaningful: an email + API key pair, or an API token.
/// An anonymous client is also permitted (most endpoints will then fail
/// server-side). When both shapes are supplied, the token owns the
/// `Authorization` header while the email/key headers are still
/// attached; the API decides whether it accepts the combination.
///
/// Immutable once the client is constructed.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    email: Option<String>,
    api_key: Option<SecretString>,
    api_token: Option<SecretString>,
}

impl Credentials {
    /// Credentials for the `Authorization: Bearer` header.
    pub fn token(api_token: impl Into<SecretString>) -> Self {
        Self {
            email: None,
            api_key: None,
            api_token: Some(api_token.into()),
        }
    }

    /// Credentials for the paired `X-Auth-Email` / `X-Auth-Key` headers.
    pub fn user_key(email: impl Into<String>, api_key: impl Into<SecretString>) -> Self {
        Self {
            email: Some(email.into()),
            api_key: Some(api_key.into()),
            api_token: None,
        }
    }

    /// No authentication headers at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attach a token to an existing email/key pair.
    pub fn with_token(mut self, api_token: impl Into<SecretString>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    #[inline]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[inline]
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    #[inline]
    pub fn api_token(&self) -> Option<&SecretString> {
        self.api_token.as_ref()
    }
}
