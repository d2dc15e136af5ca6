use std::fmt::{Debug, Formatter};

use super::constants::*;
use crate::Credential;
use showcase_core::{utils::Redact, Context, Error, Result};

/// Config carries all the configuration for the Showcase client.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SHOWCASE_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SHOWCASE_API_SECRET`]
    pub api_secret: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SHOWCASE_ENDPOINT`]
    /// - default: [`DEFAULT_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `sso_base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SHOWCASE_SSO_BASE_URL`]
    /// - default: [`DEFAULT_SSO_BASE_URL`]
    pub sso_base_url: Option<String>,
    /// Locale segment of SSO redirect URLs, `fr` if unset.
    pub sso_locale: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set sso_base_url
    pub fn with_sso_base_url(mut self, sso_base_url: impl Into<String>) -> Self {
        self.sso_base_url = Some(sso_base_url.into());
        self
    }

    /// Set sso_locale
    pub fn with_sso_locale(mut self, sso_locale: impl Into<String>) -> Self {
        self.sso_locale = Some(sso_locale.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are left untouched.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(SHOWCASE_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SHOWCASE_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SHOWCASE_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SHOWCASE_SSO_BASE_URL) {
            self.sso_base_url.get_or_insert(v);
        }

        self
    }

    /// Build the credential, failing on the first missing part.
    pub fn credential(&self) -> Result<Credential> {
        let api_key = match self.api_key.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Error::credential_invalid("api key is required")),
        };
        let api_secret = match self.api_secret.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Error::credential_invalid("api secret is required")),
        };

        Ok(Credential::new(api_key, api_secret))
    }

    /// Endpoint of the REST API, without trailing slash.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
    }

    /// Base URL of the hosted SSO pages, without trailing slash.
    pub fn sso_base_url(&self) -> &str {
        self.sso_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SSO_BASE_URL)
            .trim_end_matches('/')
    }

    /// Locale segment of SSO redirect URLs.
    pub fn sso_locale(&self) -> &str {
        self.sso_locale.as_deref().unwrap_or(DEFAULT_SSO_LOCALE)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(Redact::from))
            .field("endpoint", &self.endpoint)
            .field("sso_base_url", &self.sso_base_url)
            .field("sso_locale", &self.sso_locale)
            .finish()
    }
}
