use crate::constants::{
    GCSIGN_ENDPOINT, GCSIGN_PRIVATE_KEY, GCSIGN_PRIVATE_KEY_PATH, GCSIGN_SERVICE_ACCOUNT_EMAIL,
    GOOGLE_APPLICATION_CREDENTIALS,
};
use gcsign_core::utils::Redact;
use gcsign_core::Context;
use std::fmt::{self, Debug};

/// Config carries all the configuration for signing GCS URLs.
#[derive(Clone, Default)]
pub struct Config {
    /// Endpoint signed URLs point at, defaults to the public GCS endpoint.
    pub endpoint: Option<String>,
    /// Service account email used as `GoogleAccessId`.
    pub client_email: Option<String>,
    /// Path of a PEM or DER private key file.
    pub private_key_path: Option<String>,
    /// Private key content in PEM.
    pub private_key_content: Option<String>,
    /// Path of a service account JSON key file.
    pub credential_path: Option<String>,
    /// Disable reading from environment variables.
    pub disable_env: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("client_email", &self.client_email)
            .field("private_key_path", &self.private_key_path)
            .field("private_key_content", &Redact::from(&self.private_key_content))
            .field("credential_path", &self.credential_path)
            .field("disable_env", &self.disable_env)
            .finish()
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the service account email.
    pub fn with_client_email(mut self, client_email: impl Into<String>) -> Self {
        self.client_email = Some(client_email.into());
        self
    }

    /// Set private key file path.
    pub fn with_private_key_path(mut self, path: impl Into<String>) -> Self {
        self.private_key_path = Some(path.into());
        self
    }

    /// Set private key content.
    pub fn with_private_key_content(mut self, content: impl Into<String>) -> Self {
        self.private_key_content = Some(content.into());
        self
    }

    /// Set service account key file path.
    pub fn with_credential_path(mut self, path: impl Into<String>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Disable reading from environment variables.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            endpoint: ctx.env_var(GCSIGN_ENDPOINT),
            client_email: ctx.env_var(GCSIGN_SERVICE_ACCOUNT_EMAIL),
            private_key_path: ctx.env_var(GCSIGN_PRIVATE_KEY_PATH),
            private_key_content: ctx.env_var(GCSIGN_PRIVATE_KEY),
            credential_path: ctx.env_var(GOOGLE_APPLICATION_CREDENTIALS),
            disable_env: false,
        }
    }

    /// Fill every unset field from `other`.
    ///
    /// Values already set on `self` win.
    pub fn merge(self, other: Config) -> Self {
        Self {
            endpoint: self.endpoint.or(other.endpoint),
            client_email: self.client_email.or(other.client_email),
            private_key_path: self.private_key_path.or(other.private_key_path),
            private_key_content: self.private_key_content.or(other.private_key_content),
            credential_path: self.credential_path.or(other.credential_path),
            disable_env: self.disable_env || other.disable_env,
        }
    }
}
