use async_trait::async_trait;
use log::debug;

use gcsign_core::{Context, Error, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::{Credential, ServiceAccount};

/// ConfigCredentialProvider loads the credential described by a [`Config`].
///
/// Sources are tried in order:
///
/// 1. `private_key_content` together with `client_email`.
/// 2. `private_key_path` together with `client_email`.
/// 3. `credential_path`, a service account JSON key file.
///
/// Returns `Ok(None)` if none of them is configured.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn client_email(&self) -> Result<&str> {
        self.config
            .client_email
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::config_invalid("client_email is required when a private key is configured")
            })
    }

    async fn read_file(&self, ctx: &Context, path: &str) -> Result<Vec<u8>> {
        let path = ctx.expand_home_dir(path).ok_or_else(|| {
            Error::config_invalid(format!("failed to expand home dir of {path}"))
        })?;
        ctx.file_read(&path).await
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        if let Some(content) = &self.config.private_key_content {
            debug!("loading private key from config content");
            let cred = Credential::from_key_bytes(self.client_email()?, content.as_bytes())?;
            return Ok(Some(cred));
        }

        if let Some(path) = &self.config.private_key_path {
            debug!("loading private key from file: {path}");
            let content = self.read_file(ctx, path).await.map_err(|e| {
                Error::signing_failed(format!("failed to read private key file {path}"))
                    .with_source(e)
            })?;
            let cred = Credential::from_key_bytes(self.client_email()?, &content)?;
            return Ok(Some(cred));
        }

        if let Some(path) = &self.config.credential_path {
            debug!("loading service account from file: {path}");
            let content = self.read_file(ctx, path).await?;
            let mut sa = ServiceAccount::from_slice(&content)?;
            if let Some(email) = self.config.client_email.as_ref().filter(|v| !v.is_empty()) {
                sa.client_email = email.clone();
            }
            return Credential::from_service_account(sa).map(Some);
        }

        debug!("no credential configured");
        Ok(None)
    }
}
