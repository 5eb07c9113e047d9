use async_trait::async_trait;
use log::debug;

use gcsign_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

use super::ConfigCredentialProvider;

/// DefaultCredentialProvider loads the credential from the given config
/// and, unless disabled, the environment.
///
/// Explicit config values win over environment variables. See
/// [`Config::from_env`] for the variables read.
#[derive(Debug, Clone, Default)]
pub struct DefaultCredentialProvider {
    config: Config,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = if self.config.disable_env {
            self.config.clone()
        } else {
            self.config.clone().merge(Config::from_env(ctx))
        };
        debug!("resolved credential config: {config:?}");

        ConfigCredentialProvider::new(config)
            .provide_credential(ctx)
            .await
    }
}
