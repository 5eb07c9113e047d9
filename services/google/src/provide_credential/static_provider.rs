use log::debug;

use gcsign_core::{Context, ProvideCredential, Result};

use crate::credential::Credential;

/// StaticCredentialProvider provides a credential from an email and key
/// bytes given at construction time.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    client_email: String,
    private_key: Vec<u8>,
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("client_email", &self.client_email)
            .finish_non_exhaustive()
    }
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from an email and PEM or DER key bytes.
    pub fn new(client_email: impl Into<String>, private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: private_key.into(),
        }
    }
}

#[async_trait::async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        debug!("loading credential from static content");

        Credential::from_key_bytes(&self.client_email, &self.private_key).map(Some)
    }
}
