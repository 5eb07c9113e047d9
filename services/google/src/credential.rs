use crate::key::PrivateKey;
use gcsign_core::{Error, Result, SigningCredential};
use serde::Deserialize;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// ServiceAccount is the subset of a Google service account JSON key file
/// needed to sign URLs.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceAccount {
    /// Private key of credential, in PKCS#8 PEM.
    pub private_key: String,
    /// The client email of credential.
    pub client_email: String,
}

impl Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccount {
    /// Parse a service account from JSON key file content.
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        serde_json::from_slice(content).map_err(|e| {
            Error::config_invalid("failed to parse service account key file").with_source(e)
        })
    }
}

/// Credential holds the account identifier and the parsed private key.
///
/// The key is parsed once when the credential is built and is never
/// mutated afterwards; clones share it.
#[derive(Clone)]
pub struct Credential {
    /// The service account email, sent as `GoogleAccessId`.
    pub client_email: String,
    private_key: Arc<PrivateKey>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("client_email", &self.client_email)
            .field("private_key", &self.private_key)
            .finish()
    }
}

impl Credential {
    /// Create a credential from an email and an already parsed key.
    pub fn new(client_email: impl Into<String>, private_key: PrivateKey) -> Self {
        Self {
            client_email: client_email.into(),
            private_key: Arc::new(private_key),
        }
    }

    /// Create a credential from an email and PEM or DER key bytes.
    ///
    /// Fails with a signing error if the key cannot be parsed.
    pub fn from_key_bytes(client_email: impl Into<String>, key: &[u8]) -> Result<Self> {
        Ok(Self::new(client_email, PrivateKey::from_bytes(key)?))
    }

    /// Create a credential from a service account key file.
    pub fn from_service_account(sa: ServiceAccount) -> Result<Self> {
        Self::from_key_bytes(sa.client_email, sa.private_key.as_bytes())
    }

    /// The private key of this credential.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.client_email.is_empty()
    }
}
