use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and then kept read-only for the
/// lifetime of the signer and all of its clones.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<OnceCell<K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(OnceCell::new()),
        }
    }

    /// Load the credential, or return the one loaded before.
    pub async fn credential(&self) -> Result<&K> {
        self.credential
            .get_or_try_init(|| async {
                debug!("loading credential for signer");
                let cred = self
                    .loader
                    .provide_credential(&self.ctx)
                    .await?
                    .ok_or_else(|| Error::credential_invalid("no credential provided"))?;
                if !cred.is_valid() {
                    return Err(Error::credential_invalid(
                        "provided credential is not valid",
                    ));
                }
                Ok(cred)
            })
            .await
    }

    /// Signing request.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = self.credential().await?;

        self.builder
            .sign_request(&self.ctx, req, Some(cred), expires_in)
            .await
    }
}
