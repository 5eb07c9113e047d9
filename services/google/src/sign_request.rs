use gcsign_core::time::{self, DateTime};
use gcsign_core::{Context, Error, Result, SignRequest};
use http::header::{self, HeaderName};
use http::request::Parts;
use log::debug;
use percent_encoding::percent_decode_str;
use std::time::Duration;

use crate::build::UrlSigner;
use crate::config::Config;
use crate::credential::Credential;
use crate::request::{SigningRequest, Verb};

const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// RequestSigner turns an `http::Request` into a signed URL request.
///
/// The request URI is replaced by the signed URL. `Content-Type` and
/// `Content-MD5` headers are covered by the signature, so the request must
/// be sent with exactly those headers.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    signer: UrlSigner,
}

impl RequestSigner {
    /// Create a new RequestSigner against the public GCS endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RequestSigner whose endpoint comes from config.
    ///
    /// The endpoint applies to requests whose URI has no scheme and authority.
    pub fn from_config(config: &Config) -> Self {
        Self {
            signer: UrlSigner::from_config(config),
        }
    }

    /// Set the endpoint used for requests whose URI has no scheme and authority.
    ///
    /// Absolute request URIs keep their own scheme and authority.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.signer = self.signer.with_endpoint(endpoint);
        self
    }

    fn build_signing_request(
        &self,
        req: &Parts,
        now: DateTime,
        expires_in: Duration,
    ) -> Result<SigningRequest> {
        if req.uri.query().is_some() {
            return Err(Error::request_invalid(
                "request query is not covered by a signed url",
            ));
        }

        let verb = Verb::try_from(&req.method)?;
        let path = percent_decode_str(req.uri.path())
            .decode_utf8()
            .map_err(|e| Error::request_invalid("request path is not utf-8").with_source(e))?;
        let expiration = i64::try_from(expires_in.as_secs())
            .ok()
            .and_then(|secs| now.timestamp().checked_add(secs))
            .ok_or_else(|| Error::request_invalid("expiration is too large"))?;

        let mut signing_req = SigningRequest::new(verb, path, expiration);
        if let Some(v) = header_value(req, &header::CONTENT_TYPE)? {
            signing_req = signing_req.with_content_type(v);
        }
        if let Some(v) = header_value(req, &CONTENT_MD5)? {
            signing_req = signing_req.with_content_md5(v);
        }
        Ok(signing_req)
    }

    fn endpoint_for(&self, req: &Parts) -> UrlSigner {
        match (req.uri.scheme_str(), req.uri.authority()) {
            (Some(scheme), Some(authority)) => {
                UrlSigner::new().with_endpoint(format!("{scheme}://{authority}"))
            }
            _ => self.signer.clone(),
        }
    }
}

fn header_value(req: &Parts, name: &HeaderName) -> Result<Option<String>> {
    req.headers
        .get(name)
        .map(|v| {
            v.to_str().map(|v| v.trim().to_string()).map_err(|e| {
                Error::request_invalid(format!("header {name} is not valid ascii")).with_source(e)
            })
        })
        .transpose()
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let expires_in = expires_in
            .ok_or_else(|| Error::request_invalid("signed urls require an expiration"))?;

        let now = time::now();
        let signing_req = self.build_signing_request(req, now, expires_in)?;
        let url = self
            .endpoint_for(req)
            .build_signed_url_at(&signing_req, cred, now)?;
        debug!("signed url built for {} {}", signing_req.verb, signing_req.path);

        req.uri = url.to_uri()?;
        Ok(())
    }
}
