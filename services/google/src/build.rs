// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use gcsign_core::hash::base64_encode;
use gcsign_core::time::{self, DateTime};
use gcsign_core::{Error, Result};
use log::debug;
use percent_encoding::utf8_percent_encode;

use crate::constants::{
    DEFAULT_EXPIRATION_SECS, EXPIRES, GCS_API_ENDPOINT, GOOGLE_ACCESS_ID, GOOG_URI_ENCODE_SET,
    SIGNATURE,
};
use crate::config::Config;
use crate::credential::Credential;
use crate::request::{SignedUrl, SigningRequest};

/// UrlSigner builds signed URLs for Google Cloud Storage.
///
/// - [Signed URLs (V2)](https://cloud.google.com/storage/docs/access-control/signed-urls-v2)
///
/// ```no_run
/// use gcsign_google::{Credential, SigningRequest, UrlSigner, Verb};
///
/// # fn example(cred: Credential) -> gcsign_core::Result<()> {
/// let signer = UrlSigner::new();
/// let req = SigningRequest::new(Verb::Get, "/bucket-name/object.txt", UrlSigner::default_expiration());
/// let url = signer.build_signed_url(&req, &cred)?;
/// println!("{url}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UrlSigner {
    endpoint: String,
}

impl Default for UrlSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlSigner {
    /// Create a signer against the public GCS endpoint.
    pub fn new() -> Self {
        Self {
            endpoint: GCS_API_ENDPOINT.to_string(),
        }
    }

    /// Create a signer from config, falling back to the public GCS endpoint.
    pub fn from_config(config: &Config) -> Self {
        match &config.endpoint {
            Some(endpoint) => Self::new().with_endpoint(endpoint.as_str()),
            None => Self::new(),
        }
    }

    /// Set the endpoint, e.g. for an emulator.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// The endpoint signed URLs point at.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Expiration one day from now, as a Unix timestamp.
    pub fn default_expiration() -> i64 {
        time::now().timestamp() + DEFAULT_EXPIRATION_SECS
    }

    /// Build a signed URL for the request.
    ///
    /// Fails with a request error when the request is incomplete or already
    /// expired, and with a signing error when the key cannot sign.
    pub fn build_signed_url(&self, req: &SigningRequest, cred: &Credential) -> Result<SignedUrl> {
        self.build_signed_url_at(req, cred, time::now())
    }

    pub(crate) fn build_signed_url_at(
        &self,
        req: &SigningRequest,
        cred: &Credential,
        now: DateTime,
    ) -> Result<SignedUrl> {
        validate(req, cred, now)?;

        let string_to_sign = string_to_sign(req);
        debug!("calculated string to sign: {string_to_sign:?}");

        let signature = cred.private_key().sign_sha256(string_to_sign.as_bytes())?;

        Ok(SignedUrl {
            base_url: format!(
                "{}{}",
                self.endpoint,
                utf8_percent_encode(&req.path, &GOOG_URI_ENCODE_SET)
            ),
            query: vec![
                (GOOGLE_ACCESS_ID.to_string(), cred.client_email.clone()),
                (EXPIRES.to_string(), req.expiration.to_string()),
                (SIGNATURE.to_string(), base64_encode(&signature)),
            ],
        })
    }
}

/// Build a signed URL against the public GCS endpoint.
pub fn build_signed_url(req: &SigningRequest, cred: &Credential) -> Result<SignedUrl> {
    UrlSigner::new().build_signed_url(req, cred)
}

/// Build the string-to-sign of a request.
///
/// Fields are joined by `\n` in this exact order: verb, content MD5,
/// content type, expiration, resource path. Missing fields leave an empty
/// line.
pub fn string_to_sign(req: &SigningRequest) -> String {
    let mut f = String::with_capacity(64 + req.path.len());
    f.push_str(req.verb.as_str());
    f.push('\n');
    f.push_str(req.content_md5.as_deref().unwrap_or_default());
    f.push('\n');
    f.push_str(req.content_type.as_deref().unwrap_or_default());
    f.push('\n');
    f.push_str(&req.expiration.to_string());
    f.push('\n');
    f.push_str(&req.path);
    f
}

fn validate(req: &SigningRequest, cred: &Credential, now: DateTime) -> Result<()> {
    if req.path.is_empty() {
        return Err(Error::request_invalid("resource path is required"));
    }
    let Some(resource) = req.path.strip_prefix('/') else {
        return Err(Error::request_invalid(format!(
            "resource path {} must start with '/'",
            req.path
        )));
    };
    if resource.split('/').next().unwrap_or_default().is_empty() {
        return Err(Error::request_invalid(format!(
            "resource path {} must name a bucket",
            req.path
        )));
    }
    for (name, value) in [
        ("content md5", &req.content_md5),
        ("content type", &req.content_type),
    ] {
        if value.as_deref().is_some_and(|v| v.contains(['\n', '\r'])) {
            return Err(Error::request_invalid(format!(
                "{name} must not contain line breaks"
            )));
        }
    }
    if req.expiration <= now.timestamp() {
        return Err(Error::request_invalid(format!(
            "expiration {} is not in the future",
            req.expiration
        )));
    }
    if cred.client_email.is_empty() {
        return Err(Error::request_invalid("account identifier is required"));
    }
    Ok(())
}
