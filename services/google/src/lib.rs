//! Google Cloud Storage signed URLs.
//!
//! Builds V2 query-string signed URLs: the request's verb, content MD5,
//! content type, expiration and resource path are signed with the service
//! account's RSA key, and the result is appended as `GoogleAccessId`,
//! `Expires` and `Signature` query parameters.
//!
//! ```no_run
//! use gcsign_google::{build_signed_url, Credential, SigningRequest, Verb};
//!
//! # fn example(der: &[u8]) -> gcsign_core::Result<()> {
//! let cred = Credential::from_key_bytes("svc@project.iam.gserviceaccount.com", der)?;
//! let req = SigningRequest::new(Verb::Put, "/bucket-name/object.txt", 1893456000)
//!     .with_content_type("text/plain");
//! let url = build_signed_url(&req, &cred)?;
//! println!("{url}");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::GCS_API_ENDPOINT;

mod key;
pub use key::PrivateKey;

mod credential;
pub use credential::{Credential, ServiceAccount};

mod config;
pub use config::Config;

mod request;
pub use request::{SignedUrl, SigningRequest, Verb};

mod build;
pub use build::{build_signed_url, string_to_sign, UrlSigner};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, StaticCredentialProvider,
};
