use crate::constants::GOOG_QUERY_ENCODE_SET;
use gcsign_core::{Error, Result};
use percent_encoding::utf8_percent_encode;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Verb is the HTTP method a signed URL is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `GET`: download an object.
    Get,
    /// `HEAD`: read object metadata.
    Head,
    /// `PUT`: upload an object.
    Put,
    /// `POST`: start a resumable upload.
    Post,
    /// `DELETE`: remove an object.
    Delete,
}

impl Verb {
    /// The verb as it appears on the wire and in the string-to-sign.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Verb::Get),
            "HEAD" => Ok(Verb::Head),
            "PUT" => Ok(Verb::Put),
            "POST" => Ok(Verb::Post),
            "DELETE" => Ok(Verb::Delete),
            v => Err(Error::request_invalid(format!(
                "verb {v} is not supported by signed urls"
            ))),
        }
    }
}

impl TryFrom<&http::Method> for Verb {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self> {
        method.as_str().parse()
    }
}

impl From<Verb> for http::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => http::Method::GET,
            Verb::Head => http::Method::HEAD,
            Verb::Put => http::Method::PUT,
            Verb::Post => http::Method::POST,
            Verb::Delete => http::Method::DELETE,
        }
    }
}

/// SigningRequest carries every field covered by a signed URL.
///
/// ```
/// use gcsign_google::{SigningRequest, Verb};
///
/// let req = SigningRequest::new(Verb::Put, "/my-bucket/obj.txt", 1893456000)
///     .with_content_type("text/plain");
/// assert_eq!(req.content_type.as_deref(), Some("text/plain"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP verb the URL is valid for.
    pub verb: Verb,
    /// Resource path in `/bucket/object` form, not percent-encoded.
    pub path: String,
    /// Expiration as a Unix timestamp in seconds.
    pub expiration: i64,
    /// Base64 MD5 of the body the caller will send, if any.
    pub content_md5: Option<String>,
    /// Content type the caller will send, if any.
    pub content_type: Option<String>,
}

impl SigningRequest {
    /// Create a new signing request without content headers.
    pub fn new(verb: Verb, path: impl Into<String>, expiration: i64) -> Self {
        Self {
            verb,
            path: path.into(),
            expiration,
            content_md5: None,
            content_type: None,
        }
    }

    /// Set the content MD5.
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// SignedUrl is the base resource URL plus its authentication query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    /// Endpoint and encoded resource path, without query.
    pub base_url: String,
    /// Query parameters in order, not yet encoded.
    pub query: Vec<(String, String)>,
}

impl SignedUrl {
    /// Look up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Build the encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, &GOOG_QUERY_ENCODE_SET),
                    utf8_percent_encode(v, &GOOG_QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Convert into an `http::Uri`.
    pub fn to_uri(&self) -> Result<http::Uri> {
        Ok(self.to_string().parse::<http::Uri>()?)
    }
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            return f.write_str(&self.base_url);
        }
        write!(f, "{}?{}", self.base_url, self.query_string())
    }
}
