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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// The Google Cloud Storage XML API endpoint.
pub const GCS_API_ENDPOINT: &str = "https://storage.googleapis.com";

// Env values used by gcsign.
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const GCSIGN_SERVICE_ACCOUNT_EMAIL: &str = "GCSIGN_SERVICE_ACCOUNT_EMAIL";
pub const GCSIGN_PRIVATE_KEY_PATH: &str = "GCSIGN_PRIVATE_KEY_PATH";
pub const GCSIGN_PRIVATE_KEY: &str = "GCSIGN_PRIVATE_KEY";
pub const GCSIGN_ENDPOINT: &str = "GCSIGN_ENDPOINT";

// Query parameters of a signed URL.
pub const GOOGLE_ACCESS_ID: &str = "GoogleAccessId";
pub const EXPIRES: &str = "Expires";
pub const SIGNATURE: &str = "Signature";

// Signed URLs default to one day of validity.
pub const DEFAULT_EXPIRATION_SECS: i64 = 24 * 60 * 60;

/// AsciiSet for query values of a signed URL.
///
/// Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// Base64 signatures therefore come out with `+`, `/` and `=` escaped.
pub static GOOG_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for the resource path of a signed URL.
///
/// Same as [`GOOG_QUERY_ENCODE_SET`] but keeps `/` so bucket and object stay separate segments.
pub static GOOG_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
