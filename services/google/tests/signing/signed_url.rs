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

use super::init_signing_test;
use anyhow::Result;
use gcsign_core::hash::base64_md5;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

const OBJECT_BODY: &str = "blah blah";

async fn send(req: Request<String>) -> Result<(StatusCode, String)> {
    debug!("signed request: {req:?}");

    let resp = Client::new().execute(req.try_into()?).await?;
    let status = resp.status();
    let body = resp.text().await?;
    debug!("got response ({status}): {body}");
    Ok((status, body))
}

#[tokio::test]
async fn test_put_get_delete_with_signed_url() -> Result<()> {
    let Some((signer, bucket_url)) = init_signing_test() else {
        warn!("GCSIGN_GOOGLE_TEST is not set, skipped");
        return Ok(());
    };
    let object_url = format!("{bucket_url}/gcsign-{}.txt", std::process::id());

    // Create
    let req = Request::builder()
        .method(Method::PUT)
        .uri(&object_url)
        .header(CONTENT_TYPE, "text/plain")
        .header("content-md5", base64_md5(OBJECT_BODY.as_bytes()))
        .body(OBJECT_BODY.to_string())?;
    let (mut parts, body) = req.into_parts();
    signer
        .sign(&mut parts, Some(Duration::from_secs(3600)))
        .await
        .expect("sign request must succeed");
    let (status, _) = send(Request::from_parts(parts, body)).await?;
    assert_eq!(StatusCode::OK, status);

    // Retrieve
    let req = Request::builder()
        .method(Method::GET)
        .uri(&object_url)
        .body(String::new())?;
    let (mut parts, body) = req.into_parts();
    signer
        .sign(&mut parts, Some(Duration::from_secs(3600)))
        .await
        .expect("sign request must succeed");
    let (status, content) = send(Request::from_parts(parts, body)).await?;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(OBJECT_BODY, content);

    // Delete
    let req = Request::builder()
        .method(Method::DELETE)
        .uri(&object_url)
        .body(String::new())?;
    let (mut parts, body) = req.into_parts();
    signer
        .sign(&mut parts, Some(Duration::from_secs(3600)))
        .await
        .expect("sign request must succeed");
    let (status, _) = send(Request::from_parts(parts, body)).await?;
    assert_eq!(StatusCode::NO_CONTENT, status);

    Ok(())
}

#[tokio::test]
async fn test_get_missing_object_with_signed_url() -> Result<()> {
    let Some((signer, bucket_url)) = init_signing_test() else {
        warn!("GCSIGN_GOOGLE_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("{bucket_url}/not_exist_file"))
        .body(String::new())?;
    let (mut parts, body) = req.into_parts();
    signer
        .sign(&mut parts, Some(Duration::from_secs(3600)))
        .await
        .expect("sign request must succeed");

    let (status, _) = send(Request::from_parts(parts, body)).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}
