use anyhow::Result;
use gcsign_core::hash::base64_md5;
use gcsign_core::{Context, OsEnv, ProvideCredential};
use gcsign_file_read_tokio::TokioFileRead;
use gcsign_google::{Config, DefaultCredentialProvider, SigningRequest, UrlSigner, Verb};
use log::info;
use std::env;

/// Print signed URLs to create, read and delete one object.
///
/// ```shell
/// GCSIGN_SERVICE_ACCOUNT_EMAIL=abcdef@developer.gserviceaccount.com \
/// GCSIGN_PRIVATE_KEY_PATH=~/privatekey.der \
/// cargo run --example signed_url -- bucket-name object.txt
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let bucket = env::args().nth(1).unwrap_or_else(|| "bucket-name".to_string());
    let object = env::args().nth(2).unwrap_or_else(|| "object.txt".to_string());
    let path = format!("/{bucket}/{object}");

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(OsEnv);
    let config = Config::from_env(&ctx);
    let Some(cred) = DefaultCredentialProvider::new(config.clone())
        .provide_credential(&ctx)
        .await?
    else {
        anyhow::bail!("no credential configured, set GCSIGN_SERVICE_ACCOUNT_EMAIL and GCSIGN_PRIVATE_KEY_PATH");
    };
    info!("loaded credential: {cred:?}");

    let signer = UrlSigner::from_config(&config);
    let expiration = UrlSigner::default_expiration();

    let data = "blah blah";
    let put = SigningRequest::new(Verb::Put, &path, expiration)
        .with_content_type("text/plain")
        .with_content_md5(base64_md5(data.as_bytes()));
    println!("PUT    {}", signer.build_signed_url(&put, &cred)?);
    println!("       Content-Type: text/plain");
    println!("       Content-MD5: {}", base64_md5(data.as_bytes()));

    for verb in [Verb::Get, Verb::Delete] {
        let req = SigningRequest::new(verb, &path, expiration);
        println!("{:<6} {}", verb.as_str(), signer.build_signed_url(&req, &cred)?);
    }

    Ok(())
}
