use anyhow::Result;
use gcsign_core::{Context, ErrorKind, ProvideCredential, StaticEnv};
use gcsign_file_read_tokio::TokioFileRead;
use gcsign_google::{Config, ConfigCredentialProvider};
use std::collections::HashMap;
use std::path::PathBuf;

fn testdata(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn ctx() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
            envs: HashMap::new(),
        })
}

#[tokio::test]
async fn test_every_key_file_format_loads() -> Result<()> {
    for name in [
        "test_key.pem",
        "test_key_pkcs1.pem",
        "test_key.der",
        "test_key_pkcs1.der",
    ] {
        let provider = ConfigCredentialProvider::new(
            Config::new()
                .with_client_email("svc@p.iam.gserviceaccount.com")
                .with_private_key_path(testdata(name)),
        );
        let cred = provider.provide_credential(&ctx()).await?;
        assert!(cred.is_some(), "{name} must load");
    }
    Ok(())
}

#[tokio::test]
async fn test_key_file_relative_to_home() -> Result<()> {
    let provider = ConfigCredentialProvider::new(
        Config::new()
            .with_client_email("svc@p.iam.gserviceaccount.com")
            .with_private_key_path("~/testdata/test_key.der"),
    );
    assert!(provider.provide_credential(&ctx()).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_service_account_key_file() -> Result<()> {
    let provider = ConfigCredentialProvider::new(
        Config::new().with_credential_path(testdata("service_account.json")),
    );
    let cred = provider
        .provide_credential(&ctx())
        .await?
        .expect("credential must load");
    assert_eq!(
        cred.client_email,
        "gcsign-test@gcsign-test.iam.gserviceaccount.com"
    );
    Ok(())
}

#[tokio::test]
async fn test_service_account_as_private_key_is_signing_error() {
    let provider = ConfigCredentialProvider::new(
        Config::new()
            .with_client_email("svc@p.iam.gserviceaccount.com")
            .with_private_key_path(testdata("service_account.json")),
    );
    let err = provider.provide_credential(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningFailed);
}
