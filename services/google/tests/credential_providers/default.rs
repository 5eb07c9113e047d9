use anyhow::Result;
use gcsign_core::{Context, ErrorKind, ProvideCredential, Signer, StaticEnv};
use gcsign_file_read_tokio::TokioFileRead;
use gcsign_google::{Config, DefaultCredentialProvider, RequestSigner};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn ctx(envs: &[(&str, String)]) -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<HashMap<_, _>>(),
        })
}

fn service_account_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata/service_account.json")
        .to_string_lossy()
        .to_string()
}

#[tokio::test]
async fn test_google_application_credentials() -> Result<()> {
    let ctx = ctx(&[("GOOGLE_APPLICATION_CREDENTIALS", service_account_path())]);
    let cred = DefaultCredentialProvider::new(Config::new())
        .provide_credential(&ctx)
        .await?
        .expect("credential must load");
    assert_eq!(
        cred.client_email,
        "gcsign-test@gcsign-test.iam.gserviceaccount.com"
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_without_any_credential() {
    let signer = Signer::new(
        ctx(&[]),
        DefaultCredentialProvider::new(Config::new()),
        RequestSigner::new(),
    );
    let (mut parts, _) = http::Request::builder()
        .method(http::Method::GET)
        .uri("https://storage.googleapis.com/bucket-name/object.txt")
        .body(())
        .expect("request must be valid")
        .into_parts();

    let err = signer
        .sign(&mut parts, Some(Duration::from_secs(60)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
