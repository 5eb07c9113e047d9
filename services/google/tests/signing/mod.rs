use gcsign_core::{Context, OsEnv, Signer};
use gcsign_file_read_tokio::TokioFileRead;
use gcsign_google::{Config, Credential, DefaultCredentialProvider, RequestSigner};
use std::env;

mod offline;
mod signed_url;

pub const TEST_EMAIL: &str = "gcsign-test@gcsign-test.iam.gserviceaccount.com";

/// Build a signer against a real bucket when `GCSIGN_GOOGLE_TEST=on`.
///
/// Credentials come from the usual env vars, see `Config::from_env`.
/// Returns the signer and the base url of the bucket, e.g.
/// `https://storage.googleapis.com/bucket-name`.
pub fn init_signing_test() -> Option<(Signer<Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("GCSIGN_GOOGLE_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let bucket_url =
        env::var("GCSIGN_GOOGLE_BUCKET_URL").expect("env GCSIGN_GOOGLE_BUCKET_URL must be set");

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(OsEnv);
    let config = Config::from_env(&ctx);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(config.clone()),
        RequestSigner::from_config(&config),
    );
    Some((signer, bucket_url.trim_end_matches('/').to_string()))
}
