use log::info;
use provsign_core::{Context, OsEnv, ProvideCredential, Result};
use provsign_http_send_reqwest::ReqwestHttpSend;
use provsign_s3_v4::{Config, EnvCredentialProvider};
use std::time::Duration;

// Run with:
//
// PROVSIGN_S3_PROVIDER=hetzner PROVSIGN_S3_REGION=fsn1 PROVSIGN_S3_BUCKET=foundry-assets \
// PROVSIGN_S3_ALLOWED_ORIGIN=https://foundry.example.com \
// PROVSIGN_S3_ACCESS_KEY_ID=... PROVSIGN_S3_SECRET_ACCESS_KEY=... \
// cargo run --example provision_bucket
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx)?;
    let http = ReqwestHttpSend::with_timeout(config.timeout.unwrap_or(Duration::from_secs(30)))?;
    let ctx = ctx.with_http_send(http);

    let Some(cred) = EnvCredentialProvider::new().provide_credential(&ctx).await? else {
        eprintln!("no access key pair found in the environment");
        return Ok(());
    };

    let provider = config.provider()?;
    let region = config.region()?;
    let bucket = config.bucket()?;

    provider.create_bucket(&ctx, &cred, region, bucket).await?;
    info!("bucket {bucket} is ready in {region}");

    let valid = provider
        .validate_and_configure(&ctx, &cred, region, bucket, config.allowed_origin.as_deref())
        .await?;
    println!("credential valid: {valid}");
    Ok(())
}
