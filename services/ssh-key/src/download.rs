use log::info;
use provsign_core::{Context, Error, Result};

/// Hand the PEM private key to the user by writing it to `filename`.
///
/// The file is written through the context's [`provsign_core::FileWrite`], so
/// the permissions of the created file are up to that implementation.
pub async fn download_private_key(ctx: &Context, pem: &str, filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(Error::invalid_request("private key filename must not be empty"));
    }

    ctx.file_write(filename, pem.as_bytes()).await?;
    info!("private key written to {filename}");
    Ok(())
}
