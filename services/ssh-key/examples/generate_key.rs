use provsign_core::{Context, Result};
use provsign_file_write_tokio::TokioFileWrite;
use provsign_ssh_key::{download_private_key, SshKeyPair};

// Run with: cargo run --example generate_key -- foundry-installer.pem
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "foundry-installer.pem".to_string());

    let key = SshKeyPair::generate()?;
    println!("{}", key.public_key_openssh);
    println!("fingerprint: {}", key.fingerprint);
    println!("ssh-keygen:  {}", key.openssh_fingerprint()?);

    let ctx = Context::new().with_file_write(TokioFileWrite);
    download_private_key(&ctx, &key.private_key_pem, &filename).await?;
    Ok(())
}
