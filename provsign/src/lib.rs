//! Signing object storage requests and encoding SSH keys for self-hosted provisioning.
//!
//! This crate re-exports the service crates behind feature gates:
//!
//! - `s3`: [`s3`], SigV4 signing and bucket provisioning for DigitalOcean
//!   Spaces and Hetzner Object Storage.
//! - `ssh`: [`ssh`], RSA key generation and OpenSSH encoding.
//! - `default-context`: [`default_context`] and
//!   [`default_context_with_timeout`], a [`Context`] wired with reqwest, tokio
//!   and the process environment.
//!
//! ```no_run
//! use provsign::s3::{Config, EnvCredentialProvider, StorageProvider};
//! use provsign::{Context, OsEnv, ProvideCredential};
//! use std::time::Duration;
//!
//! # async fn example() -> provsign::Result<()> {
//! let config = Config::default().from_env(&Context::new().with_env(OsEnv))?;
//! let ctx = provsign::default_context_with_timeout(
//!     config.timeout.unwrap_or(Duration::from_secs(30)),
//! )?;
//! let provider = config.provider()?;
//! let cred = EnvCredentialProvider::new()
//!     .provide_credential(&ctx)
//!     .await?
//!     .expect("access key pair must be set");
//!
//! provider
//!     .create_bucket(&ctx, &cred, config.region()?, config.bucket()?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use provsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_timeout};

#[cfg(feature = "s3")]
pub mod s3 {
    pub use provsign_s3_v4::*;
}

#[cfg(feature = "ssh")]
pub mod ssh {
    pub use provsign_ssh_key::*;
}
