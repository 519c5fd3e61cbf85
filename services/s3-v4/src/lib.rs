//! SigV4 signing and bucket provisioning for S3-compatible providers.
//!
//! This crate signs requests with AWS Signature Version 4 and builds the three
//! bucket operations a provisioning flow needs on top of it: credential
//! validation, bucket creation and CORS configuration.
//!
//! ## Providers
//!
//! - [`DigitalOceanSpaces`]: endpoints `{region}.digitaloceanspaces.com`, every
//!   signature is scoped to `us-east-1`.
//! - [`HetznerObjectStorage`]: endpoints `{region}.your-objectstorage.com`,
//!   signed with the endpoint region.
//!
//! ## Quick Start
//!
//! ```no_run
//! use provsign_core::{Context, OsEnv, ProvideCredential};
//! use provsign_http_send_reqwest::ReqwestHttpSend;
//! use provsign_s3_v4::{EnvCredentialProvider, ProviderId, StorageProvider};
//!
//! #[tokio::main]
//! async fn main() -> provsign_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let cred = EnvCredentialProvider::new()
//!         .provide_credential(&ctx)
//!         .await?
//!         .expect("access key pair must be set");
//!
//!     let provider = ProviderId::DigitalOcean.provider();
//!     provider
//!         .create_bucket(&ctx, &cred, "nyc3", "foundry-assets")
//!         .await?;
//!     provider
//!         .validate_and_configure(&ctx, &cred, "nyc3", "foundry-assets", Some("https://foundry.example.com"))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Signing only
//!
//! ```
//! use http::Method;
//! use provsign_s3_v4::{Credential, RequestSigner, SignableRequest};
//!
//! let mut req = SignableRequest::virtual_hosted(Method::GET, "foundry-assets", "fsn1.your-objectstorage.com");
//! let authorization = RequestSigner::new("s3", "fsn1")
//!     .sign(&mut req, &Credential::new("access_key_id", "secret_access_key"))
//!     .unwrap();
//! assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=access_key_id/"));
//! ```

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod request;
pub use request::SignableRequest;

mod sign_request;
pub use sign_request::RequestSigner;

mod cors;
pub use cors::CorsConfiguration;

mod response;
pub use response::ErrorResponse;

pub mod operation;
pub use operation::CredentialCheck;

mod provider;
pub use provider::{ProviderId, StorageProvider, StorageRegion};

mod digitalocean;
pub use digitalocean::{DigitalOceanSpaces, SPACES_REGIONS, SPACES_SIGNING_REGION};

mod hetzner;
pub use hetzner::{HetznerObjectStorage, HETZNER_STORAGE_REGIONS};

mod config;
pub use config::Config;

mod provide_credential;
pub use provide_credential::*;
