use crate::constants::S3_SERVICE;
use crate::credential::Credential;
use crate::operation::{self, CredentialCheck};
use crate::sign_request::RequestSigner;
use crate::{DigitalOceanSpaces, HetznerObjectStorage};
use async_trait::async_trait;
use log::warn;
use provsign_core::time::DateTime;
use provsign_core::{Context, Error, Result};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// ProviderId names a supported storage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// DigitalOcean Spaces.
    DigitalOcean,
    /// Hetzner Object Storage.
    Hetzner,
}

impl ProviderId {
    /// The id as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::DigitalOcean => "digitalocean",
            ProviderId::Hetzner => "hetzner",
        }
    }

    /// Build the provider with its default settings.
    pub fn provider(self) -> Box<dyn StorageProvider> {
        match self {
            ProviderId::DigitalOcean => Box::new(DigitalOceanSpaces::default()),
            ProviderId::Hetzner => Box::new(HetznerObjectStorage::default()),
        }
    }
}

impl FromStr for ProviderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "digitalocean" => Ok(ProviderId::DigitalOcean),
            "hetzner" => Ok(ProviderId::Hetzner),
            v => Err(Error::config_invalid("unknown storage provider")
                .with_context(format!("provider: {v}"))),
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// StorageRegion is one region of a storage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageRegion {
    /// Region slug, like `nyc3`.
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Endpoint host without scheme, like `nyc3.digitaloceanspaces.com`.
    pub endpoint: &'static str,
}

/// StorageProvider is an S3-compatible object storage provider.
///
/// Implementations only describe regions and signing quirks, the bucket
/// operations are shared.
#[async_trait]
pub trait StorageProvider: Debug + Send + Sync + 'static {
    /// The provider id.
    fn id(&self) -> ProviderId;

    /// All regions offering object storage.
    fn regions(&self) -> &'static [StorageRegion];

    /// Region used in the signing scope instead of the endpoint region.
    fn signing_region_override(&self) -> Option<&str>;

    /// Fixed signing time, only set in tests.
    fn signing_time(&self) -> Option<DateTime> {
        None
    }

    /// Look up a region by slug.
    fn region(&self, slug: &str) -> Result<&'static StorageRegion> {
        self.regions()
            .iter()
            .find(|r| r.slug == slug)
            .ok_or_else(|| {
                Error::config_invalid("unknown storage region")
                    .with_context(format!("provider: {}", self.id()))
                    .with_context(format!("region: {slug}"))
            })
    }

    /// Endpoint host of a region.
    fn endpoint(&self, region: &str) -> Result<&'static str> {
        Ok(self.region(region)?.endpoint)
    }

    /// Region placed in the credential scope.
    fn signing_region(&self, region: &str) -> Result<String> {
        let region = self.region(region)?;
        Ok(self
            .signing_region_override()
            .unwrap_or(region.slug)
            .to_string())
    }

    /// Build the signer for a region.
    fn signer(&self, region: &str) -> Result<RequestSigner> {
        let signer = RequestSigner::new(S3_SERVICE, &self.signing_region(region)?);
        Ok(match self.signing_time() {
            Some(t) => signer.with_time(t),
            None => signer,
        })
    }

    /// Probe `bucket` with the credential and classify the answer.
    async fn check_credentials(
        &self,
        ctx: &Context,
        cred: &Credential,
        region: &str,
        bucket: &str,
    ) -> Result<CredentialCheck> {
        let req = operation::validate_request(self.endpoint(region)?, bucket)?;
        let resp = operation::send(ctx, &self.signer(region)?, cred, req).await?;

        let check = CredentialCheck::from_status(resp.status());
        if let CredentialCheck::Rejected(status) = check {
            warn!(
                "{} rejected credential for bucket {bucket} in {region}: {status}",
                self.id()
            );
        }
        Ok(check)
    }

    /// Whether the credential is usable for `bucket`.
    ///
    /// A 403 counts as valid, see [`CredentialCheck::Forbidden`].
    async fn validate_credentials(
        &self,
        ctx: &Context,
        cred: &Credential,
        region: &str,
        bucket: &str,
    ) -> Result<bool> {
        Ok(self
            .check_credentials(ctx, cred, region, bucket)
            .await?
            .is_valid())
    }

    /// Create `bucket`, succeeding when it already belongs to this account.
    async fn create_bucket(
        &self,
        ctx: &Context,
        cred: &Credential,
        region: &str,
        bucket: &str,
    ) -> Result<()> {
        let req = operation::create_bucket_request(self.endpoint(region)?, bucket)?;
        let resp = operation::send(ctx, &self.signer(region)?, cred, req).await?;
        operation::parse_create_bucket_response(&resp, bucket)
    }

    /// Allow browsers at `origin` to read objects of `bucket`.
    async fn set_cors(
        &self,
        ctx: &Context,
        cred: &Credential,
        region: &str,
        bucket: &str,
        origin: &str,
    ) -> Result<()> {
        let req = operation::set_cors_request(self.endpoint(region)?, bucket, origin)?;
        let resp = operation::send(ctx, &self.signer(region)?, cred, req).await?;
        operation::parse_set_cors_response(&resp, bucket)
    }

    /// Validate the credential and apply CORS when it passes and an origin is given.
    async fn validate_and_configure(
        &self,
        ctx: &Context,
        cred: &Credential,
        region: &str,
        bucket: &str,
        origin: Option<&str>,
    ) -> Result<bool> {
        let valid = self.validate_credentials(ctx, cred, region, bucket).await?;
        if let (true, Some(origin)) = (valid, origin) {
            self.set_cors(ctx, cred, region, bucket, origin).await?;
        }
        Ok(valid)
    }
}
