use crate::constants::*;
use crate::provider::{ProviderId, StorageProvider};
use crate::{DigitalOceanSpaces, HetznerObjectStorage};
use provsign_core::{Context, Error, Result};
use std::time::Duration;

/// Config for provisioning object storage.
///
/// Fields set explicitly win over the environment.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `provider` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_PROVIDER`]
    pub provider: Option<ProviderId>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_REGION`]
    pub region: Option<String>,
    /// `bucket` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_BUCKET`]
    pub bucket: Option<String>,
    /// `allowed_origin` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_ALLOWED_ORIGIN`]
    pub allowed_origin: Option<String>,
    /// `signing_region_override` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_SIGNING_REGION`]
    /// - default to the provider's own override
    pub signing_region_override: Option<String>,
    /// `timeout` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PROVSIGN_S3_TIMEOUT_SECS`]
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        let envs = ctx.env_vars();

        if self.provider.is_none() {
            if let Some(v) = envs.get(PROVSIGN_S3_PROVIDER) {
                self.provider = Some(v.parse()?);
            }
        }
        self.region = self
            .region
            .or_else(|| envs.get(PROVSIGN_S3_REGION).cloned());
        self.bucket = self
            .bucket
            .or_else(|| envs.get(PROVSIGN_S3_BUCKET).cloned());
        self.allowed_origin = self
            .allowed_origin
            .or_else(|| envs.get(PROVSIGN_S3_ALLOWED_ORIGIN).cloned());
        self.signing_region_override = self
            .signing_region_override
            .or_else(|| envs.get(PROVSIGN_S3_SIGNING_REGION).cloned());
        if self.timeout.is_none() {
            if let Some(v) = envs.get(PROVSIGN_S3_TIMEOUT_SECS) {
                let secs = v.parse::<u64>().map_err(|e| {
                    Error::config_invalid("timeout must be a number of seconds")
                        .with_source(e)
                        .with_context(format!("{PROVSIGN_S3_TIMEOUT_SECS}: {v}"))
                })?;
                self.timeout = Some(Duration::from_secs(secs));
            }
        }

        Ok(self)
    }

    /// Build the configured provider with the signing region override applied.
    pub fn provider(&self) -> Result<Box<dyn StorageProvider>> {
        let id = self
            .provider
            .ok_or_else(|| Error::config_invalid("storage provider is not configured"))?;

        let Some(region) = self.signing_region_override.clone() else {
            return Ok(id.provider());
        };
        Ok(match id {
            ProviderId::DigitalOcean => Box::new(
                DigitalOceanSpaces::default().with_signing_region_override(Some(region)),
            ),
            ProviderId::Hetzner => Box::new(
                HetznerObjectStorage::default().with_signing_region_override(Some(region)),
            ),
        })
    }

    /// The configured region, checked against the provider's region table.
    pub fn region(&self) -> Result<&str> {
        let region = self
            .region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("storage region is not configured"))?;
        self.provider()?.region(region)?;
        Ok(region)
    }

    /// The configured bucket name.
    pub fn bucket(&self) -> Result<&str> {
        self.bucket
            .as_deref()
            .ok_or_else(|| Error::config_invalid("bucket is not configured"))
    }
}
