use crate::provider::{ProviderId, StorageProvider, StorageRegion};
use provsign_core::time::DateTime;

/// Regions offering Spaces.
pub static SPACES_REGIONS: [StorageRegion; 6] = [
    StorageRegion {
        slug: "nyc3",
        name: "New York 3",
        endpoint: "nyc3.digitaloceanspaces.com",
    },
    StorageRegion {
        slug: "sfo3",
        name: "San Francisco 3",
        endpoint: "sfo3.digitaloceanspaces.com",
    },
    StorageRegion {
        slug: "ams3",
        name: "Amsterdam 3",
        endpoint: "ams3.digitaloceanspaces.com",
    },
    StorageRegion {
        slug: "sgp1",
        name: "Singapore 1",
        endpoint: "sgp1.digitaloceanspaces.com",
    },
    StorageRegion {
        slug: "fra1",
        name: "Frankfurt 1",
        endpoint: "fra1.digitaloceanspaces.com",
    },
    StorageRegion {
        slug: "syd1",
        name: "Sydney 1",
        endpoint: "syd1.digitaloceanspaces.com",
    },
];

/// Spaces verifies every signature against `us-east-1`, whatever the endpoint.
pub const SPACES_SIGNING_REGION: &str = "us-east-1";

/// DigitalOcean Spaces.
#[derive(Debug, Clone)]
pub struct DigitalOceanSpaces {
    signing_region_override: Option<String>,
    time: Option<DateTime>,
}

impl Default for DigitalOceanSpaces {
    fn default() -> Self {
        Self {
            signing_region_override: Some(SPACES_SIGNING_REGION.to_string()),
            time: None,
        }
    }
}

impl DigitalOceanSpaces {
    /// Replace the signing region, `None` signs with the endpoint region.
    pub fn with_signing_region_override(mut self, region: Option<String>) -> Self {
        self.signing_region_override = region;
        self
    }

    /// Specify the signing time.
    ///
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl StorageProvider for DigitalOceanSpaces {
    fn id(&self) -> ProviderId {
        ProviderId::DigitalOcean
    }

    fn regions(&self) -> &'static [StorageRegion] {
        &SPACES_REGIONS
    }

    fn signing_region_override(&self) -> Option<&str> {
        self.signing_region_override.as_deref()
    }

    fn signing_time(&self) -> Option<DateTime> {
        self.time
    }
}
