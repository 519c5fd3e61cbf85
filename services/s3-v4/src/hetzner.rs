use crate::provider::{ProviderId, StorageProvider, StorageRegion};
use provsign_core::time::DateTime;

/// Regions offering Hetzner Object Storage.
pub static HETZNER_STORAGE_REGIONS: [StorageRegion; 3] = [
    StorageRegion {
        slug: "fsn1",
        name: "Falkenstein (fsn1)",
        endpoint: "fsn1.your-objectstorage.com",
    },
    StorageRegion {
        slug: "nbg1",
        name: "Nuremberg (nbg1)",
        endpoint: "nbg1.your-objectstorage.com",
    },
    StorageRegion {
        slug: "hel1",
        name: "Helsinki (hel1)",
        endpoint: "hel1.your-objectstorage.com",
    },
];

/// Hetzner Object Storage, signed with the endpoint region.
#[derive(Debug, Clone, Default)]
pub struct HetznerObjectStorage {
    signing_region_override: Option<String>,
    time: Option<DateTime>,
}

impl HetznerObjectStorage {
    /// Sign with `region` instead of the endpoint region.
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

impl StorageProvider for HetznerObjectStorage {
    fn id(&self) -> ProviderId {
        ProviderId::Hetzner
    }

    fn regions(&self) -> &'static [StorageRegion] {
        &HETZNER_STORAGE_REGIONS
    }

    fn signing_region_override(&self) -> Option<&str> {
        self.signing_region_override.as_deref()
    }

    fn signing_time(&self) -> Option<DateTime> {
        self.time
    }
}
