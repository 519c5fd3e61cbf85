use crate::Credential;
use async_trait::async_trait;
use provsign_core::utils::Redact;
use provsign_core::{Context, ProvideCredential, Result};
use std::fmt::{Debug, Formatter};

/// StaticCredentialProvider provides a fixed access key pair.
///
/// Used when the key pair was typed into the wizard or created on the fly.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    access_key_id: String,
    secret_access_key: String,
}

impl Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key ID and secret access key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
        )))
    }
}
