use crate::asn1::parse_spki;
use crate::constants::{DEFAULT_COMMENT, DEFAULT_KEY_BITS};
use crate::fingerprint::{openssh_fingerprint, spki_fingerprint};
use crate::openssh::{decode_public_key, encode_blob, encode_public_key};
use crate::pem::encode_private_key;
use log::debug;
use provsign_core::utils::Redact;
use provsign_core::{Error, Result};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::RsaPrivateKey;
use std::fmt::{Debug, Formatter};

/// SshKeyPair holds the artifacts of one generated RSA key.
#[derive(Clone)]
pub struct SshKeyPair {
    /// `ssh-rsa <base64> foundry-installer`, ready to upload to a compute provider.
    pub public_key_openssh: String,
    /// PKCS#8 private key in PEM, handed to the user once.
    pub private_key_pem: String,
    /// SHA-256 fingerprint over the SPKI DER.
    pub fingerprint: String,
}

impl Debug for SshKeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SshKeyPair")
            .field("public_key_openssh", &self.public_key_openssh)
            .field("private_key_pem", &Redact::from(&self.private_key_pem))
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl SshKeyPair {
    /// Generate a 4096-bit RSA key with exponent 65537.
    pub fn generate() -> Result<Self> {
        Self::generate_with_bits(DEFAULT_KEY_BITS)
    }

    /// Generate an RSA key with a `bits` sized modulus and exponent 65537.
    pub fn generate_with_bits(bits: usize) -> Result<Self> {
        let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), bits).map_err(|e| {
            Error::unexpected("failed to generate rsa key")
                .with_source(e)
                .with_context(format!("bits: {bits}"))
        })?;

        let spki = private_key
            .to_public_key()
            .to_public_key_der()
            .map_err(|e| Error::unexpected("failed to encode rsa public key").with_source(e))?;
        let pkcs8 = private_key
            .to_pkcs8_der()
            .map_err(|e| Error::unexpected("failed to encode rsa private key").with_source(e))?;

        let key = Self::from_der(spki.as_bytes(), pkcs8.as_bytes())?;
        debug!("generated {bits}-bit rsa key {}", key.fingerprint);
        Ok(key)
    }

    /// Build the artifacts from an SPKI DER public key and a PKCS#8 DER private key.
    pub fn from_der(spki: &[u8], pkcs8: &[u8]) -> Result<Self> {
        let parts = parse_spki(spki)?;

        Ok(Self {
            public_key_openssh: encode_public_key(&parts, DEFAULT_COMMENT),
            private_key_pem: encode_private_key(pkcs8),
            fingerprint: spki_fingerprint(spki),
        })
    }

    /// Fingerprint of the public key as printed by `ssh-keygen -lf`.
    pub fn openssh_fingerprint(&self) -> Result<String> {
        let parts = decode_public_key(&self.public_key_openssh)?;
        Ok(openssh_fingerprint(&encode_blob(&parts)))
    }
}
