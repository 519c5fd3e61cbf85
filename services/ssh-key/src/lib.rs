//! RSA SSH key generation and OpenSSH encoding.
//!
//! The encoder turns a standard SPKI DER public key into the
//! `ssh-rsa <base64> <comment>` line expected by compute providers, wraps the
//! PKCS#8 private key into PEM and computes a SHA-256 fingerprint.
//!
//! ```
//! use provsign_ssh_key::SshKeyPair;
//!
//! let key = SshKeyPair::generate_with_bits(1024).unwrap();
//! assert!(key.public_key_openssh.starts_with("ssh-rsa AAAAB3NzaC1yc2E"));
//! assert!(key.fingerprint.starts_with("SHA256:"));
//! ```

mod constants;
pub use constants::*;

mod asn1;
pub use asn1::{parse_spki, RsaPublicParts};

mod openssh;
pub use openssh::{decode_blob, decode_public_key, encode_blob, encode_public_key};

mod fingerprint;
pub use fingerprint::{openssh_fingerprint, spki_fingerprint};

pub mod pem;

mod key_pair;
pub use key_pair::SshKeyPair;

mod download;
pub use download::download_private_key;
