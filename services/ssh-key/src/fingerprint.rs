use provsign_core::hash::{base64_encode_no_pad, sha256};

/// Fingerprint over the SPKI DER: `SHA256:` and colon separated lowercase hex.
///
/// This is the value shown to users during provisioning. It differs from what
/// `ssh-keygen -lf` prints, see [`openssh_fingerprint`] for that one.
pub fn spki_fingerprint(spki: &[u8]) -> String {
    let hex = sha256(spki)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":");
    format!("SHA256:{hex}")
}

/// Fingerprint over the OpenSSH blob as printed by `ssh-keygen -lf`.
pub fn openssh_fingerprint(blob: &[u8]) -> String {
    format!("SHA256:{}", base64_encode_no_pad(&sha256(blob)))
}
