use crate::constants::{PRIVATE_KEY_PEM_BEGIN, PRIVATE_KEY_PEM_END};
use provsign_core::hash::base64_encode;

/// Wrap a PKCS#8 DER private key into PEM.
///
/// The body is split into 64 character lines and the output has no trailing
/// newline. The DER is never parsed.
pub fn encode_private_key(der: &[u8]) -> String {
    let body = base64_encode(der);

    let mut pem = String::with_capacity(body.len() + body.len() / 64 + 64);
    pem.push_str(PRIVATE_KEY_PEM_BEGIN);
    pem.push('\n');
    for start in (0..body.len()).step_by(64) {
        pem.push_str(&body[start..body.len().min(start + 64)]);
        pem.push('\n');
    }
    pem.push_str(PRIVATE_KEY_PEM_END);
    pem
}
