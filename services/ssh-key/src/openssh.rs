//! OpenSSH public key wire format.

use crate::asn1::{strip_leading_zeros, RsaPublicParts};
use crate::constants::SSH_RSA;
use provsign_core::hash::{base64_decode, base64_encode};
use provsign_core::{Error, Result};

/// Encode `ssh-rsa <base64 blob> <comment>`.
pub fn encode_public_key(parts: &RsaPublicParts, comment: &str) -> String {
    let blob = base64_encode(&encode_blob(parts));
    if comment.is_empty() {
        format!("{SSH_RSA} {blob}")
    } else {
        format!("{SSH_RSA} {blob} {comment}")
    }
}

/// Encode the `string("ssh-rsa") || mpint(e) || mpint(n)` blob.
pub fn encode_blob(parts: &RsaPublicParts) -> Vec<u8> {
    // Three length prefixes plus up to two padding bytes.
    let size = SSH_RSA.len() + parts.exponent.len() + parts.modulus.len() + 14;
    let mut blob = Vec::with_capacity(size);
    put_string(&mut blob, SSH_RSA.as_bytes());
    put_mpint(&mut blob, &parts.exponent);
    put_mpint(&mut blob, &parts.modulus);
    blob
}

/// Decode an `ssh-rsa` blob back into its integers.
pub fn decode_blob(blob: &[u8]) -> Result<RsaPublicParts> {
    let mut rest = blob;
    let key_type = take_string(&mut rest, "key type")?;
    if key_type != SSH_RSA.as_bytes() {
        return Err(Error::malformed_key("unsupported ssh key type")
            .with_context(format!("key type: {}", String::from_utf8_lossy(key_type))));
    }
    let exponent = take_string(&mut rest, "exponent")?;
    let modulus = take_string(&mut rest, "modulus")?;
    if !rest.is_empty() {
        return Err(Error::malformed_key("trailing bytes after ssh-rsa blob")
            .with_context(format!("remaining: {}", rest.len())));
    }

    Ok(RsaPublicParts::new(modulus, exponent))
}

/// Decode the blob carried by a `ssh-rsa <base64> [comment]` line.
pub fn decode_public_key(line: &str) -> Result<RsaPublicParts> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(SSH_RSA), Some(blob)) => {
            let blob = base64_decode(blob).map_err(|e| {
                Error::malformed_key("ssh-rsa blob is not valid base64").with_source(e)
            })?;
            decode_blob(&blob)
        }
        _ => Err(Error::malformed_key("not an ssh-rsa public key line")),
    }
}

fn put_string(buf: &mut Vec<u8>, v: &[u8]) {
    buf.extend_from_slice(&(v.len() as u32).to_be_bytes());
    buf.extend_from_slice(v);
}

/// Write a positive integer, left padded with a zero byte when its high bit is set.
fn put_mpint(buf: &mut Vec<u8>, v: &[u8]) {
    let v = strip_leading_zeros(v);
    match v.first() {
        Some(b) if b & 0x80 != 0 => {
            buf.extend_from_slice(&(v.len() as u32 + 1).to_be_bytes());
            buf.push(0);
            buf.extend_from_slice(v);
        }
        _ => put_string(buf, v),
    }
}

fn take_string<'a>(rest: &mut &'a [u8], what: &str) -> Result<&'a [u8]> {
    let truncated = || {
        Error::malformed_key("truncated ssh-rsa blob").with_context(format!("reading: {what}"))
    };

    let (len, tail) = rest.split_first_chunk::<4>().ok_or_else(truncated)?;
    let len = u32::from_be_bytes(*len) as usize;
    if tail.len() < len {
        return Err(truncated());
    }
    let (v, tail) = tail.split_at(len);
    *rest = tail;
    Ok(v)
}
