//! Minimal DER reader for RSA SubjectPublicKeyInfo.

use crate::constants::*;
use provsign_core::{Error, Result};

/// RsaPublicParts is the `{modulus, exponent}` pair of an RSA public key.
///
/// Both integers are big-endian magnitudes without leading zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicParts {
    /// The modulus `n`.
    pub modulus: Vec<u8>,
    /// The public exponent `e`.
    pub exponent: Vec<u8>,
}

impl RsaPublicParts {
    /// Build from big-endian integers, stripping redundant leading zeros.
    pub fn new(modulus: &[u8], exponent: &[u8]) -> Self {
        Self {
            modulus: strip_leading_zeros(modulus).to_vec(),
            exponent: strip_leading_zeros(exponent).to_vec(),
        }
    }
}

/// Parse the RSAPublicKey nested in a DER encoded SubjectPublicKeyInfo.
///
/// ```text
/// SEQUENCE {
///   SEQUENCE { algorithm OID, parameters }
///   BIT STRING { 0x00, RSAPublicKey SEQUENCE { INTEGER n, INTEGER e } }
/// }
/// ```
pub fn parse_spki(der: &[u8]) -> Result<RsaPublicParts> {
    let mut spki = DerReader::new(der).read(TAG_SEQUENCE, "SubjectPublicKeyInfo")?;
    spki.read(TAG_SEQUENCE, "AlgorithmIdentifier")?;

    let bit_string = spki.read(TAG_BIT_STRING, "subjectPublicKey")?;
    let Some((_unused_bits, key)) = bit_string.rest().split_first() else {
        return Err(Error::malformed_key("BIT STRING is empty"));
    };

    let mut key = DerReader::new(key).read(TAG_SEQUENCE, "RSAPublicKey")?;
    let modulus = key.read(TAG_INTEGER, "modulus")?;
    let exponent = key.read(TAG_INTEGER, "publicExponent")?;
    if !key.is_empty() {
        return Err(Error::malformed_key(
            "RSAPublicKey must hold exactly two INTEGERs",
        ));
    }

    let parts = RsaPublicParts::new(modulus.rest(), exponent.rest());
    if parts.modulus.is_empty() || parts.exponent.is_empty() {
        return Err(Error::malformed_key("RSA integers must not be zero"));
    }
    Ok(parts)
}

/// Strip leading zero bytes, keeping a lone zero intact.
pub(crate) fn strip_leading_zeros(v: &[u8]) -> &[u8] {
    let start = v.iter().position(|b| *b != 0).unwrap_or(v.len());
    &v[start..]
}

/// DerReader walks TLV triples of a DER buffer.
struct DerReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn byte(&mut self, what: &str) -> Result<u8> {
        let b = *self.buf.get(self.pos).ok_or_else(|| {
            Error::malformed_key("unexpected end of key").with_context(format!("reading: {what}"))
        })?;
        self.pos += 1;
        Ok(b)
    }

    /// Read a length in short form (`< 0x80`) or long form (`0x81..=0x84`).
    fn length(&mut self, what: &str) -> Result<usize> {
        let first = self.byte(what)?;
        if first < 0x80 {
            return Ok(first as usize);
        }

        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return Err(Error::malformed_key("unsupported DER length form")
                .with_context(format!("reading: {what}"))
                .with_context(format!("length byte: {first:#04x}")));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.byte(what)? as usize;
        }
        Ok(len)
    }

    /// Read one element with `tag` and return a reader over its content.
    fn read(&mut self, tag: u8, what: &str) -> Result<DerReader<'a>> {
        let actual = self.byte(what)?;
        if actual != tag {
            return Err(Error::malformed_key(format!("unexpected DER tag for {what}"))
                .with_context(format!("expected: {tag:#04x}"))
                .with_context(format!("actual: {actual:#04x}")));
        }

        let len = self.length(what)?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| {
                Error::malformed_key("DER length exceeds input")
                    .with_context(format!("reading: {what}"))
                    .with_context(format!("length: {len}"))
            })?;

        let content = &self.buf[self.pos..end];
        self.pos = end;
        Ok(DerReader::new(content))
    }
}
