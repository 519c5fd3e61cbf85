use crate::constants::*;
use crate::credential::Credential;
use crate::request::SignableRequest;
use http::header;
use http::{HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;
use provsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use provsign_core::time::{format_date, format_iso8601, now, DateTime};
use provsign_core::utils::Redact;
use provsign_core::{Error, Result, SigningCredential};
use std::fmt::Write;

/// RequestSigner that implements AWS SigV4 for S3-compatible providers.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for `service` scoped to the signing `region`.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The region used in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign the request in place and return the `Authorization` header value.
    ///
    /// `host`, `x-amz-date` and `x-amz-content-sha256` are stamped before signing,
    /// the returned value is also inserted into the request headers.
    pub fn sign(&self, req: &mut SignableRequest, cred: &Credential) -> Result<String> {
        let now = self.time.unwrap_or_else(now);

        check_request(req, cred, &self.region)?;
        canonicalize_header(req, now)?;

        let authorization = self.calculate(req, cred, now)?;

        let mut value = HeaderValue::from_str(&authorization).map_err(|e| {
            Error::unexpected("failed to create authorization header").with_source(e)
        })?;
        value.set_sensitive(true);
        req.headers.insert(header::AUTHORIZATION, value);

        Ok(authorization)
    }

    /// Calculate the authorization value of an already stamped request.
    fn calculate(&self, req: &SignableRequest, cred: &Credential, now: DateTime) -> Result<String> {
        // build canonical request and string to sign.
        let creq = canonical_request_string(req)?;
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            self.region,
            self.service
        );
        debug!(
            "signing for {} with scope: {scope}",
            Redact::from(&cred.access_key_id)
        );

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS4_HMAC_SHA256}")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{}", &scope)?;
            write!(f, "{}", &encoded_req)?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        Ok(format!(
            "{AWS4_HMAC_SHA256} Credential={}/{}, SignedHeaders={}, Signature={}",
            cred.access_key_id,
            scope,
            signed_header_names(req).join(";"),
            signature
        ))
    }
}

fn check_request(req: &SignableRequest, cred: &Credential, region: &str) -> Result<()> {
    if !cred.is_valid() {
        return Err(Error::invalid_request(
            "access key id and secret access key must not be empty",
        ));
    }
    if req.host.is_empty() {
        return Err(Error::invalid_request("host must not be empty"));
    }
    if req.method != Method::GET && req.method != Method::PUT {
        return Err(Error::invalid_request("only GET and PUT requests can be signed")
            .with_context(format!("method: {}", req.method)));
    }
    if region.is_empty() {
        return Err(Error::invalid_request("signing region must not be empty"));
    }
    if !req.canonical_uri.starts_with('/') {
        return Err(Error::invalid_request("canonical uri must start with '/'")
            .with_context(format!("uri: {}", req.canonical_uri)));
    }
    if req.method == Method::PUT
        && !req.payload.is_empty()
        && !req.headers.contains_key(header::CONTENT_TYPE)
    {
        return Err(Error::invalid_request(
            "PUT request with a body must carry content-type",
        ));
    }
    if let Some(v) = req.headers.get(X_AMZ_CONTENT_SHA_256) {
        // Compared as it will be signed, after trimming.
        let expected = hex_sha256(&req.payload);
        if v.to_str().ok().map(|v| v.trim_matches(' ')) != Some(expected.as_str()) {
            return Err(Error::invalid_request(
                "x-amz-content-sha256 does not match the payload",
            ));
        }
    }

    Ok(())
}

fn canonicalize_header(req: &mut SignableRequest, now: DateTime) -> Result<()> {
    // A previous signature must not be signed again.
    req.headers.remove(header::AUTHORIZATION);

    // Header values are trimmed, see Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in req.headers.iter_mut() {
        header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if req.headers.get(header::HOST).is_none() {
        req.headers
            .insert(header::HOST, HeaderValue::from_str(&req.host)?);
    }

    // DATE header is always replaced, the scope must match it.
    req.headers
        .insert(X_AMZ_DATE, HeaderValue::from_str(&format_iso8601(now))?);

    // Insert X_AMZ_CONTENT_SHA_256 header if not present.
    if req.headers.get(X_AMZ_CONTENT_SHA_256).is_none() {
        req.headers.insert(
            X_AMZ_CONTENT_SHA_256,
            HeaderValue::from_str(&hex_sha256(&req.payload))?,
        );
    }

    Ok(())
}

fn header_value_normalize(v: &mut HeaderValue) {
    let bs = v.as_bytes();

    let Some(starting_index) = bs.iter().position(|b| *b != b' ') else {
        *v = HeaderValue::from_static("");
        return;
    };
    let ending_offset = bs.iter().rev().position(|b| *b != b' ').unwrap_or(0);
    let ending_index = bs.len() - ending_offset;

    if starting_index == 0 && ending_offset == 0 {
        return;
    }

    // This can't fail because we started with a valid HeaderValue and then only trimmed spaces
    let is_sensitive = v.is_sensitive();
    *v = HeaderValue::from_bytes(&bs[starting_index..ending_index])
        .expect("invalid header value");
    v.set_sensitive(is_sensitive);
}

fn signed_header_names(req: &SignableRequest) -> Vec<&str> {
    let mut names: Vec<&str> = req.headers.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    names
}

fn canonical_query_string(req: &SignableRequest) -> String {
    let mut query = req
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by encoded param name
    query.sort();

    query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn canonical_request_string(req: &SignableRequest) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", req.method)?;
    // Insert path, already encoded by the caller
    writeln!(f, "{}", req.canonical_uri)?;
    // Insert query
    writeln!(f, "{}", canonical_query_string(req))?;
    // Insert signed headers
    let signed_headers = signed_header_names(req);
    for name in signed_headers.iter() {
        let values = req
            .headers
            .get_all(*name)
            .iter()
            .map(|v| v.to_str())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        writeln!(f, "{}:{}", name, values.join(","))?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;

    let payload_hash = req
        .headers
        .get(X_AMZ_CONTENT_SHA_256)
        .ok_or_else(|| Error::invalid_request("x-amz-content-sha256 must be stamped"))?
        .to_str()?;
    write!(f, "{payload_hash}")?;
    debug!("calculated canonical request: {f}");

    Ok(f)
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
