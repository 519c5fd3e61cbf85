//! Bucket operations built on the signer.
//!
//! Every operation is one signed request against `https://{bucket}.{endpoint}/`.

use crate::constants::*;
use crate::cors::CorsConfiguration;
use crate::credential::Credential;
use crate::request::SignableRequest;
use crate::response::ErrorResponse;
use crate::sign_request::RequestSigner;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, StatusCode};
use log::{debug, info};
use provsign_core::{Context, Error, Result};

/// Message shown when a bucket name belongs to another account.
pub const NAME_CONFLICT_MESSAGE: &str =
    "This bucket name is already taken. Please choose a different name.";

/// CredentialCheck is the outcome of probing a bucket with a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    /// The provider accepted the signature and granted access.
    Authorized,
    /// The provider accepted the signature but denied access to the bucket.
    ///
    /// This happens for credentials scoped to other buckets or for a bucket
    /// that is not created yet, so it still counts as valid.
    Forbidden,
    /// The provider answered with any other status.
    Rejected(StatusCode),
}

impl CredentialCheck {
    /// Classify the status of a validation response.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            CredentialCheck::Authorized
        } else if status == StatusCode::FORBIDDEN {
            CredentialCheck::Forbidden
        } else {
            CredentialCheck::Rejected(status)
        }
    }

    /// Whether the credential should be accepted.
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            CredentialCheck::Authorized | CredentialCheck::Forbidden
        )
    }
}

/// Check a bucket name before any request is made.
///
/// Names are 3 to 63 characters of lowercase letters, digits, `-` and `.`,
/// starting and ending with a letter or digit.
pub fn check_bucket_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| -> Result<()> {
        Err(Error::invalid_request(format!("invalid bucket name: {reason}"))
            .with_context(format!("bucket: {name}")))
    };

    if name.len() < 3 || name.len() > 63 {
        return invalid("must be between 3 and 63 characters long");
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
    {
        return invalid("only lowercase letters, digits, '-' and '.' are allowed");
    }
    let is_alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let bs = name.as_bytes();
    if !is_alnum(bs[0]) || !is_alnum(bs[bs.len() - 1]) {
        return invalid("must start and end with a letter or digit");
    }

    Ok(())
}

/// Build the `GET /` request used to validate a credential.
pub fn validate_request(endpoint: &str, bucket: &str) -> Result<SignableRequest> {
    check_bucket_name(bucket)?;
    Ok(SignableRequest::virtual_hosted(Method::GET, bucket, endpoint))
}

/// Build the `PUT /` request creating a bucket.
pub fn create_bucket_request(endpoint: &str, bucket: &str) -> Result<SignableRequest> {
    check_bucket_name(bucket)?;
    Ok(SignableRequest::virtual_hosted(Method::PUT, bucket, endpoint))
}

/// Build the `PUT /?cors` request allowing `origin` to read the bucket.
pub fn set_cors_request(endpoint: &str, bucket: &str, origin: &str) -> Result<SignableRequest> {
    check_bucket_name(bucket)?;
    if origin.is_empty() {
        return Err(Error::invalid_request("allowed origin must not be empty"));
    }

    let body = CorsConfiguration::for_origin(origin).to_xml()?;
    Ok(
        SignableRequest::virtual_hosted(Method::PUT, bucket, endpoint)
            .with_query("cors", "")
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/xml"))
            .with_payload(body),
    )
}

/// Sign `req` and send it through the context.
pub async fn send(
    ctx: &Context,
    signer: &RequestSigner,
    cred: &Credential,
    mut req: SignableRequest,
) -> Result<http::Response<String>> {
    signer.sign(&mut req, cred)?;

    let method = req.method.clone();
    let url = req.url();
    let resp = ctx.http_send_as_string(req.into_http_request()?).await?;
    debug!("{method} {url} returned {}", resp.status());
    Ok(resp)
}

/// Interpret the response of a bucket creation.
///
/// An existing bucket owned by the same account counts as created.
pub fn parse_create_bucket_response(resp: &http::Response<String>, bucket: &str) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }

    let body = resp.body();
    if body.contains(BUCKET_ALREADY_OWNED_BY_YOU) {
        info!("bucket {bucket} is already owned by this account, treat as created");
        return Ok(());
    }
    if body.contains(BUCKET_ALREADY_EXISTS) {
        return Err(Error::name_conflict(NAME_CONFLICT_MESSAGE)
            .with_context(format!("bucket: {bucket}")));
    }

    Err(Error::provider(format!(
        "failed to create bucket: {} - {}",
        status.as_u16(),
        ErrorResponse::parse(body)
    ))
    .with_context(format!("bucket: {bucket}")))
}

/// Interpret the response of a CORS configuration.
pub fn parse_set_cors_response(resp: &http::Response<String>, bucket: &str) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }

    Err(Error::provider(format!(
        "failed to set cors: {} - {}",
        status.as_u16(),
        ErrorResponse::parse(resp.body())
    ))
    .with_context(format!("bucket: {bucket}")))
}
