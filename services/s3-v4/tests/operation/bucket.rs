use super::{mock_context, MockResponse};
use crate::signing::{example_credential, new_year, split_authorization};
use http::Method;
use pretty_assertions::assert_eq;
use provsign_core::ErrorKind;
use provsign_s3_v4::operation::NAME_CONFLICT_MESSAGE;
use provsign_s3_v4::{DigitalOceanSpaces, HetznerObjectStorage, StorageProvider};

const ALREADY_OWNED: &str = include_str!("../../testdata/bucket_already_owned_by_you.xml");
const ALREADY_EXISTS: &str = include_str!("../../testdata/bucket_already_exists.xml");
const ACCESS_DENIED: &str = include_str!("../../testdata/access_denied.xml");

#[tokio::test]
async fn test_create_bucket_is_idempotent() {
    let (ctx, mock) = mock_context([MockResponse::ok(), MockResponse::status(409, ALREADY_OWNED)]);
    let provider = HetznerObjectStorage::default();
    let cred = example_credential();

    provider
        .create_bucket(&ctx, &cred, "fsn1", "foundry-assets-test")
        .await
        .unwrap();
    provider
        .create_bucket(&ctx, &cred, "fsn1", "foundry-assets-test")
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        assert_eq!(req.method(), Method::PUT);
        assert_eq!(
            req.uri().to_string(),
            "https://foundry-assets-test.fsn1.your-objectstorage.com/"
        );
        assert!(req.body().is_empty());
    }
}

#[tokio::test]
async fn test_create_bucket_name_conflict() {
    let (ctx, _) = mock_context([MockResponse::status(409, ALREADY_EXISTS)]);

    let err = DigitalOceanSpaces::default()
        .create_bucket(&ctx, &example_credential(), "nyc3", "foundry-assets-test")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NameConflict);
    assert_eq!(err.message(), NAME_CONFLICT_MESSAGE);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_create_bucket_provider_error() {
    let (ctx, _) = mock_context([MockResponse::status(403, ACCESS_DENIED)]);

    let err = HetznerObjectStorage::default()
        .create_bucket(&ctx, &example_credential(), "fsn1", "foundry-assets-test")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert_eq!(
        err.message(),
        "failed to create bucket: 403 - AccessDenied: Access Denied"
    );
}

#[tokio::test]
async fn test_create_bucket_relay_error() {
    let (ctx, _) = mock_context([MockResponse::status(
        502,
        r#"{"error": "upstream unavailable"}"#,
    )]);

    let err = HetznerObjectStorage::default()
        .create_bucket(&ctx, &example_credential(), "fsn1", "foundry-assets-test")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert_eq!(
        err.message(),
        "failed to create bucket: 502 - upstream unavailable"
    );
}

#[tokio::test]
async fn test_create_bucket_signed_with_frozen_time() {
    let (ctx, mock) = mock_context([MockResponse::ok()]);
    let provider = DigitalOceanSpaces::default().with_time(new_year());

    provider
        .create_bucket(&ctx, &example_credential(), "nyc3", "foundry-assets-test")
        .await
        .unwrap();

    let requests = mock.requests();
    let authorization = requests[0].headers()["authorization"].to_str().unwrap();
    let (_, _, signature) = split_authorization(authorization);
    assert_eq!(
        signature,
        "7d1a0f2bb13ddf5fb144fdf38d707e7906862f10bf4fab8072405b946551c633"
    );
}

#[tokio::test]
async fn test_create_bucket_transport_error() {
    let (ctx, _) = mock_context([MockResponse::Unreachable]);

    let err = HetznerObjectStorage::default()
        .create_bucket(&ctx, &example_credential(), "fsn1", "foundry-assets-test")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_retryable());
}
