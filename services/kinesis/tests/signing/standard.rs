use super::*;
use bytes::Bytes;
use http::header;
use kinesign_core::{Context, ErrorKind, ReaderBody, Signer};
use kinesign_kinesis::{Credential, RequestSigner, StaticCredentialProvider};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Read};

#[test]
fn test_sign_is_deterministic() -> anyhow::Result<()> {
    init_signing_test();

    let cred = Credential::new("ASWKEY", "AWSSECRET");
    let signer = RequestSigner::new();

    let mut l = kinesis_request(STANDARD_URL, NOV_28);
    let mut r = kinesis_request(STANDARD_URL, NOV_28);
    signer.sign(&mut l, &cred)?;
    signer.sign(&mut r, &cred)?;

    assert_eq!(authorization(&l), authorization(&r));
    Ok(())
}

#[test]
fn test_signature_depends_on_date_and_body() -> anyhow::Result<()> {
    init_signing_test();

    let cred = Credential::new("ASWKEY", "AWSSECRET");
    let signer = RequestSigner::new();

    let mut base = kinesis_request(STANDARD_URL, NOV_28);
    signer.sign(&mut base, &cred)?;

    let mut other_day = kinesis_request(STANDARD_URL, NOV_25);
    signer.sign(&mut other_day, &cred)?;
    assert_ne!(authorization(&base), authorization(&other_day));

    let mut other_second = kinesis_request(STANDARD_URL, "Thu, 28 Nov 2013 15:04:06 GMT");
    signer.sign(&mut other_second, &cred)?;
    assert_ne!(authorization(&base), authorization(&other_second));

    let mut other_body = kinesis_request(STANDARD_URL, NOV_28).map(|_| r#"{"StreamName":"a"}"#);
    signer.sign(&mut other_body, &cred)?;
    assert_ne!(authorization(&base), authorization(&other_body));

    Ok(())
}

#[test]
fn test_session_token_is_not_signed() -> anyhow::Result<()> {
    init_signing_test();

    let signer = RequestSigner::new();

    let mut l = kinesis_request(STANDARD_URL, NOV_28);
    signer.sign(&mut l, &Credential::new("ASWKEY", "AWSSECRET"))?;

    let mut r = kinesis_request(STANDARD_URL, NOV_28);
    signer.sign(
        &mut r,
        &Credential::new("ASWKEY", "AWSSECRET").with_session_token("TOKEN1"),
    )?;

    assert_eq!(authorization(&l), authorization(&r));
    assert!(l.headers().get("x-amz-security-token").is_none());
    assert_eq!(r.headers()["x-amz-security-token"], "TOKEN1");
    Ok(())
}

#[test]
fn test_sign_rewrites_date_header() -> anyhow::Result<()> {
    init_signing_test();

    let mut req = kinesis_request(CUSTOM_URL, NOV_25);
    RequestSigner::new().sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))?;

    assert_eq!(req.headers()[header::DATE], "20131125T150405Z");
    assert_eq!(req.headers()["x-amz-date"], "20131125T150405Z");

    // Signing again without resetting the Date header keeps the same time.
    let first = authorization(&req).to_string();
    req.headers_mut().remove(header::AUTHORIZATION);
    RequestSigner::new().sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))?;
    assert_eq!(authorization(&req), first);
    Ok(())
}

#[test]
fn test_malformed_date_leaves_request_unchanged() {
    init_signing_test();

    for date in ["", "yesterday", "2013-11-28T15:04:05Z", "Thu, 31 Nov 2013 15:04:05 GMT"] {
        let mut req = kinesis_request(STANDARD_URL, NOV_28);
        set_date(&mut req, date);
        req.headers_mut()
            .insert(header::AUTHORIZATION, "stale".parse().unwrap());
        let before = req.headers().clone();

        let err = RequestSigner::new()
            .sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))
            .expect_err("sign must fail");
        assert_eq!(err.kind(), ErrorKind::DateInvalid, "date: {date:?}");
        assert_eq!(req.headers(), &before, "date: {date:?}");
    }
}

#[test]
fn test_body_is_still_readable_after_signing() -> anyhow::Result<()> {
    init_signing_test();

    let payload = r#"{"StreamName":"a","Data":"aGVsbG8=","PartitionKey":"p"}"#;
    let mut req = kinesis_request(STANDARD_URL, NOV_28)
        .map(|_| ReaderBody::new(Cursor::new(payload.as_bytes().to_vec())));
    let mut expected = kinesis_request(STANDARD_URL, NOV_28).map(|_| Bytes::from(payload));

    let cred = Credential::new("ASWKEY", "AWSSECRET");
    RequestSigner::new().sign(&mut req, &cred)?;
    RequestSigner::new().sign(&mut expected, &cred)?;
    assert_eq!(authorization(&req), authorization(&expected));

    let mut sent = String::new();
    req.body_mut().read_to_string(&mut sent)?;
    assert_eq!(sent, payload);
    Ok(())
}

#[tokio::test]
async fn test_signer_with_static_provider() -> anyhow::Result<()> {
    init_signing_test();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ASWKEY", "AWSSECRET"),
        RequestSigner::new(),
    );

    let mut req = kinesis_request(STANDARD_URL, NOV_28);
    signer.sign(&mut req).await?;
    assert_eq!(
        authorization(&req),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=6c21aca39f1d4afd383fbc45dd3a580192036162f74bf9fda6cad6c6fb7cde2f"
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_shared_between_tasks() -> anyhow::Result<()> {
    init_signing_test();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ASWKEY", "AWSSECRET"),
        RequestSigner::new(),
    );

    let mut handles = Vec::new();
    for _ in 0..8 {
        let signer = signer.clone();
        handles.push(tokio::spawn(async move {
            let mut req = kinesis_request(CUSTOM_URL, NOV_28);
            signer.sign(&mut req).await.map(|_| authorization(&req).to_string())
        }));
    }

    for handle in handles {
        assert_eq!(
            handle.await??,
            "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128///aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=a1a3c571ad100fd1483a5c699475f84b0407c37a76b9c20fa53b579b36033930"
        );
    }
    Ok(())
}

#[test]
fn test_mismatched_weekday_is_accepted() -> anyhow::Result<()> {
    init_signing_test();

    let cred = Credential::new("ASWKEY", "AWSSECRET");

    let mut l = kinesis_request(STANDARD_URL, NOV_28);
    RequestSigner::new().sign(&mut l, &cred)?;
    let mut r = kinesis_request(STANDARD_URL, "Fri, 28 Nov 2013 15:04:05 GMT");
    RequestSigner::new().sign(&mut r, &cred)?;

    assert_eq!(authorization(&l), authorization(&r));
    assert_eq!(r.headers()[header::DATE], "20131128T150405Z");
    Ok(())
}
